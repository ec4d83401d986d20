//! Remote data gateway subsystem.
//!
//! # Data Flow
//! ```text
//! controller / wallet session
//!     → client.rs (typed async operations, reqwest)
//!     → news backend REST surface, node-info endpoints
//!     → types.rs (wire structs, ApiError taxonomy)
//! ```
//!
//! # Error Policy
//! - Transport failure (no response) → `ApiError::Network`
//! - Non-success status → `ApiError::Server { status, detail }`
//! - Mint attempts re-wrap both into user-facing `ApiError::Minting`
//! - The minted-items listing degrades to an empty list instead of failing

pub mod client;
pub mod types;

pub use client::NewsGateway;
pub use types::{ApiError, ApiResult, ArticlePage, MintReceipt, NewsArticle, NftRecord, SubmitReceipt};

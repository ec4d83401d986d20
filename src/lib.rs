//! Newsgraph client library.
//!
//! Client-side orchestration for a metagraph-backed news application:
//! paginated browsing of a curated feed, minting articles as NFTs through
//! an ephemeral ledger wallet, and inspection of the metagraph's node
//! layers.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌───────────────────────────────────────────────┐
//!                  │                AppController                  │
//!                  │  views · pagination · minting map · errors    │
//!                  └──────────┬──────────────────────┬─────────────┘
//!                             │                      │
//!                             ▼                      ▼
//!                  ┌─────────────────┐    ┌────────────────────────┐
//!                  │   NewsGateway   │    │     WalletSession      │
//!                  │ news REST API   │    │ ephemeral keys · L0/L1 │
//!                  │ node-info URLs  │    │ balance · transfers    │
//!                  └─────────────────┘    └────────────────────────┘
//! ```
//!
//! The controller owns both collaborators as plain values; there is no
//! ambient global state.

// Core subsystems
pub mod config;
pub mod controller;
pub mod gateway;
pub mod wallet;

// Cross-cutting concerns
pub mod observability;

pub use config::ClientConfig;
pub use controller::AppController;
pub use gateway::NewsGateway;
pub use wallet::WalletSession;

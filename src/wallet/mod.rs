//! Wallet session subsystem.
//!
//! # Data Flow
//! ```text
//! controller
//!     → session.rs (connection lifecycle, guards)
//!     → account.rs (ephemeral key generation, signing)
//!     → network.rs (balance, last reference, transfer submission)
//!     → ledger network layers (block explorer, L0, L1)
//! ```
//!
//! # Security Constraints
//! - Keys are generated fresh per connect and never persisted
//! - Key material is never logged
//! - Operations requiring a session fail before any network call when
//!   disconnected

pub mod account;
pub mod network;
pub mod session;
pub mod types;

pub use session::WalletSession;
pub use types::{AddressBalance, MetagraphInfo, TransferReceipt, WalletError, WalletResult};

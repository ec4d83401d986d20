//! Wallet and ledger-network types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::types::ApiError;

/// Errors that can occur during wallet-session operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// An operation requiring an active session was attempted while
    /// disconnected.
    #[error("wallet not connected")]
    NotConnected,

    /// Key generation or login failed.
    #[error("key error: {0}")]
    Keys(String),

    /// A ledger request received no response.
    #[error("ledger network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A ledger endpoint responded with a non-success status.
    #[error("ledger returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Ledger { status: u16, detail: Option<String> },

    /// A gateway-sourced fetch failed; rethrown without reinterpretation.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Balance of an address as reported by the block explorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddressBalance {
    pub ordinal: u64,
    pub balance: u64,
}

/// Reference to the last accepted transaction of an address.
///
/// Used as the parent reference when building the next transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRef {
    pub ordinal: u64,
    pub hash: String,
}

/// Acknowledgment of an accepted transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub hash: String,
}

/// Aggregated node descriptors, one per metagraph layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetagraphInfo {
    pub global_l0: serde_json::Value,
    pub metagraph_l0: serde_json::Value,
    pub currency_l1: serde_json::Value,
    pub data_l1: serde_json::Value,
}

//! Ephemeral ledger identity.
//!
//! # Security
//! - A fresh key pair is generated for every connect; nothing persists
//!   across sessions
//! - Key material lives only in memory and is never logged or serialized

use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;

use crate::wallet::types::{WalletError, WalletResult};

/// A logged-in ledger identity: a freshly generated key pair and the
/// address derived from it.
#[derive(Debug)]
pub struct LedgerAccount {
    signer: PrivateKeySigner,
    address: String,
}

impl LedgerAccount {
    /// Generate a fresh key pair and log in with it.
    ///
    /// Two successive calls always yield different addresses.
    pub fn generate() -> WalletResult<Self> {
        let signer = PrivateKeySigner::random();
        let address = signer.address().to_string();
        if address.is_empty() {
            return Err(WalletError::Keys("derived an empty address".to_string()));
        }
        Ok(Self { signer, address })
    }

    /// The address derived from this account's key.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sign payload bytes, returning the signature hex-encoded.
    pub async fn sign(&self, payload: &[u8]) -> WalletResult<String> {
        let signature = self
            .signer
            .sign_message(payload)
            .await
            .map_err(|e| WalletError::Keys(format!("signing failed: {}", e)))?;
        Ok(alloy::hex::encode(signature.as_bytes()))
    }
}

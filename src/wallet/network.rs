//! HTTP access to the ledger network layers.
//!
//! # Responsibilities
//! - Query balances from the block explorer
//! - Fetch the last accepted transaction reference from the currency layer
//! - Build, sign, and submit transfers
//! - Provide the startup connectivity probe

use std::time::Duration;

use serde::Serialize;

use crate::config::LedgerConfig;
use crate::wallet::account::LedgerAccount;
use crate::wallet::types::{
    AddressBalance, TransactionRef, TransferReceipt, WalletError, WalletResult,
};

#[derive(Debug, serde::Deserialize)]
struct BalanceEnvelope {
    data: AddressBalance,
}

/// Transfer payload as submitted to the currency layer 1.
#[derive(Debug, Serialize)]
struct TransferRequest<'a> {
    source: &'a str,
    destination: &'a str,
    amount: u64,
    fee: u64,
    salt: u64,
    parent: &'a TransactionRef,
    signature: &'a str,
}

/// Endpoint set and HTTP client for ledger operations.
#[derive(Debug, Clone)]
pub struct LedgerNetwork {
    http: reqwest::Client,
    be_url: String,
    l0_url: String,
    l1_url: String,
}

impl LedgerNetwork {
    /// Create a network handle from ledger configuration.
    pub fn new(config: &LedgerConfig) -> WalletResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(WalletError::Network)?;

        Ok(Self {
            http,
            be_url: config.be_url.trim_end_matches('/').to_string(),
            l0_url: config.l0_url.trim_end_matches('/').to_string(),
            l1_url: config.l1_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the global layer-0 node descriptor.
    ///
    /// Used by the startup probe; callers decide whether failure matters.
    pub async fn probe(&self) -> WalletResult<serde_json::Value> {
        let url = format!("{}/node/info", self.l0_url);
        let response = self.http.get(&url).send().await.map_err(WalletError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(WalletError::Network)
    }

    /// Balance of an address from the block explorer.
    pub async fn address_balance(&self, address: &str) -> WalletResult<AddressBalance> {
        let url = format!("{}/addresses/{}/balance", self.be_url, address);
        let response = self.http.get(&url).send().await.map_err(WalletError::Network)?;
        let response = Self::check(response).await?;
        let envelope: BalanceEnvelope = response.json().await.map_err(WalletError::Network)?;
        Ok(envelope.data)
    }

    /// Last accepted transaction reference for an address.
    pub async fn last_transaction_ref(&self, address: &str) -> WalletResult<TransactionRef> {
        let url = format!("{}/transactions/last-reference/{}", self.l1_url, address);
        let response = self.http.get(&url).send().await.map_err(WalletError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(WalletError::Network)
    }

    /// Build, sign, and submit a transfer from `account`.
    pub async fn transfer(
        &self,
        account: &LedgerAccount,
        destination: &str,
        amount: u64,
        fee: u64,
    ) -> WalletResult<TransferReceipt> {
        // The parent reference must be current at submission time.
        let parent = self.last_transaction_ref(account.address()).await?;
        let salt: u64 = rand::random();

        let unsigned = serde_json::json!({
            "source": account.address(),
            "destination": destination,
            "amount": amount,
            "fee": fee,
            "salt": salt,
            "parent": &parent,
        });
        let signature = account.sign(unsigned.to_string().as_bytes()).await?;

        let request = TransferRequest {
            source: account.address(),
            destination,
            amount,
            fee,
            salt,
            parent: &parent,
            signature: &signature,
        };

        let url = format!("{}/transactions", self.l1_url);
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(WalletError::Network)?;
        let response = Self::check(response).await?;
        let receipt: TransferReceipt = response.json().await.map_err(WalletError::Network)?;

        tracing::info!(
            destination,
            amount,
            fee,
            hash = %receipt.hash,
            "Transfer accepted"
        );
        Ok(receipt)
    }

    async fn check(response: reqwest::Response) -> WalletResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|value| match value.get("detail") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
                None => None,
            });
        Err(WalletError::Ledger {
            status: status.as_u16(),
            detail,
        })
    }
}

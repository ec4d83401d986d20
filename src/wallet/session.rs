//! Wallet session lifecycle.
//!
//! # State Transitions
//! ```text
//! Disconnected → Connected(address): connect() with a fresh key pair
//! Connected → Disconnected: disconnect(), always succeeds
//! ```
//!
//! An address exists iff the session is connected; no identity persists
//! across connect/disconnect cycles.

use crate::config::{ClientConfig, MetagraphConfig};
use crate::gateway::NewsGateway;
use crate::wallet::account::LedgerAccount;
use crate::wallet::network::LedgerNetwork;
use crate::wallet::types::{
    AddressBalance, MetagraphInfo, TransferReceipt, WalletError, WalletResult,
};

/// Connection lifecycle and wallet identity for the ledger network.
#[derive(Debug)]
pub struct WalletSession {
    network: LedgerNetwork,
    info_urls: MetagraphConfig,
    account: Option<LedgerAccount>,
}

impl WalletSession {
    /// Create a disconnected session from client configuration.
    pub fn new(config: &ClientConfig) -> WalletResult<Self> {
        Ok(Self {
            network: LedgerNetwork::new(&config.ledger)?,
            info_urls: config.metagraph.clone(),
            account: None,
        })
    }

    /// Verify connectivity to the ledger network once at startup.
    ///
    /// Failure is logged and never surfaced; subsequent operations are not
    /// blocked.
    pub async fn initialize_network(&self) {
        match self.network.probe().await {
            Ok(info) => {
                let state = info
                    .get("state")
                    .and_then(|s| s.as_str())
                    .unwrap_or("unknown");
                tracing::info!(state, "Connected to ledger network");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ledger network initialization failed");
            }
        }
    }

    /// Whether the session currently holds a logged-in account.
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// The connected address, if any.
    pub fn address(&self) -> Option<&str> {
        self.account.as_ref().map(LedgerAccount::address)
    }

    /// Generate a fresh key pair, log in, and transition to Connected.
    ///
    /// On failure the session stays Disconnected.
    pub fn connect(&mut self) -> WalletResult<String> {
        let account = LedgerAccount::generate()?;
        let address = account.address().to_string();
        self.account = Some(account);
        tracing::info!(address = %address, "Wallet connected");
        Ok(address)
    }

    /// Transition to Disconnected and clear the address. Always succeeds.
    pub fn disconnect(&mut self) {
        if let Some(account) = self.account.take() {
            tracing::info!(address = %account.address(), "Wallet disconnected");
        }
    }

    /// Balance of `address`, defaulting to the session's own address.
    ///
    /// Requires Connected; no network call is made otherwise.
    pub async fn get_balance(&self, address: Option<&str>) -> WalletResult<AddressBalance> {
        let own = self.address().ok_or(WalletError::NotConnected)?;
        let target = address.unwrap_or(own);
        self.network.address_balance(target).await
    }

    /// Transfer funds from the session account.
    ///
    /// Requires Connected; no network call is made otherwise.
    pub async fn transfer(
        &self,
        destination: &str,
        amount: u64,
        fee: u64,
    ) -> WalletResult<TransferReceipt> {
        let account = self.account.as_ref().ok_or(WalletError::NotConnected)?;
        self.network.transfer(account, destination, amount, fee).await
    }

    /// Fetch the node descriptors of all four metagraph layers.
    ///
    /// Fail-fast: if any single layer fetch fails, the whole call fails
    /// and no partial aggregate is returned.
    pub async fn fetch_aggregated_node_info(
        &self,
        gateway: &NewsGateway,
    ) -> WalletResult<MetagraphInfo> {
        let urls = &self.info_urls;
        let (global_l0, metagraph_l0, currency_l1, data_l1) = tokio::try_join!(
            gateway.fetch_node_info(&urls.global_l0_url),
            gateway.fetch_node_info(&urls.metagraph_l0_url),
            gateway.fetch_node_info(&urls.currency_l1_url),
            gateway.fetch_node_info(&urls.data_l1_url),
        )?;

        Ok(MetagraphInfo {
            global_l0,
            metagraph_l0,
            currency_l1,
            data_l1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> WalletSession {
        WalletSession::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_disconnected() {
        let session = test_session();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
    }

    #[test]
    fn test_connect_yields_fresh_address_per_session() {
        let mut session = test_session();

        let first = session.connect().unwrap();
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(first.as_str()));

        session.disconnect();
        assert!(!session.is_connected());
        assert!(session.address().is_none());

        let second = session.connect().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let mut session = test_session();
        session.disconnect();
        assert!(!session.is_connected());

        session.connect().unwrap();
        session.disconnect();
        session.disconnect();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
    }

    #[tokio::test]
    async fn test_balance_requires_connection() {
        let session = test_session();
        let err = session.get_balance(None).await.unwrap_err();
        assert!(matches!(err, WalletError::NotConnected));
    }

    #[tokio::test]
    async fn test_transfer_requires_connection() {
        let session = test_session();
        let err = session.transfer("DAG2target", 100, 0).await.unwrap_err();
        assert!(matches!(err, WalletError::NotConnected));
    }
}

//! Top-level application controller.
//!
//! # Responsibilities
//! - Own all UI-facing state (view, pagination, loaded data, errors)
//! - Compose the gateway and the wallet session into workflows
//! - Decide how each failure surfaces: blocking inline error (news and
//!   node-info loads), silent degradation (minted items), or dismissible
//!   side-channel message (minting)

use std::collections::HashMap;

use crate::config::ClientConfig;
use crate::controller::state::{ControllerError, MintingOperation, PaginationState, View};
use crate::gateway::types::{ApiResult, ArticlePage, NewsArticle, NftRecord};
use crate::gateway::NewsGateway;
use crate::wallet::types::MetagraphInfo;
use crate::wallet::WalletSession;

/// Orchestrates browsing, minting, and view-switch-triggered loads.
///
/// The wallet session is a plain value owned here; nothing in the crate
/// reaches it except through this controller.
#[derive(Debug)]
pub struct AppController {
    gateway: NewsGateway,
    session: WalletSession,
    view: View,
    pagination: PaginationState,
    articles: Vec<NewsArticle>,
    my_items: Vec<NftRecord>,
    my_items_limit: u32,
    is_loading: bool,
    error: Option<String>,
    minting: HashMap<String, MintingOperation>,
    minting_error: Option<String>,
    metagraph_info: Option<MetagraphInfo>,
    /// Generation of the most recently issued articles fetch. Results from
    /// older generations are discarded when they resolve.
    fetch_generation: u64,
}

impl AppController {
    /// Build a controller with a disconnected wallet session.
    pub fn new(config: &ClientConfig) -> Result<Self, ControllerError> {
        let gateway = NewsGateway::new(&config.api)?;
        let session = WalletSession::new(config)?;

        Ok(Self {
            gateway,
            session,
            view: View::default(),
            pagination: PaginationState::new(config.feed.page_size),
            articles: Vec::new(),
            my_items: Vec::new(),
            my_items_limit: config.feed.my_items_limit,
            is_loading: false,
            error: None,
            minting: HashMap::new(),
            minting_error: None,
            metagraph_info: None,
            fetch_generation: 0,
        })
    }

    /// One-time startup: probe the ledger network (best-effort) and load
    /// the first feed page.
    pub async fn start(&mut self) {
        self.session.initialize_network().await;
        self.load_articles().await;
    }

    // --- view state accessors ---

    pub fn view(&self) -> View {
        self.view
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn articles(&self) -> &[NewsArticle] {
        &self.articles
    }

    pub fn my_items(&self) -> &[NftRecord] {
        &self.my_items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Blocking inline error for the current view, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismissible minting failure message, if any.
    pub fn minting_error(&self) -> Option<&str> {
        self.minting_error.as_deref()
    }

    pub fn metagraph_info(&self) -> Option<&MetagraphInfo> {
        self.metagraph_info.as_ref()
    }

    pub fn minting_state(&self, article_id: &str) -> &MintingOperation {
        self.minting.get(article_id).unwrap_or(&MintingOperation::Idle)
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn gateway(&self) -> &NewsGateway {
        &self.gateway
    }

    /// True when the my-items view is selected but no wallet is connected;
    /// the renderer shows a connect prompt instead of content.
    pub fn needs_wallet_prompt(&self) -> bool {
        self.view == View::MyItems && !self.session.is_connected()
    }

    // --- workflows ---

    /// Switch views; my-items and info trigger their loads on entry.
    pub async fn set_view(&mut self, view: View) {
        self.view = view;
        match view {
            View::Home => {}
            View::MyItems => {
                if self.session.is_connected() {
                    self.load_my_items().await;
                }
            }
            View::Info => self.load_metagraph_info().await,
        }
    }

    /// Move to a feed page (clamped) and reload articles.
    pub async fn set_page(&mut self, page: u32) {
        self.pagination.set_page(page);
        self.load_articles().await;
    }

    /// Load the current feed page.
    ///
    /// A result is applied only if no newer fetch was issued while it was
    /// in flight; superseded results are discarded.
    pub async fn load_articles(&mut self) {
        let generation = self.begin_articles_fetch();
        let skip = self.pagination.skip();
        let limit = self.pagination.page_size();
        let result = self.gateway.fetch_articles(skip, limit).await;
        self.finish_articles_fetch(generation, result);
    }

    fn begin_articles_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.is_loading = true;
        self.error = None;
        self.fetch_generation
    }

    fn finish_articles_fetch(&mut self, generation: u64, result: ApiResult<ArticlePage>) {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                "Discarding superseded articles fetch"
            );
            return;
        }

        self.is_loading = false;
        match result {
            Ok(page) => {
                self.articles = page.items;
                self.pagination.set_total(page.total);
            }
            Err(e) => {
                tracing::error!(error = %e, "Articles load failed");
                self.error = Some("Failed to load news articles".to_string());
            }
        }
    }

    /// Load the minted items of the connected address.
    ///
    /// Failures were already degraded to an empty list by the gateway.
    pub async fn load_my_items(&mut self) {
        let Some(address) = self.session.address().map(str::to_owned) else {
            return;
        };
        self.my_items = self
            .gateway
            .fetch_user_minted_articles(&address, 0, self.my_items_limit)
            .await;
    }

    /// Load the aggregated node info for the info view.
    pub async fn load_metagraph_info(&mut self) {
        self.is_loading = true;
        self.error = None;
        match self.session.fetch_aggregated_node_info(&self.gateway).await {
            Ok(info) => self.metagraph_info = Some(info),
            Err(e) => {
                tracing::error!(error = %e, "Metagraph info load failed");
                self.error = Some("Failed to load metagraph information".to_string());
            }
        }
        self.is_loading = false;
    }

    /// Connect the wallet and load its minted items.
    pub async fn connect_wallet(&mut self) -> Result<String, ControllerError> {
        let address = self.session.connect()?;
        self.load_my_items().await;
        Ok(address)
    }

    /// Disconnect the wallet, drop its minted items, and return home.
    pub fn disconnect_wallet(&mut self) {
        self.session.disconnect();
        self.my_items.clear();
        self.view = View::Home;
    }

    /// Clear the dismissible minting message.
    pub fn dismiss_minting_error(&mut self) {
        self.minting_error = None;
    }

    /// Mint an article for the connected address.
    ///
    /// Preconditions checked before any gateway call: the wallet is
    /// connected, the article is not already minted, and no mint for the
    /// same article is in flight. Mints for different articles are
    /// independent. On success the feed and the minted items are reloaded.
    pub async fn mint_article(&mut self, article_id: &str) {
        let Some(address) = self.session.address().map(str::to_owned) else {
            tracing::warn!(article_id, "Mint attempted without a connected wallet");
            self.minting_error = Some("Connect your wallet before minting".to_string());
            return;
        };

        if self
            .articles
            .iter()
            .any(|a| a.id == article_id && a.is_minted())
        {
            self.minting_error = Some("Article has already been minted".to_string());
            return;
        }

        if self
            .minting
            .get(article_id)
            .is_some_and(MintingOperation::is_in_flight)
        {
            tracing::debug!(article_id, "Mint already in flight for this article");
            return;
        }

        self.minting
            .insert(article_id.to_string(), MintingOperation::InFlight);
        self.minting_error = None;

        match self.gateway.mint_article(article_id, &address).await {
            Ok(receipt) => {
                tracing::info!(article_id, token_id = %receipt.nft_token_id, "Article minted");
                self.minting.insert(
                    article_id.to_string(),
                    MintingOperation::Succeeded(receipt.nft_token_id),
                );
                // Reflect the server-side minted_by update and the new NFT.
                self.load_articles().await;
                self.load_my_items().await;
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(article_id, error = %reason, "Mint failed");
                self.minting
                    .insert(article_id.to_string(), MintingOperation::Failed(reason.clone()));
                self.minting_error = Some(reason);
            }
        }
    }
}

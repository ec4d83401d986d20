//! Controller-owned view state.

use thiserror::Error;

use crate::gateway::types::ApiError;
use crate::wallet::types::WalletError;

/// Top-level views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The paginated news feed.
    #[default]
    Home,
    /// Minted items of the connected address.
    MyItems,
    /// Metagraph node information.
    Info,
}

/// Pagination over the news feed.
///
/// Invariants: `total_pages == ceil(total / page_size)` and the current
/// page stays inside `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone, Copy)]
pub struct PaginationState {
    page: u32,
    page_size: u32,
    total: u64,
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages needed for `total` items; zero when the feed is
    /// empty.
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size);
        ((self.total + size - 1) / size) as u32
    }

    /// Clamp a requested page into `[1, max(total_pages, 1)]`.
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.max(1).min(self.total_pages().max(1))
    }

    /// Move to `requested`, clamped.
    pub fn set_page(&mut self, requested: u32) {
        self.page = self.clamp(requested);
    }

    /// Record a new total and re-clamp the current page against it.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.page = self.clamp(self.page);
    }

    /// Items to skip to reach the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

/// State of a mint attempt, keyed per article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MintingOperation {
    #[default]
    Idle,
    InFlight,
    /// Token id returned by the backend.
    Succeeded(String),
    /// User-facing failure reason.
    Failed(String),
}

impl MintingOperation {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, MintingOperation::InFlight)
    }
}

/// Errors surfaced by controller construction and wallet actions.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

//! Wire types and error definitions for the news backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A news article as stored by the backend.
///
/// Field names follow the backend's JSON contract; the client never
/// mutates an article. `minted_by` is set server-side, exactly once, when
/// a mint succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub authors: String,
    pub published_date: DateTime<Utc>,
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub top_image: Option<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Ledger address of the submitter.
    pub dag_address: String,
    #[serde(default)]
    pub minted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub minted_by: Option<String>,
    #[serde(default)]
    pub nft_token_id: Option<String>,
}

impl NewsArticle {
    /// The summary when present, otherwise the content truncated to 150
    /// characters with an ellipsis.
    pub fn display_summary(&self) -> String {
        match &self.summary {
            Some(summary) => summary.clone(),
            None => {
                if self.content.chars().count() <= 150 {
                    self.content.clone()
                } else {
                    let truncated: String = self.content.chars().take(150).collect();
                    format!("{}...", truncated)
                }
            }
        }
    }

    /// Whether a mint attempt is still meaningful for this article.
    pub fn is_minted(&self) -> bool {
        self.minted_by.is_some()
    }
}

/// A minted article as listed for an owning address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub top_image: Option<String>,
    pub published_date: DateTime<Utc>,
    pub url: String,
    pub dag_address: String,
    #[serde(default)]
    pub minted_by: Option<String>,
    #[serde(default)]
    pub nft_token_id: Option<String>,
}

/// One page of the news listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePage {
    pub items: Vec<NewsArticle>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

/// Acknowledgment of a submitted article URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: String,
    pub message: String,
}

/// Result of a successful mint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintReceipt {
    pub nft_token_id: String,
}

/// Errors that can occur talking to the news backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached the caller.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend responded with a non-success status.
    #[error("server returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    /// The backend responded successfully but the body did not match the
    /// expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// A mint attempt failed; the message is user-facing.
    #[error("Minting failed: {0}")]
    Minting(String),
}

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

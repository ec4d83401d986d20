//! HTTP gateway to the news backend and node-info endpoints.
//!
//! # Responsibilities
//! - Wrap the backend's REST surface in typed async operations
//! - Normalize transport and server failures into `ApiError`
//! - Apply the minting protocol-shape check on top of the transport check

use std::time::Duration;

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::gateway::types::{
    ApiError, ApiResult, ArticlePage, MintReceipt, NewsArticle, NftRecord, SubmitReceipt,
};

#[derive(Debug, Deserialize)]
struct MintResponse {
    #[serde(default)]
    nft_token_id: Option<String>,
}

/// Stateless gateway over the news backend.
///
/// Cheap to clone; the underlying HTTP client pools connections.
#[derive(Debug, Clone)]
pub struct NewsGateway {
    http: reqwest::Client,
    base_url: String,
}

impl NewsGateway {
    /// Create a gateway from API configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the news listing.
    pub async fn fetch_articles(&self, skip: u64, limit: u32) -> ApiResult<ArticlePage> {
        let url = format!("{}/news/?skip={}&limit={}", self.base_url, skip, limit);
        let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Fetch a single article by id.
    pub async fn fetch_article(&self, article_id: &str) -> ApiResult<NewsArticle> {
        let url = format!("{}/news/{}", self.base_url, article_id);
        let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Submit an article URL for ingestion.
    ///
    /// No client-side validation; the backend decides whether the URL is
    /// crawlable.
    pub async fn submit_article(&self, url: &str, dag_address: &str) -> ApiResult<SubmitReceipt> {
        let endpoint = format!("{}/news/submit", self.base_url);
        let response = self
            .http
            .post(&endpoint)
            .json(&serde_json::json!({ "url": url, "dag_address": dag_address }))
            .send()
            .await
            .map_err(ApiError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Mint an article as an NFT for the given address.
    ///
    /// Success requires a non-empty token id in the response body; a 2xx
    /// answer without one is still a failure.
    pub async fn mint_article(&self, article_id: &str, dag_address: &str) -> ApiResult<MintReceipt> {
        let url = format!("{}/news/{}/mint", self.base_url, article_id);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "dag_address": dag_address }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(article_id, error = %e, "Mint request received no response");
                ApiError::Minting("No response received from server".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = Self::read_detail(response).await;
            tracing::error!(article_id, status = status.as_u16(), "Mint request rejected");
            return Err(match detail {
                Some(detail) => ApiError::Minting(detail),
                None => ApiError::Minting(format!("server returned status {}", status.as_u16())),
            });
        }

        let body: MintResponse = response
            .json()
            .await
            .map_err(|_| ApiError::Minting("Invalid response from server".to_string()))?;
        match body.nft_token_id {
            Some(token) if !token.is_empty() => Ok(MintReceipt { nft_token_id: token }),
            _ => Err(ApiError::Minting("Invalid response from server".to_string())),
        }
    }

    /// Fetch the minted items owned by an address.
    ///
    /// Degrades to an empty list on any failure; callers cannot distinguish
    /// "no NFTs" from "fetch failed".
    pub async fn fetch_user_minted_articles(
        &self,
        dag_address: &str,
        skip: u64,
        limit: u32,
    ) -> Vec<NftRecord> {
        let url = format!(
            "{}/news/constellation/{}?skip={}&limit={}",
            self.base_url, dag_address, skip, limit
        );
        let result: ApiResult<Vec<NftRecord>> = async {
            let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
            let response = Self::check(response).await?;
            response.json().await.map_err(ApiError::Decode)
        }
        .await;

        match result {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(dag_address, error = %e, "Minted-items fetch failed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Fetch the full unpaged article listing.
    pub async fn fetch_all_articles(&self, skip: u64, limit: u32) -> ApiResult<Vec<NewsArticle>> {
        let url = format!("{}/news/all?skip={}&limit={}", self.base_url, skip, limit);
        let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Fetch the node descriptor from a layer's base URL.
    ///
    /// The caller decides how to handle failure.
    pub async fn fetch_node_info(&self, base_url: &str) -> ApiResult<serde_json::Value> {
        let url = format!("{}/node/info", base_url.trim_end_matches('/'));
        let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
        let response = Self::check(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Map a non-success response into `ApiError::Server`, extracting the
    /// backend's `detail` field when the body carries one.
    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = Self::read_detail(response).await;
        Err(ApiError::Server {
            status: status.as_u16(),
            detail,
        })
    }

    async fn read_detail(response: reqwest::Response) -> Option<String> {
        let value: serde_json::Value = response.json().await.ok()?;
        match value.get("detail")? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that endpoint URLs actually parse
//! - Validate value ranges (timeouts > 0, page size > 0)

use crate::config::schema::ClientConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, returning all errors rather than the first.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let urls = [
        ("api.base_url", &config.api.base_url),
        ("ledger.be_url", &config.ledger.be_url),
        ("ledger.l0_url", &config.ledger.l0_url),
        ("ledger.l1_url", &config.ledger.l1_url),
        ("metagraph.global_l0_url", &config.metagraph.global_l0_url),
        ("metagraph.metagraph_l0_url", &config.metagraph.metagraph_l0_url),
        ("metagraph.currency_l1_url", &config.metagraph.currency_l1_url),
        ("metagraph.data_l1_url", &config.metagraph.data_l1_url),
    ];
    for (field, value) in urls {
        if let Err(e) = url::Url::parse(value) {
            errors.push(ValidationError {
                field: field.to_string(),
                message: format!("invalid URL '{}': {}", value, e),
            });
        }
    }

    if config.feed.page_size == 0 {
        errors.push(ValidationError {
            field: "feed.page_size".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if config.api.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "api.request_timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if config.ledger.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "ledger.request_timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

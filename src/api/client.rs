//! HTTP client for submitting orders
//!
//! Posts the form values as JSON to `{base_url}/api/order` and maps the
//! response onto either a receipt or an [`ApiError`].

use super::{ApiError, OrderApi};
use crate::state::{FormValues, OrderReceipt};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:9009";

/// Path of the order endpoint
pub const ORDER_PATH: &str = "/api/order";

/// Body of a failed response. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the remote order API
pub struct OrderClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrderClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL of the order endpoint
    pub fn order_url(&self) -> String {
        format!("{}{ORDER_PATH}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl OrderApi for OrderClient {
    async fn place_order(&self, order: &FormValues) -> Result<OrderReceipt, ApiError> {
        let url = self.order_url();
        debug!(%url, "posting order");

        let response = self.http.post(&url).json(order).send().await?;
        let status = response.status();
        // A body that cannot be read or parsed is treated as empty
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(serde_json::from_str(&body).unwrap_or_default())
        } else {
            let error: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            Err(ApiError::Rejected {
                status: status.as_u16(),
                message: error.message,
            })
        }
    }
}

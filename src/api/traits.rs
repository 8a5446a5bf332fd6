//! Trait abstraction for the order API to enable mocking in tests

use super::ApiError;
use crate::state::{FormValues, OrderReceipt};
use async_trait::async_trait;

/// Trait for order API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Submit an order. One request per call, no retry.
    async fn place_order(&self, order: &FormValues) -> Result<OrderReceipt, ApiError>;
}

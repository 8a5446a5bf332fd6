//! HTTP client module for the remote order API

mod client;
mod error;
mod traits;

pub use client::{OrderClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::OrderApi;

#[cfg(test)]
pub use traits::MockOrderApi;

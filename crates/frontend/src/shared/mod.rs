pub mod api_client;
pub mod api_error;
pub mod api_utils;
pub mod config;
pub mod fetched;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use api_client::{ApiClient, ApiRequest, Origin};
pub use api_error::ApiError;
pub use fetched::Fetched;

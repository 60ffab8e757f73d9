pub mod client;
pub mod endpoints;

pub use client::{ApiClient, ConnectResponse};
pub use endpoints::ApiEndpoint;

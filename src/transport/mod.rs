mod client;
mod error;

pub use client::ApiClient;
pub use error::FetchError;

//! HTTP clients for the external directories
//!
//! Each provider owns its base URL and optional API key and shares one
//! pooled `reqwest::Client`. Provider methods return rich
//! [`DirectoryError`] values; collapsing those to the caller-facing
//! "no result" sentinel is the service layer's job, not ours.
//!
//! No request timeout is configured: a hung upstream hangs the caller,
//! matching the documented contract.

pub mod nutrition;
pub mod recipes;
pub mod restaurants;

pub use nutrition::NutritionDirectory;
pub use recipes::RecipeDirectory;
pub use restaurants::{Lookup, RestaurantDirectory};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fixed User-Agent sent on every directory request (part of the wire
/// contract)
pub const DIRECTORY_USER_AGENT: &str = "Mozilla/5.0";

/// Errors a directory call can fail with
///
/// These stay inside the provider layer; the service facade maps every
/// variant to the same empty sentinel.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("no API key configured for {0}")]
    MissingApiKey(&'static str),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected upstream status: {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Build the shared HTTP client used by all three providers
///
/// Sets the fixed User-Agent as a default header so every request
/// carries it.
pub fn build_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DIRECTORY_USER_AGENT));

    Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Issue a GET for `url`, optionally adding one header, and decode the
/// JSON body into `T`
///
/// Decoding goes through `serde_json` on the raw bytes so that shape
/// problems surface as [`DirectoryError::Decode`] rather than being
/// folded into the transport error.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    header: Option<(&'static str, &str)>,
) -> Result<T, DirectoryError> {
    let mut request = client.get(url);
    if let Some((name, value)) = header {
        request = request.header(name, value);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DirectoryError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

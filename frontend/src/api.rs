//! Backend transport: base URL resolution and credential-carrying JSON
//! helpers.
//!
//! Every request includes ambient credentials so the session cookie
//! round-trips; the cookie itself is never read here. Non-2xx responses are
//! converted into [`ApiError::Server`] with the backend's `message` field
//! when present, network-level faults into [`ApiError::Network`]. Nothing in
//! this module panics on a failed call.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use common::responses::ErrorBody;

const LOCAL_BACKEND: &str = "http://localhost:5000";
const PRODUCTION_BACKEND: &str = "https://test-gen-backend.onrender.com";

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status; carries the
    /// human-readable message.
    #[error("{0}")]
    Server(String),
    /// The request never produced a usable response (DNS, refused
    /// connection, malformed body).
    #[error("request failed: {0}")]
    Network(String),
}

/// Maps the page's hostname to the backend to talk to. Local and
/// private-network hosts get the local backend, everything else the fixed
/// production host.
pub fn api_base_for_host(host: &str) -> &'static str {
    if host == "localhost"
        || host == "127.0.0.1"
        || host.starts_with("192.168.")
        || host.starts_with("10.")
        || host.starts_with("172.")
    {
        LOCAL_BACKEND
    } else {
        PRODUCTION_BACKEND
    }
}

fn base_url() -> &'static str {
    let host = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    api_base_for_host(&host)
}

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

/// Percent-encodes a query parameter value (sheet names may contain spaces).
pub fn query_escape(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => ApiError::Server(body.message),
        _ => ApiError::Server(format!("HTTP error! status: {status}")),
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    } else {
        Err(error_from(response).await)
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    parse(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    parse(response).await
}

/// POST without a body, for endpoints whose response body is irrelevant
/// (logout).
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    let response = Request::post(&url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::delete(&url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    parse(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_resolve_to_local_backend() {
        for host in ["localhost", "127.0.0.1", "192.168.1.10", "10.0.0.3", "172.16.4.1"] {
            assert_eq!(api_base_for_host(host), LOCAL_BACKEND);
        }
    }

    #[test]
    fn public_hosts_resolve_to_production_backend() {
        assert_eq!(api_base_for_host("testgen.example.com"), PRODUCTION_BACKEND);
    }

    #[test]
    fn query_escape_encodes_spaces_and_separators() {
        assert_eq!(query_escape("Auth - Test Cases"), "Auth%20-%20Test%20Cases");
        assert_eq!(query_escape("a&b=c"), "a%26b%3Dc");
    }
}

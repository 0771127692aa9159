//! HTTP helper functions for Crux Core
//!
//! Every non-success answer of the authentication API goes through
//! [`failure_message`], whichever way crux_http reports it.

use crux_http::{HttpError, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error_message::extract;
use crate::types::AuthFailure;

/// Base URL for the authentication API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// Shells replace this prefix with the real API origin (or strip it to issue
/// relative `fetch()` calls from the page).
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use registro_core::http_helpers::build_url;
/// let url = build_url("/api/v1/auth/login");
/// assert_eq!(url, "https://relative/api/v1/auth/login");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Message for a non-success answer.
///
/// A JSON body goes through the error extractor, any other non-empty body is
/// shown as text, everything else yields `fallback`.
pub fn failure_message(body: Option<&[u8]>, fallback: &str) -> String {
    let Some(body) = body else {
        return fallback.to_string();
    };

    match serde_json::from_slice::<Value>(body) {
        Ok(json) => extract(Some(&json), fallback),
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            if text.is_empty() {
                fallback.to_string()
            } else {
                text.into_owned()
            }
        }
    }
}

/// Parse JSON from a response, turning error statuses into [`AuthFailure::Request`].
pub fn parse_json_response<T: DeserializeOwned>(
    action: &str,
    fallback: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, AuthFailure> {
    let body = response.take_body();

    if !is_response_success(response) {
        let message = failure_message(body.as_deref(), fallback);
        log::warn!("{action} failed: HTTP {}: {message}", response.status());
        return Err(AuthFailure::Request(message));
    }

    match body {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| AuthFailure::Network(format!("{action}: JSON parse error: {e}"))),
        None => Err(AuthFailure::Network(format!("{action}: Empty response body"))),
    }
}

/// Map a crux_http error to an [`AuthFailure`].
///
/// Error statuses reported as `HttpError::Http` carry the body and are
/// treated exactly like an error response.
pub fn map_http_error(action: &str, fallback: &str, error: HttpError) -> AuthFailure {
    match error {
        HttpError::Http { body, .. } => {
            let message = failure_message(body.as_deref(), fallback);
            log::warn!("{action} failed: {message}");
            AuthFailure::Request(message)
        }
        other => {
            log::warn!("{action} failed: {other}");
            AuthFailure::Network(format!("{action} failed: {other}"))
        }
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: DeserializeOwned>(
    action: &str,
    fallback: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, AuthFailure> {
    match result {
        Ok(mut response) => parse_json_response(action, fallback, &mut response),
        Err(e) => Err(map_http_error(action, fallback, e)),
    }
}

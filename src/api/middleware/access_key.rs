//! Trigger-level access key middleware.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use sha2::{Digest, Sha256};

use crate::{error::AppError, state::AppState};

/// Header carrying the key, as sent by Functions-style clients.
pub const ACCESS_KEY_HEADER: &str = "x-functions-key";
/// Query parameter carrying the key.
pub const ACCESS_KEY_QUERY: &str = "code";

/// Compares SHA-256 digests of both keys in constant time.
fn key_matches(candidate: &str, expected: &str) -> bool {
    let a = Sha256::digest(candidate.as_bytes());
    let b = Sha256::digest(expected.as_bytes());

    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn query_key(uri: &Uri) -> Option<String> {
    Query::<HashMap<String, String>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(mut params)| params.remove(ACCESS_KEY_QUERY))
}

/// Rejects requests that do not present the configured access key.
///
/// The key is accepted from, in order:
///
/// 1. `x-functions-key` header
/// 2. `code` query parameter
/// 3. `Authorization: Bearer <key>` header
///
/// When no key is configured every request passes through.
///
/// # Errors
///
/// Returns `401 Unauthorized` with an empty body if the key is missing or wrong.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = st.access_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let (mut parts, body) = req.into_parts();

    let from_header = parts
        .headers
        .get(ACCESS_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let presented = from_header.or_else(|| query_key(&parts.uri));

    let presented = match presented {
        Some(key) => Some(key),
        None => AuthBearer::from_request_parts(&mut parts, &())
            .await
            .ok()
            .map(|AuthBearer(token)| token),
    };

    match presented {
        Some(key) if key_matches(&key, expected) => {
            let req = Request::from_parts(parts, body);
            Ok(next.run(req).await)
        }
        Some(_) => Err(AppError::unauthorized("Access key mismatch")),
        None => Err(AppError::unauthorized("Access key missing")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches() {
        assert!(key_matches("s3cret", "s3cret"));
        assert!(!key_matches("s3cret", "S3CRET"));
        assert!(!key_matches("", "s3cret"));
        assert!(!key_matches("s3cret-and-more", "s3cret"));
    }
}

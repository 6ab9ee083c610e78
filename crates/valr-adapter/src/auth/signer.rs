/*
[INPUT]:  Outgoing reqwest::Request and API credentials
[OUTPUT]: X-VALR-API-KEY / X-VALR-SIGNATURE / X-VALR-TIMESTAMP headers
[POS]:    Auth layer - per-request HMAC-SHA512 signing hook
[UPDATE]: When changing signing algorithm, header names or path classification
*/

use crate::auth::Credentials;
use crate::http::{Result, ValrError};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::HeaderValue;
use reqwest::Request;
use sha2::Sha512;
use std::sync::Arc;

type HmacSha512 = Hmac<Sha512>;

pub const API_KEY_HEADER: &str = "x-valr-api-key";
pub const SIGNATURE_HEADER: &str = "x-valr-signature";
pub const TIMESTAMP_HEADER: &str = "x-valr-timestamp";

/// Any path containing this token is treated as public and left unsigned.
pub const PUBLIC_PATH_MARKER: &str = "public";

/// Returns true when a request to `path` must not be signed.
///
/// Plain substring match: a private path that happens to contain the marker
/// anywhere is also left unsigned.
pub fn is_public_path(path: &str) -> bool {
    path.contains(PUBLIC_PATH_MARKER)
}

/// Compute the hex-encoded HMAC-SHA512 signature VALR expects.
///
/// Message: `timestamp + UPPER(method) + path + body`, no delimiters.
pub fn generate_signature(
    secret: &str,
    timestamp: &str,
    method: &str,
    path: &str,
    body: &[u8],
) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.as_bytes());
    mac.update(method.to_uppercase().as_bytes());
    mac.update(path.as_bytes());
    mac.update(body);

    hex::encode(mac.finalize().into_bytes())
}

/// Signs requests bound for private endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Arc<Credentials>,
}

impl RequestSigner {
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Attach authentication headers to `request` unless its path is public.
    ///
    /// Must run immediately before the request is sent; the timestamp is taken
    /// here. Returns whether the request was signed.
    pub fn sign(&self, request: &mut Request) -> Result<bool> {
        let timestamp = Utc::now().timestamp_millis().to_string();
        self.sign_with_timestamp(request, &timestamp)
    }

    pub(crate) fn sign_with_timestamp(&self, request: &mut Request, timestamp: &str) -> Result<bool> {
        if is_public_path(request.url().path()) {
            return Ok(false);
        }

        // Only in-memory bodies can be read without consuming them.
        let body: &[u8] = match request.body() {
            None => &[],
            Some(body) => body.as_bytes().ok_or_else(|| {
                ValrError::BodyRead("request body is a stream and cannot be re-read".to_string())
            })?,
        };

        let signature = generate_signature(
            self.credentials.api_secret(),
            timestamp,
            request.method().as_str(),
            request.url().path(),
            body,
        );

        let headers = request.headers_mut();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(self.credentials.api_key())?);
        headers.insert(SIGNATURE_HEADER, HeaderValue::from_str(&signature)?);
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_str(timestamp)?);

        Ok(true)
    }
}

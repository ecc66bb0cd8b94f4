//! Local session-token inspection.
//!
//! Tokens are opaque compact strings with period-separated segments; the
//! second segment is base64url JSON carrying an `exp` claim in Unix seconds.
//! Decoding is strictly best-effort: the guard collapses every failure mode
//! here to "invalid", so this module never needs to distinguish a malformed
//! token from an expired one for callers that only ask [`is_valid_at`].

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;
use thiserror::Error;

/// Why a token payload could not be read.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Fewer than two period-separated segments.
    #[error("token has no payload segment")]
    MissingPayload,
    /// Payload segment is not valid base64url.
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Payload bytes are not the expected JSON shape.
    #[error("payload is not claims JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Claims JSON carries no `exp` field.
    #[error("claims have no exp")]
    MissingExp,
}

#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Decode the `exp` claim (Unix seconds) from a compact token.
///
/// # Errors
///
/// Returns a [`TokenError`] describing the first decode step that failed.
pub fn decode_exp(token: &str) -> Result<i64, TokenError> {
    let mut segments = token.split('.');
    let _header = segments.next();
    let payload = segments.next().ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes)?;
    claims.exp.ok_or(TokenError::MissingExp)
}

/// Whether `token` is well-formed and unexpired at `now_ms` (wall-clock
/// milliseconds). Expiry must be strictly in the future; every decode
/// failure reads as expired.
pub fn is_valid_at(token: &str, now_ms: f64) -> bool {
    match decode_exp(token) {
        #[allow(clippy::cast_precision_loss)]
        Ok(exp) => (exp as f64) * 1000.0 > now_ms,
        Err(_) => false,
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| {
                #[allow(clippy::cast_precision_loss)]
                let ms = d.as_millis() as f64;
                ms
            })
    }
}

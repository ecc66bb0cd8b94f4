//! Browser storage access for the session token and consent flag.
//!
//! TRADE-OFFS
//! ==========
//! All reads and writes are best-effort browser-only behavior; native builds
//! (tests) safely no-op so callers never branch on environment themselves.
//! The token lives in exactly one of the two stores at a time: "remember me"
//! picks `localStorage`, otherwise `sessionStorage`, and a write to one
//! clears the other so the persistent-first read order never sees a stale
//! duplicate.

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "capmatch_token";

/// Storage key holding the analytics consent flag (`granted` / `denied`).
pub const CONSENT_KEY: &str = "capmatch_consent";

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read the session token, preferring the persistent store.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        if let Some(token) = local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten()) {
            return Some(token);
        }
        session_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Store the session token after login. `remember` selects the persistent
/// store; the other store is cleared either way.
pub fn store_token(token: &str, remember: bool) {
    #[cfg(feature = "csr")]
    {
        let (target, other) = if remember {
            (local_storage(), session_storage())
        } else {
            (session_storage(), local_storage())
        };
        if let Some(storage) = target {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        if let Some(storage) = other {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, remember);
    }
}

/// Remove the session token from both stores (logout).
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Read the stored analytics consent value, if any.
pub fn read_consent() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage().and_then(|s| s.get_item(CONSENT_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the analytics consent decision.
pub fn store_consent(value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(CONSENT_KEY, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

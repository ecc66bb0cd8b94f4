//! Backend endpoint configuration.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment, so the backend base URL is baked
//! in at compile time via `CAPMATCH_BACKEND_URL` with a local-dev default.
//! All request paths go through [`endpoint`] so the joining rule lives in one
//! place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the backend API, fixed at compile time.
pub const BACKEND_URL: &str = match option_env!("CAPMATCH_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Join an absolute API path onto a base URL, tolerating a trailing slash on
/// the base and a missing leading slash on the path.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Full URL for an API path (e.g. `endpoint("/auth/heartbeat")`).
pub fn endpoint(path: &str) -> String {
    join_url(BACKEND_URL, path)
}

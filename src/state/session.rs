//! Session guard phases and the pure decisions behind them.
//!
//! DESIGN
//! ======
//! The guard's outcome is an explicit tri-state, not a boolean with an
//! "undetermined" sentinel: rendering code matches on [`SessionPhase`] and
//! the "render nothing while undetermined" rule falls out structurally. The
//! decision functions here are free of browser types so the whole transition
//! table runs under native tests; `RequireSession` is just the wiring.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::token;

/// Where the guard stands for the current mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Evidence still being gathered. Renders nothing.
    #[default]
    Checking,
    /// Viewer holds a valid session. The only phase that renders children.
    Authed,
    /// No valid session. Renders nothing; triggers the login redirect.
    Guest,
}

/// Local fast path: `Some(Authed)` when a stored token is well-formed and
/// unexpired at `now_ms`, `None` when the heartbeat fallback is needed.
///
/// A locally valid token is trusted without server re-verification, so a
/// revoked-but-unexpired token passes until it expires.
pub fn phase_from_local(stored: Option<&str>, now_ms: f64) -> Option<SessionPhase> {
    match stored {
        Some(raw) if token::is_valid_at(raw, now_ms) => Some(SessionPhase::Authed),
        _ => None,
    }
}

/// Heartbeat fallback: any 2xx means the backend recognized the session
/// cookie; everything else (including network failure) fails closed.
pub fn phase_from_heartbeat(backend_ok: bool) -> SessionPhase {
    if backend_ok { SessionPhase::Authed } else { SessionPhase::Guest }
}

/// Whether the current phase demands the login redirect.
pub fn should_redirect(phase: SessionPhase) -> bool {
    phase == SessionPhase::Guest
}

use super::*;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

fn token_expiring_at(exp: i64) -> String {
    let claims = serde_json::json!({ "sub": "u1", "exp": exp });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("hdr.{payload}.sig")
}

// =============================================================
// Local fast path
// =============================================================

#[test]
fn unexpired_local_token_short_circuits_to_authed() {
    let token = token_expiring_at(2_000);
    assert_eq!(phase_from_local(Some(&token), 1_000_000.0), Some(SessionPhase::Authed));
}

#[test]
fn expired_local_token_falls_through_to_heartbeat() {
    let token = token_expiring_at(1_000);
    assert_eq!(phase_from_local(Some(&token), 2_000_000.0), None);
}

#[test]
fn missing_local_token_falls_through_to_heartbeat() {
    assert_eq!(phase_from_local(None, 0.0), None);
}

#[test]
fn malformed_local_token_falls_through_to_heartbeat() {
    assert_eq!(phase_from_local(Some("not-a-token"), 0.0), None);
    assert_eq!(phase_from_local(Some("a.%%%.c"), 0.0), None);
}

// =============================================================
// Heartbeat fallback
// =============================================================

#[test]
fn heartbeat_success_is_authed() {
    assert_eq!(phase_from_heartbeat(true), SessionPhase::Authed);
}

#[test]
fn heartbeat_failure_is_guest() {
    assert_eq!(phase_from_heartbeat(false), SessionPhase::Guest);
}

// =============================================================
// Redirect rule
// =============================================================

#[test]
fn only_guest_redirects() {
    assert!(should_redirect(SessionPhase::Guest));
    assert!(!should_redirect(SessionPhase::Checking));
    assert!(!should_redirect(SessionPhase::Authed));
}

#[test]
fn phase_starts_checking() {
    assert_eq!(SessionPhase::default(), SessionPhase::Checking);
}

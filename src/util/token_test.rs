use super::*;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Build a structurally valid token whose payload is `claims` JSON.
fn token_with_claims(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("hdr.{payload}.sig")
}

#[test]
fn decode_exp_reads_claim_from_payload_segment() {
    let token = token_with_claims(&serde_json::json!({ "sub": "u1", "exp": 1_900_000_000 }));
    assert_eq!(decode_exp(&token).unwrap(), 1_900_000_000);
}

#[test]
fn decode_exp_rejects_single_segment() {
    assert!(matches!(decode_exp("justonesegment"), Err(TokenError::MissingPayload)));
}

#[test]
fn decode_exp_rejects_invalid_base64url() {
    assert!(matches!(decode_exp("hdr.!!!not-base64!!!.sig"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_exp_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
    let token = format!("hdr.{payload}.sig");
    assert!(matches!(decode_exp(&token), Err(TokenError::Json(_))));
}

#[test]
fn decode_exp_rejects_missing_exp_claim() {
    let token = token_with_claims(&serde_json::json!({ "sub": "u1" }));
    assert!(matches!(decode_exp(&token), Err(TokenError::MissingExp)));
}

#[test]
fn is_valid_at_accepts_future_expiry() {
    let token = token_with_claims(&serde_json::json!({ "exp": 2_000 }));
    assert!(is_valid_at(&token, 1_999_999.0));
}

#[test]
fn is_valid_at_rejects_expiry_exactly_now() {
    // Strictly-in-the-future rule: exp * 1000 == now is already expired.
    let token = token_with_claims(&serde_json::json!({ "exp": 2_000 }));
    assert!(!is_valid_at(&token, 2_000_000.0));
}

#[test]
fn is_valid_at_rejects_past_expiry() {
    let token = token_with_claims(&serde_json::json!({ "exp": 1_000 }));
    assert!(!is_valid_at(&token, 2_000_000.0));
}

#[test]
fn is_valid_at_fails_closed_on_malformed_tokens() {
    assert!(!is_valid_at("", 0.0));
    assert!(!is_valid_at("a.b.c", 0.0));
    assert!(!is_valid_at("no-dots", 0.0));
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}

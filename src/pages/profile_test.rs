use super::*;

#[test]
fn validate_profile_input_trims_name() {
    assert_eq!(validate_profile_input("  Ada Lovelace  "), Ok("Ada Lovelace".to_owned()));
}

#[test]
fn validate_profile_input_rejects_blank_name() {
    assert_eq!(validate_profile_input("   "), Err("Your name cannot be empty."));
}

#[test]
fn build_profile_payload_nulls_empty_optionals() {
    let payload = build_profile_payload("Ada", "  ", "");
    assert_eq!(payload["full_name"], "Ada");
    assert!(payload["headline"].is_null());
    assert!(payload["avatar_url"].is_null());
}

#[test]
fn build_profile_payload_trims_optionals() {
    let payload = build_profile_payload("Ada", " Building compilers ", " https://a.io/x.png ");
    assert_eq!(payload["headline"], "Building compilers");
    assert_eq!(payload["avatar_url"], "https://a.io/x.png");
}

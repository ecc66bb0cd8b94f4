use super::*;

#[test]
fn validate_register_input_accepts_well_formed_fields() {
    assert_eq!(
        validate_register_input(" Ada Lovelace ", " ada@example.com ", "longenough"),
        Ok(("Ada Lovelace".to_owned(), "ada@example.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_name() {
    assert_eq!(validate_register_input("  ", "a@b.com", "longenough"), Err("Enter your name."));
}

#[test]
fn validate_register_input_requires_plausible_email() {
    assert_eq!(validate_register_input("Ada", "nope", "longenough"), Err("Enter a valid email."));
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(
        validate_register_input("Ada", "a@b.com", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_register_input("Ada", "a@b.com", "12345678").is_ok());
}

#[test]
fn build_register_payload_carries_all_fields() {
    let payload = build_register_payload("Ada", "a@b.com", "longenough", "investor");
    assert_eq!(payload["name"], "Ada");
    assert_eq!(payload["email"], "a@b.com");
    assert_eq!(payload["password"], "longenough");
    assert_eq!(payload["role"], "investor");
}

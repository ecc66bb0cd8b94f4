use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_empty_email() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter a valid email."));
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(validate_login_input("userexample.com", "hunter2"), Err("Enter a valid email."));
}

#[test]
fn validate_login_input_rejects_empty_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with whitespace.
    assert_eq!(
        validate_login_input("user@example.com", " spaced "),
        Ok(("user@example.com".to_owned(), " spaced ".to_owned()))
    );
}

use super::*;

#[test]
fn parse_consent_recognizes_granted() {
    assert_eq!(parse_consent(Some("granted")), ConsentFlag::Granted);
}

#[test]
fn parse_consent_recognizes_denied() {
    assert_eq!(parse_consent(Some("denied")), ConsentFlag::Denied);
}

#[test]
fn parse_consent_treats_absent_as_unset() {
    assert_eq!(parse_consent(None), ConsentFlag::Unset);
}

#[test]
fn parse_consent_treats_garbage_as_unset() {
    assert_eq!(parse_consent(Some("yes please")), ConsentFlag::Unset);
    assert_eq!(parse_consent(Some("")), ConsentFlag::Unset);
    assert_eq!(parse_consent(Some("GRANTED")), ConsentFlag::Unset);
}

#[test]
fn should_inject_only_when_granted() {
    assert!(should_inject(ConsentFlag::Granted));
    assert!(!should_inject(ConsentFlag::Denied));
    assert!(!should_inject(ConsentFlag::Unset));
}

#[test]
fn poll_stops_on_any_recorded_decision() {
    assert!(should_keep_polling(ConsentFlag::Unset));
    assert!(!should_keep_polling(ConsentFlag::Granted));
    assert!(!should_keep_polling(ConsentFlag::Denied));
}

#[test]
fn default_flag_is_unset() {
    assert_eq!(ConsentFlag::default(), ConsentFlag::Unset);
}

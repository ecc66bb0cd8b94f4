use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_deserializes_minimal_response() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"name":null,"full_name":null,"email":"a@b.com","avatar_url":null,"role":null,"headline":null}"#)
            .unwrap();
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.name, None);
}

#[test]
fn display_name_prefers_name_over_full_name() {
    let profile = UserProfile {
        name: Some("Ada".to_owned()),
        full_name: Some("Ada Lovelace".to_owned()),
        email: "ada@example.com".to_owned(),
        avatar_url: None,
        role: None,
        headline: None,
    };
    assert_eq!(profile.display_name(), "Ada");
}

#[test]
fn display_name_falls_back_to_full_name_then_email() {
    let mut profile = UserProfile {
        name: None,
        full_name: Some("Ada Lovelace".to_owned()),
        email: "ada@example.com".to_owned(),
        avatar_url: None,
        role: None,
        headline: None,
    };
    assert_eq!(profile.display_name(), "Ada Lovelace");
    profile.full_name = None;
    assert_eq!(profile.display_name(), "ada@example.com");
}

#[test]
fn initials_take_first_letters_of_two_words() {
    let profile = UserProfile {
        name: Some("ada lovelace".to_owned()),
        full_name: None,
        email: "ada@example.com".to_owned(),
        avatar_url: None,
        role: None,
        headline: None,
    };
    assert_eq!(profile.initials(), "AL");
}

#[test]
fn initials_cap_at_two_letters() {
    let profile = UserProfile {
        name: Some("Ada King Countess Lovelace".to_owned()),
        full_name: None,
        email: "ada@example.com".to_owned(),
        avatar_url: None,
        role: None,
        headline: None,
    };
    assert_eq!(profile.initials(), "AK");
}

// =============================================================
// Dashboard DTOs
// =============================================================

#[test]
fn project_tolerates_missing_optional_fields() {
    let project: Project =
        serde_json::from_str(r#"{"id":"p1","name":"Rocket","summary":null,"stage":null,"created_at":null}"#).unwrap();
    assert_eq!(project.name, "Rocket");
    assert_eq!(project.stage, None);
}

#[test]
fn conversation_unread_defaults_to_false() {
    let convo: Conversation =
        serde_json::from_str(r#"{"id":"c1","counterpart_name":"Grace","last_message":null}"#).unwrap();
    assert!(!convo.unread);
}

#[test]
fn message_is_own_defaults_to_false() {
    let message: Message =
        serde_json::from_str(r#"{"id":"m1","sender_name":"Grace","body":"hi","sent_at":null}"#).unwrap();
    assert!(!message.is_own);
}

#[test]
fn login_response_reads_access_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"abc.def.ghi"}"#).unwrap();
    assert_eq!(resp.access_token, "abc.def.ghi");
}

#[test]
fn checkout_response_reads_url() {
    let resp: CheckoutResponse =
        serde_json::from_str(r#"{"checkout_url":"https://pay.example.com/s/1"}"#).unwrap();
    assert_eq!(resp.checkout_url, "https://pay.example.com/s/1");
}

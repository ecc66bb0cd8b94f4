use super::*;

#[test]
fn validate_message_body_trims_whitespace() {
    assert_eq!(validate_message_body("  hello  "), Ok("hello".to_owned()));
}

#[test]
fn validate_message_body_rejects_blank_draft() {
    assert_eq!(validate_message_body("   "), Err("Write a message first."));
    assert_eq!(validate_message_body(""), Err("Write a message first."));
}

#[test]
fn conversation_preview_shows_last_message() {
    let convo = Conversation {
        id: "c1".to_owned(),
        counterpart_name: "Grace".to_owned(),
        last_message: Some("See you Tuesday".to_owned()),
        unread: false,
    };
    assert_eq!(conversation_preview(&convo), "See you Tuesday");
}

#[test]
fn conversation_preview_has_placeholder_for_empty_thread() {
    let convo = Conversation {
        id: "c1".to_owned(),
        counterpart_name: "Grace".to_owned(),
        last_message: None,
        unread: false,
    };
    assert_eq!(conversation_preview(&convo), "No messages yet");
}

use super::*;

#[test]
fn project_endpoint_formats_expected_path() {
    assert_eq!(project_endpoint("p123"), "/projects/p123");
}

#[test]
fn conversation_messages_endpoint_formats_expected_path() {
    assert_eq!(conversation_messages_endpoint("c9"), "/conversations/c9/messages");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "registration failed: 409");
}

#[test]
fn update_profile_failed_message_formats_status() {
    assert_eq!(update_profile_failed_message(422), "profile update failed: 422");
}

#[test]
fn create_project_failed_message_formats_status() {
    assert_eq!(create_project_failed_message(400), "create project failed: 400");
}

#[test]
fn delete_project_failed_message_formats_status() {
    assert_eq!(delete_project_failed_message(404), "delete project failed: 404");
}

#[test]
fn send_message_failed_message_formats_status() {
    assert_eq!(send_message_failed_message(403), "send message failed: 403");
}

#[test]
fn checkout_failed_message_formats_status() {
    assert_eq!(checkout_failed_message(402), "checkout failed: 402");
}

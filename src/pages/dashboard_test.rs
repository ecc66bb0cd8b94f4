use super::*;

#[test]
fn validate_project_name_trims_whitespace() {
    assert_eq!(validate_project_name("  Rocket  "), Ok("Rocket".to_owned()));
}

#[test]
fn validate_project_name_rejects_blank() {
    assert_eq!(validate_project_name("   "), Err("Give the project a name."));
}

#[test]
fn build_project_payload_omits_empty_summary() {
    let payload = build_project_payload("Rocket", "   ");
    assert_eq!(payload["name"], "Rocket");
    assert!(payload.get("summary").is_none());
}

#[test]
fn build_project_payload_includes_trimmed_summary() {
    let payload = build_project_payload("Rocket", " reusable boosters ");
    assert_eq!(payload["summary"], "reusable boosters");
}

use super::*;

#[test]
fn join_url_appends_absolute_path() {
    assert_eq!(join_url("http://localhost:8000", "/auth/me"), "http://localhost:8000/auth/me");
}

#[test]
fn join_url_strips_trailing_slash_on_base() {
    assert_eq!(join_url("http://localhost:8000/", "/auth/me"), "http://localhost:8000/auth/me");
}

#[test]
fn join_url_inserts_missing_leading_slash() {
    assert_eq!(join_url("https://api.capmatch.io", "projects"), "https://api.capmatch.io/projects");
}

#[test]
fn endpoint_uses_compiled_base() {
    assert_eq!(endpoint("/auth/heartbeat"), format!("{BACKEND_URL}/auth/heartbeat"));
}

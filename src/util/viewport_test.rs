use super::*;

#[test]
fn mobile_media_query_uses_breakpoint_constant() {
    assert_eq!(mobile_media_query(), "(max-width: 768px)");
}

use super::*;

#[test]
fn support_mailto_targets_support_inbox() {
    assert_eq!(
        support_mailto(),
        "mailto:support@capmatch.io?subject=CapMatch%20support%20request"
    );
}

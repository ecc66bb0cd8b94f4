use super::*;

#[test]
fn subscription_summary_includes_renewal_date() {
    let sub = Subscription {
        plan: "growth".to_owned(),
        status: "active".to_owned(),
        renews_at: Some("2026-09-01".to_owned()),
    };
    assert_eq!(subscription_summary(Some(&sub)), "growth (active) — renews 2026-09-01");
}

#[test]
fn subscription_summary_without_renewal_date() {
    let sub = Subscription {
        plan: "growth".to_owned(),
        status: "past_due".to_owned(),
        renews_at: None,
    };
    assert_eq!(subscription_summary(Some(&sub)), "growth (past_due)");
}

#[test]
fn subscription_summary_defaults_to_free_tier() {
    assert_eq!(subscription_summary(None), "Starter (free)");
}

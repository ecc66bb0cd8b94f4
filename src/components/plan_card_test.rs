use super::*;

#[test]
fn catalog_ids_are_unique() {
    for (i, a) in PLAN_CATALOG.iter().enumerate() {
        for b in &PLAN_CATALOG[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn catalog_is_ordered_cheapest_first() {
    for pair in PLAN_CATALOG.windows(2) {
        assert!(pair[0].price_usd_month < pair[1].price_usd_month);
    }
}

#[test]
fn catalog_entries_have_copy_and_features() {
    for plan in PLAN_CATALOG {
        assert!(!plan.name.is_empty());
        assert!(!plan.blurb.is_empty());
        assert!(!plan.features.is_empty());
    }
}

#[test]
fn exactly_one_plan_is_highlighted() {
    let highlighted = PLAN_CATALOG.iter().filter(|p| p.highlighted).count();
    assert_eq!(highlighted, 1);
}

#[test]
fn cta_label_marks_current_plan() {
    assert_eq!(plan_cta_label(Some("growth"), "growth"), "Current plan");
}

#[test]
fn cta_label_offers_switch_from_other_plan() {
    assert_eq!(plan_cta_label(Some("starter"), "growth"), "Switch plan");
}

#[test]
fn cta_label_invites_unsubscribed_viewers() {
    assert_eq!(plan_cta_label(None, "growth"), "Get started");
}

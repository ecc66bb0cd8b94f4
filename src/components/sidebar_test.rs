use super::*;

#[test]
fn desktop_expanded_class() {
    let state = DashboardUi { sidebar_open: true, is_mobile: false };
    assert_eq!(sidebar_class(&state), "sidebar sidebar--expanded");
}

#[test]
fn desktop_collapsed_class_is_rail() {
    let state = DashboardUi { sidebar_open: false, is_mobile: false };
    assert_eq!(sidebar_class(&state), "sidebar sidebar--rail");
}

#[test]
fn mobile_drawer_class_tracks_open_state() {
    let open = DashboardUi { sidebar_open: true, is_mobile: true };
    let closed = DashboardUi { sidebar_open: false, is_mobile: true };
    assert_eq!(sidebar_class(&open), "sidebar sidebar--drawer sidebar--drawer-open");
    assert_eq!(sidebar_class(&closed), "sidebar sidebar--drawer");
}

#[test]
fn labels_hidden_only_on_desktop_rail() {
    assert!(labels_visible(&DashboardUi { sidebar_open: true, is_mobile: false }));
    assert!(!labels_visible(&DashboardUi { sidebar_open: false, is_mobile: false }));
    assert!(labels_visible(&DashboardUi { sidebar_open: false, is_mobile: true }));
}

#[test]
fn nav_links_cover_all_dashboard_routes() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _, _)| *href).collect();
    assert_eq!(hrefs, vec!["/dashboard", "/messages", "/billing", "/profile"]);
}

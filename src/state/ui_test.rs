use super::*;

use leptos::prelude::*;

// =============================================================
// DashboardUi defaults
// =============================================================

#[test]
fn default_sidebar_is_open() {
    let state = DashboardUi::default();
    assert!(state.sidebar_open);
}

#[test]
fn default_mode_is_desktop() {
    let state = DashboardUi::default();
    assert!(!state.is_mobile);
    assert_eq!(state.layout_mode(), LayoutMode::DesktopExpanded);
}

// =============================================================
// Mutation operations
// =============================================================

#[test]
fn double_toggle_returns_to_original_state() {
    let mut state = DashboardUi::default();
    let original = state;
    state.toggle_sidebar();
    assert_ne!(state, original);
    state.toggle_sidebar();
    assert_eq!(state, original);
}

#[test]
fn set_sidebar_is_idempotent() {
    let mut state = DashboardUi::default();
    state.set_sidebar(false);
    let after_first = state;
    state.set_sidebar(false);
    assert_eq!(state, after_first);
}

#[test]
fn set_mobile_only_touches_its_axis() {
    let mut state = DashboardUi::default();
    state.set_mobile(true);
    assert!(state.is_mobile);
    assert!(state.sidebar_open);
}

// =============================================================
// Layout derivation
// =============================================================

#[test]
fn mobile_mode_ignores_sidebar_state() {
    let open = DashboardUi { sidebar_open: true, is_mobile: true };
    let closed = DashboardUi { sidebar_open: false, is_mobile: true };
    assert_eq!(open.layout_mode(), LayoutMode::Mobile);
    assert_eq!(closed.layout_mode(), LayoutMode::Mobile);
    assert_eq!(open.content_offset_style(), closed.content_offset_style());
}

#[test]
fn desktop_modes_track_sidebar_state() {
    let open = DashboardUi { sidebar_open: true, is_mobile: false };
    let closed = DashboardUi { sidebar_open: false, is_mobile: false };
    assert_eq!(open.layout_mode(), LayoutMode::DesktopExpanded);
    assert_eq!(closed.layout_mode(), LayoutMode::DesktopCollapsed);
}

#[test]
fn content_offset_reserves_topbar_on_mobile() {
    let state = DashboardUi { sidebar_open: true, is_mobile: true };
    assert_eq!(state.content_offset_style(), "padding-top: 56px;");
}

#[test]
fn content_offset_reserves_sidebar_width_when_expanded() {
    let state = DashboardUi { sidebar_open: true, is_mobile: false };
    assert_eq!(state.content_offset_style(), "padding-left: 240px;");
}

#[test]
fn content_offset_reserves_rail_width_when_collapsed() {
    let state = DashboardUi { sidebar_open: false, is_mobile: false };
    assert_eq!(state.content_offset_style(), "padding-left: 64px;");
}

// =============================================================
// Context guard
// =============================================================

#[test]
#[should_panic(expected = "use_dashboard_ui called outside a DashboardLayout provider")]
fn use_dashboard_ui_outside_provider_panics() {
    let owner = Owner::new();
    owner.set();
    let _ = use_dashboard_ui();
}

#[test]
fn use_dashboard_ui_returns_the_provided_signal() {
    let owner = Owner::new();
    owner.set();
    let provided = provide_dashboard_ui();
    let read = use_dashboard_ui();
    read.update(DashboardUi::toggle_sidebar);
    assert!(!provided.get_untracked().sidebar_open);
}

//! Dashboard chrome state: sidebar expansion and responsive mode.
//!
//! DESIGN
//! ======
//! One owner, many readers. `DashboardLayout` provides an
//! `RwSignal<DashboardUi>`; sibling chrome (sidebar, top bar, content shell)
//! reads it through [`use_dashboard_ui`] so they stay visually in sync
//! without prop-drilling. All mutation goes through the three operations
//! here: `sidebar_open` from user controls, `is_mobile` from the viewport
//! watcher only. Nothing is persisted; a fresh mount starts expanded.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// Width of the expanded sidebar in CSS pixels.
pub const SIDEBAR_WIDTH_PX: u32 = 240;

/// Width of the collapsed sidebar rail in CSS pixels.
pub const SIDEBAR_RAIL_PX: u32 = 64;

/// Height of the fixed top bar in CSS pixels (reserved on mobile).
pub const TOPBAR_HEIGHT_PX: u32 = 56;

/// Chrome state for the dashboard shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardUi {
    /// Whether the sidebar is expanded. User-controlled.
    pub sidebar_open: bool,
    /// Whether the viewport is in mobile mode. Environment-derived.
    pub is_mobile: bool,
}

impl Default for DashboardUi {
    fn default() -> Self {
        Self { sidebar_open: true, is_mobile: false }
    }
}

/// How the two state axes resolve for layout purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: sidebar becomes an overlay, content sits below the
    /// fixed top bar regardless of `sidebar_open`.
    Mobile,
    /// Wide viewport, sidebar expanded.
    DesktopExpanded,
    /// Wide viewport, sidebar collapsed to its icon rail.
    DesktopCollapsed,
}

impl DashboardUi {
    /// Flip the sidebar between expanded and collapsed.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Set the sidebar to an explicit state.
    pub fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Record the viewport mode. Called only by the viewport watcher.
    pub fn set_mobile(&mut self, mobile: bool) {
        self.is_mobile = mobile;
    }

    /// Resolve the two axes into one of three layout outcomes.
    pub fn layout_mode(&self) -> LayoutMode {
        if self.is_mobile {
            LayoutMode::Mobile
        } else if self.sidebar_open {
            LayoutMode::DesktopExpanded
        } else {
            LayoutMode::DesktopCollapsed
        }
    }

    /// Inline style reserving space for the chrome around the content shell.
    pub fn content_offset_style(&self) -> String {
        match self.layout_mode() {
            LayoutMode::Mobile => format!("padding-top: {TOPBAR_HEIGHT_PX}px;"),
            LayoutMode::DesktopExpanded => format!("padding-left: {SIDEBAR_WIDTH_PX}px;"),
            LayoutMode::DesktopCollapsed => format!("padding-left: {SIDEBAR_RAIL_PX}px;"),
        }
    }
}

/// Create the chrome-state signal and provide it to descendants.
///
/// Called once, by `DashboardLayout`.
pub fn provide_dashboard_ui() -> RwSignal<DashboardUi> {
    let ui = RwSignal::new(DashboardUi::default());
    provide_context(ui);
    ui
}

/// Read the chrome-state signal from context.
///
/// # Panics
///
/// Panics when called outside a `DashboardLayout` subtree. That is a
/// programmer error, not a runtime condition, so it fails loudly instead of
/// silently defaulting.
pub fn use_dashboard_ui() -> RwSignal<DashboardUi> {
    use_context::<RwSignal<DashboardUi>>()
        .expect("use_dashboard_ui called outside a DashboardLayout provider")
}

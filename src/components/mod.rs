//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site and dashboard chrome while reading/writing shared
//! state from Leptos context providers. `require_session` and
//! `dashboard_layout` carry the only coordination logic; the rest is
//! presentation.

pub mod analytics;
pub mod consent_banner;
pub mod dashboard_layout;
pub mod plan_card;
pub mod project_card;
pub mod require_session;
pub mod sidebar;
pub mod site_footer;
pub mod site_header;
pub mod support_widget;
pub mod topbar;

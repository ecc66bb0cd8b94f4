//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Dashboard pages wrap themselves in `DashboardLayout`;
//! marketing pages compose the site header/footer directly.

pub mod billing;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod messages;
pub mod pricing;
pub mod profile;
pub mod register;

//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each module owns one concern: `session` the guard's tri-state phase,
//! `ui` the dashboard chrome, `profile` the viewer's identity. Plain structs
//! with pure operations so every transition is natively testable; components
//! wrap them in `RwSignal` at the provider.

pub mod profile;
pub mod session;
pub mod ui;

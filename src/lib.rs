//! # capmatch-web
//!
//! Leptos + WASM frontend for the CapMatch founder/investor matchmaking
//! platform. Marketing pages, an authenticated dashboard (projects, billing,
//! messaging, profile), and the chrome around them.
//!
//! This crate is pure presentation: the backend is a remote HTTP API reached
//! through `net::api`, and the only state the browser keeps is one session
//! token string plus an analytics consent flag. The two coordination pieces
//! with real behavior are the session guard (`components::require_session`)
//! and the dashboard chrome state (`state::ui`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

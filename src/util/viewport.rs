//! Viewport watcher feeding the dashboard's mobile/desktop axis.
//!
//! SYSTEM CONTEXT
//! ==============
//! `is_mobile` is environment-derived, never user-controlled: this module is
//! its only producer. It evaluates a `max-width` media query at mount,
//! re-evaluates on window `resize`, and removes the listener on cleanup. All
//! writes flow through `DashboardUi::set_mobile` to keep the single-writer
//! discipline on the chrome state.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::ui::DashboardUi;

/// Widest viewport still treated as mobile.
pub const MOBILE_MAX_WIDTH_PX: u32 = 768;

/// Media query string for the mobile breakpoint.
pub fn mobile_media_query() -> String {
    format!("(max-width: {MOBILE_MAX_WIDTH_PX}px)")
}

#[cfg(feature = "csr")]
fn evaluate_mobile(window: &web_sys::Window) -> bool {
    window
        .match_media(&mobile_media_query())
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}

/// Start watching the viewport for the lifetime of the current reactive
/// owner. Evaluates once immediately, then on every window `resize`.
#[cfg(feature = "csr")]
pub fn install_mobile_watcher(ui: RwSignal<DashboardUi>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    ui.update(|u| u.set_mobile(evaluate_mobile(&window)));

    let resize_window = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let mobile = evaluate_mobile(&resize_window);
        ui.update(|u| u.set_mobile(mobile));
    });
    if window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    on_cleanup(move || {
        let _ = window
            .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    });
}

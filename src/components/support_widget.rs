//! Floating support widget.
//!
//! A launcher button toggling a small panel with a prefilled support email
//! link and documentation pointers. Purely local open/closed state.

#[cfg(test)]
#[path = "support_widget_test.rs"]
mod support_widget_test;

use leptos::prelude::*;

/// Support inbox address.
pub const SUPPORT_EMAIL: &str = "support@capmatch.io";

/// Prefilled `mailto:` link for the support panel.
pub fn support_mailto() -> String {
    format!("mailto:{SUPPORT_EMAIL}?subject=CapMatch%20support%20request")
}

#[component]
pub fn SupportWidget() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="support-widget">
            <Show when=move || open.get()>
                <div class="support-widget__panel">
                    <span class="support-widget__heading">"Need a hand?"</span>
                    <a class="support-widget__link" href=support_mailto()>
                        "Email support"
                    </a>
                    <a class="support-widget__link" href="https://docs.capmatch.io">
                        "Read the docs"
                    </a>
                </div>
            </Show>
            <button
                class="support-widget__launcher"
                on:click=move |_| open.update(|o| *o = !*o)
                aria-label="Support"
            >
                {move || if open.get() { "✕" } else { "?" }}
            </button>
        </div>
    }
}

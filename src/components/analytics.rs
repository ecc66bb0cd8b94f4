//! Consent-gated analytics loader.
//!
//! DESIGN
//! ======
//! Renders nothing. A fixed-interval poll re-reads the stored consent flag
//! so a decision made in the banner (or another tab) takes effect without a
//! reload. The script tag is injected at most once, only after `granted`;
//! a `denied` decision stops the poll for good. The poll carries the same
//! mount-scoped alive flag as the session guard's heartbeat.

use leptos::prelude::*;

/// DOM id marking the injected script, checked to keep injection idempotent.
pub const ANALYTICS_SCRIPT_ID: &str = "capmatch-analytics";

/// Analytics bundle injected after consent.
pub const ANALYTICS_SRC: &str = "https://analytics.capmatch.io/loader.js";

/// Seconds between consent re-checks.
const POLL_INTERVAL_SECS: u64 = 1;

#[component]
pub fn AnalyticsGate() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use crate::util::consent::{parse_consent, should_inject, should_keep_polling};
        use crate::util::storage;

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let flag = parse_consent(storage::read_consent().as_deref());
                if should_inject(flag) {
                    inject_analytics_script();
                    break;
                }
                if !should_keep_polling(flag) {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS))
                    .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Renders nothing; this component only runs the poll.
}

#[cfg(feature = "csr")]
fn inject_analytics_script() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(ANALYTICS_SCRIPT_ID).is_some() {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        leptos::logging::warn!("analytics script element creation failed");
        return;
    };
    script.set_id(ANALYTICS_SCRIPT_ID);
    let _ = script.set_attribute("src", ANALYTICS_SRC);
    let _ = script.set_attribute("async", "");
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}

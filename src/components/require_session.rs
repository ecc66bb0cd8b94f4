//! Session guard wrapping protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decides once per mount whether the viewer holds a valid session and
//! redirects guests to `/login`, without ever flashing protected markup to
//! an unauthenticated viewer. Decision logic lives in `state::session`; this
//! component only wires it to storage, the heartbeat call, and the router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionPhase, should_redirect};

/// Render `children` only for an authenticated viewer.
///
/// The check is local-first: a well-formed unexpired token in either store
/// settles the phase synchronously with no network call. Otherwise a single
/// heartbeat request decides; its phase write is suppressed if this
/// component was torn down before the response arrived. The in-flight
/// request itself is not aborted, only its effect on state.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let phase = RwSignal::new(SessionPhase::Checking);

    #[cfg(feature = "csr")]
    {
        use crate::state::session::{phase_from_heartbeat, phase_from_local};

        let stored = crate::util::storage::read_token();
        if let Some(local) = phase_from_local(stored.as_deref(), crate::util::token::now_ms()) {
            phase.set(local);
        } else {
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                let backend_ok = crate::net::api::heartbeat().await;
                if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    phase.set(phase_from_heartbeat(backend_ok));
                }
            });
            on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }

    // Navigation must run as a side effect, never during render.
    let navigate = use_navigate();
    Effect::new(move || {
        if should_redirect(phase.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || phase.get() == SessionPhase::Authed>
            {children()}
        </Show>
    }
}

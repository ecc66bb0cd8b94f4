//! Dashboard top bar: sidebar toggle, viewer identity, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the profile-loading collaborator: on mount it fetches `/auth/me`
//! (bearer header when a local token exists) into the shared `ProfileState`
//! context, with the same alive-flag cancellation the guard uses.

use leptos::prelude::*;

use crate::state::profile::ProfileState;
use crate::state::ui::{DashboardUi, use_dashboard_ui};

#[component]
pub fn Topbar() -> impl IntoView {
    let ui = use_dashboard_ui();
    let profile = expect_context::<RwSignal<ProfileState>>();

    #[cfg(feature = "csr")]
    {
        profile.update(|p| p.loading = true);
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let token = crate::util::storage::read_token();
            let fetched = crate::net::api::fetch_me(token.as_deref()).await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                if fetched.is_none() {
                    leptos::logging::warn!("identity fetch failed; showing anonymous top bar");
                }
                profile.set(ProfileState { profile: fetched, loading: false });
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let display_name = move || {
        profile
            .get()
            .profile
            .map_or_else(String::new, |p| p.display_name().to_owned())
    };
    let initials = move || {
        profile
            .get()
            .profile
            .map_or_else(|| "?".to_owned(), |p| p.initials())
    };
    let avatar_url = move || profile.get().profile.and_then(|p| p.avatar_url);
    let role = move || profile.get().profile.and_then(|p| p.role).unwrap_or_default();

    let on_toggle = move |_| ui.update(DashboardUi::toggle_sidebar);

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                crate::util::storage::clear_token();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="topbar">
            <button
                class="topbar__menu"
                on:click=on_toggle
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
            >
                "☰"
            </button>

            <span class="topbar__spacer"></span>

            <Show when=move || !profile.get().loading>
                <span class="topbar__identity">
                    <Show
                        when=move || avatar_url().is_some()
                        fallback=move || {
                            view! { <span class="topbar__avatar-initials">{initials()}</span> }
                        }
                    >
                        <img
                            class="topbar__avatar"
                            src=move || avatar_url().unwrap_or_default()
                            alt="avatar"
                        />
                    </Show>
                    <span class="topbar__name">{display_name}</span>
                    <span class="topbar__role">{role}</span>
                </span>
            </Show>

            <button class="topbar__logout" on:click=on_logout title="Log out">
                "Log out"
            </button>
        </header>
    }
}

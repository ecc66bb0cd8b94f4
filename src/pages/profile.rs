//! Profile page: edit the viewer's public identity.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::state::profile::ProfileState;

/// Validate and normalize the profile form.
///
/// # Errors
///
/// Returns a user-facing message when the name is effectively empty.
pub fn validate_profile_input(full_name: &str) -> Result<String, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Your name cannot be empty.");
    }
    Ok(full_name.to_owned())
}

/// Request body for `PUT /users/me`. Empty optional fields are sent as
/// `null` so the backend can clear them.
pub fn build_profile_payload(
    full_name: &str,
    headline: &str,
    avatar_url: &str,
) -> serde_json::Value {
    let optional = |value: &str| {
        let value = value.trim();
        if value.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(value.to_owned())
        }
    };
    serde_json::json!({
        "full_name": full_name,
        "headline": optional(headline),
        "avatar_url": optional(avatar_url),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <ProfileView/>
        </DashboardLayout>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();
    let full_name = RwSignal::new(String::new());
    let headline = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let seeded = RwSignal::new(false);

    // Seed the form once the top bar's identity fetch lands.
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        let state = profile.get();
        if state.loading {
            return;
        }
        if let Some(viewer) = state.profile {
            full_name.set(viewer.display_name().to_owned());
            headline.set(viewer.headline.unwrap_or_default());
            avatar_url.set(viewer.avatar_url.unwrap_or_default());
        }
        seeded.set(true);
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_profile_input(&full_name.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "csr")]
        {
            let payload = build_profile_payload(&name_value, &headline.get(), &avatar_url.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&payload).await {
                    Ok(()) => {
                        info.set("Saved.".to_owned());
                        profile.update(|state| {
                            if let Some(viewer) = state.profile.as_mut() {
                                viewer.name = Some(name_value);
                            }
                        });
                    }
                    Err(e) => info.set(format!("Save failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name_value;
        }
    };

    view! {
        <div class="profile-view">
            <h1>"Profile"</h1>
            <Show
                when=move || !profile.get().loading
                fallback=move || view! { <p>"Loading profile..."</p> }
            >
                <form class="profile-view__form" on:submit=on_save>
                    <label class="profile-view__field">
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-view__field">
                        "Headline"
                        <input
                            type="text"
                            placeholder="One-line pitch"
                            prop:value=move || headline.get()
                            on:input=move |ev| headline.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-view__field">
                        "Avatar URL"
                        <input
                            type="url"
                            placeholder="https://..."
                            prop:value=move || avatar_url.get()
                            on:input=move |ev| avatar_url.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || busy.get()>
                        "Save changes"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-view__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

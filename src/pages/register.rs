//! Registration page with founder/investor role choice.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate and normalize the registration form.
///
/// # Errors
///
/// Returns a user-facing message for the first failing field.
pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Request body for `POST /auth/register`.
pub fn build_register_payload(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "password": password,
        "role": role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let role = RwSignal::new("founder".to_owned());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_register_input(&name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let payload =
                build_register_payload(&name_value, &email_value, &password_value, &role.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&payload).await {
                    Ok(()) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, name_value, email_value, password_value);
        }
    };

    view! {
        <div class="register-page">
            <SiteHeader/>
            <div class="register-card">
                <h1>"Join CapMatch"</h1>
                <div class="register-roles" role="radiogroup" aria-label="I am a">
                    <button
                        class="register-role"
                        class:register-role--active=move || role.get() == "founder"
                        on:click=move |_| role.set("founder".to_owned())
                    >
                        "Founder"
                    </button>
                    <button
                        class="register-role"
                        class:register-role--active=move || role.get() == "investor"
                        on:click=move |_| role.set("investor".to_owned())
                    >
                        "Investor"
                    </button>
                </div>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <p class="register-alt">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
            <SiteFooter/>
        </div>
    }
}

//! Marketing-site header with primary navigation.

use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__brand-mark">"◆"</span>
                "CapMatch"
            </a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="/pricing">"Pricing"</a>
                <a class="site-header__link" href="/login">"Log in"</a>
                <a class="site-header__cta" href="/register">"Get started"</a>
            </nav>
        </header>
    }
}

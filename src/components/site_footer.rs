//! Marketing-site footer with link columns.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column">
                    <span class="site-footer__heading">"Product"</span>
                    <a href="/pricing">"Pricing"</a>
                    <a href="/register">"For founders"</a>
                    <a href="/register">"For investors"</a>
                </div>
                <div class="site-footer__column">
                    <span class="site-footer__heading">"Company"</span>
                    <a href="/">"About"</a>
                    <a href="mailto:hello@capmatch.io">"Contact"</a>
                </div>
                <div class="site-footer__column">
                    <span class="site-footer__heading">"Legal"</span>
                    <a href="/">"Privacy"</a>
                    <a href="/">"Terms"</a>
                </div>
            </div>
            <p class="site-footer__copyright">"© 2026 CapMatch"</p>
        </footer>
    }
}

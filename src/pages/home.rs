//! Marketing landing page.

use leptos::prelude::*;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <SiteHeader/>
            <section class="home-page__hero">
                <h1>"Where founders meet the right investors"</h1>
                <p class="home-page__tagline">
                    "CapMatch pairs fundraising projects with investors whose thesis actually fits."
                </p>
                <a class="home-page__cta" href="/register">"Create your profile"</a>
            </section>
            <section class="home-page__how">
                <h2>"How it works"</h2>
                <ol class="home-page__steps">
                    <li>"Publish a project with your stage, sector, and raise."</li>
                    <li>"Get matched with investors screening for exactly that."</li>
                    <li>"Talk directly — no warm-intro gatekeeping."</li>
                </ol>
            </section>
            <section class="home-page__audiences">
                <div class="home-page__audience">
                    <h3>"For founders"</h3>
                    <p>"Spend your runway building, not cold-emailing."</p>
                </div>
                <div class="home-page__audience">
                    <h3>"For investors"</h3>
                    <p>"Deal flow filtered to your thesis before it reaches your inbox."</p>
                </div>
            </section>
            <section class="home-page__bottom-cta">
                <a class="home-page__cta" href="/register">"Get started free"</a>
            </section>
            <SiteFooter/>
        </div>
    }
}

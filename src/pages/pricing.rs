//! Marketing pricing page: static plan catalog plus FAQ.

use leptos::prelude::*;

use crate::components::plan_card::{PLAN_CATALOG, PlanCard};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <SiteHeader/>
            <section class="pricing-page__plans">
                <h1>"Simple pricing"</h1>
                {PLAN_CATALOG
                    .iter()
                    .map(|plan| view! { <PlanCard plan=*plan current_plan=None/> })
                    .collect::<Vec<_>>()}
            </section>
            <section class="pricing-page__faq">
                <h2>"Questions"</h2>
                <details>
                    <summary>"Can I cancel anytime?"</summary>
                    <p>"Yes. Paid plans are month-to-month with no lock-in."</p>
                </details>
                <details>
                    <summary>"Do investors pay?"</summary>
                    <p>"Investors use Scale; funds get team seats and deal-flow filters."</p>
                </details>
                <details>
                    <summary>"Is there a free tier?"</summary>
                    <p>"Starter is free forever: one project and a public profile."</p>
                </details>
            </section>
            <SiteFooter/>
        </div>
    }
}

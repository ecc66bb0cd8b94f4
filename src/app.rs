//! Root application component: routing plus global chrome.
//!
//! The consent banner, analytics gate, and support widget sit outside the
//! route table so every page carries them; dashboard routes add their own
//! guarded shell via `DashboardLayout`.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::analytics::AnalyticsGate;
use crate::components::consent_banner::ConsentBanner;
use crate::components::support_widget::SupportWidget;
use crate::pages::{
    billing::BillingPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    messages::MessagesPage, pricing::PricingPage, profile::ProfilePage, register::RegisterPage,
};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CapMatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
                <Route path=StaticSegment("billing") view=BillingPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>

        <ConsentBanner/>
        <AnalyticsGate/>
        <SupportWidget/>
    }
}

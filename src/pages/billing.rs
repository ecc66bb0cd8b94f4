//! Billing page: current subscription plus the plan catalog with checkout.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::plan_card::{PLAN_CATALOG, PlanCard};
use crate::net::types::Subscription;

/// Summary line for the current-subscription panel.
pub fn subscription_summary(subscription: Option<&Subscription>) -> String {
    match subscription {
        Some(sub) => match &sub.renews_at {
            Some(date) => format!("{} ({}) — renews {date}", sub.plan, sub.status),
            None => format!("{} ({})", sub.plan, sub.status),
        },
        None => "Starter (free)".to_owned(),
    }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <BillingView/>
        </DashboardLayout>
    }
}

#[component]
fn BillingView() -> impl IntoView {
    let subscription = RwSignal::new(None::<Subscription>);
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_subscription().await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                subscription.set(fetched);
                loading.set(false);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Checkout hands the browser to the hosted payment page.
    let on_select = Callback::new(move |plan_id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout(&plan_id).await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => info.set(format!("Checkout failed: {e}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = plan_id;
        }
    });

    let current_plan = move || subscription.get().map(|sub| sub.plan);

    view! {
        <div class="billing-view">
            <h1>"Billing"</h1>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading subscription..."</p> }
            >
                <p class="billing-view__current">
                    "Current plan: "
                    {move || subscription_summary(subscription.get().as_ref())}
                </p>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="billing-view__error">{move || info.get()}</p>
            </Show>
            <div class="billing-view__plans">
                {move || {
                    PLAN_CATALOG
                        .iter()
                        .map(|plan| {
                            view! {
                                <PlanCard
                                    plan=*plan
                                    current_plan=current_plan()
                                    on_select=on_select
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

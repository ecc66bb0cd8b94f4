//! Plan catalog and the card rendering one plan.
//!
//! DESIGN
//! ======
//! The catalog is static client-side data; billing truth lives in the
//! backend. Cards only decide their call-to-action label from the viewer's
//! current plan, so pricing copy and the billing page share one source.

#[cfg(test)]
#[path = "plan_card_test.rs"]
mod plan_card_test;

use leptos::prelude::*;

/// One subscription tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Identifier matching the backend's `plan` field.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Monthly price in whole US dollars.
    pub price_usd_month: u32,
    /// One-line positioning.
    pub blurb: &'static str,
    /// Feature bullets.
    pub features: &'static [&'static str],
    /// Visually emphasized in the catalog.
    pub highlighted: bool,
}

/// All tiers, cheapest first.
pub const PLAN_CATALOG: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price_usd_month: 0,
        blurb: "Build a profile and browse the network.",
        features: &["1 project", "Public profile", "Community support"],
        highlighted: false,
    },
    Plan {
        id: "growth",
        name: "Growth",
        price_usd_month: 49,
        blurb: "For founders actively raising.",
        features: &["Unlimited projects", "Direct messaging", "Intro requests", "Email support"],
        highlighted: true,
    },
    Plan {
        id: "scale",
        name: "Scale",
        price_usd_month: 149,
        blurb: "For funds and syndicates.",
        features: &["Everything in Growth", "Deal-flow filters", "Team seats", "Priority support"],
        highlighted: false,
    },
];

/// Call-to-action label for a plan card given the viewer's current plan.
pub fn plan_cta_label(current_plan: Option<&str>, plan_id: &str) -> &'static str {
    match current_plan {
        Some(current) if current == plan_id => "Current plan",
        Some(_) => "Switch plan",
        None => "Get started",
    }
}

/// A single plan card. `on_select` is absent on the marketing page, where
/// the button is a plain pointer toward registration rather than a checkout.
#[component]
pub fn PlanCard(
    plan: Plan,
    /// The viewer's current plan id, when known (billing page only).
    current_plan: Option<String>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let label = plan_cta_label(current_plan.as_deref(), plan.id);
    let is_current = label == "Current plan";
    let on_click = Callback::new(move |()| {
        if let Some(on_select) = on_select.as_ref() {
            on_select.run(plan.id.to_owned());
        }
    });

    view! {
        <div class="plan-card" class:plan-card--highlighted=plan.highlighted>
            <span class="plan-card__name">{plan.name}</span>
            <span class="plan-card__price">
                "$" {plan.price_usd_month} <span class="plan-card__cadence">"/mo"</span>
            </span>
            <p class="plan-card__blurb">{plan.blurb}</p>
            <ul class="plan-card__features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <button
                class="plan-card__cta"
                disabled=is_current
                on:click=move |_| on_click.run(())
            >
                {label}
            </button>
        </div>
    }
}

//! Analytics consent banner.
//!
//! Shown until the viewer records a decision; the decision is written to
//! `localStorage` where the analytics gate's poll picks it up. The banner
//! itself never loads anything.

use leptos::prelude::*;

use crate::util::consent::{CONSENT_DENIED, CONSENT_GRANTED, ConsentFlag, parse_consent};
use crate::util::storage;

#[component]
pub fn ConsentBanner() -> impl IntoView {
    // Native builds read no storage and stay `Unset`.
    let flag = RwSignal::new(parse_consent(storage::read_consent().as_deref()));

    let on_accept = move |_| {
        storage::store_consent(CONSENT_GRANTED);
        flag.set(ConsentFlag::Granted);
    };
    let on_decline = move |_| {
        storage::store_consent(CONSENT_DENIED);
        flag.set(ConsentFlag::Denied);
    };

    view! {
        <Show when=move || flag.get() == ConsentFlag::Unset>
            <div class="consent-banner" role="dialog" aria-label="Analytics consent">
                <p class="consent-banner__text">
                    "We use analytics to improve CapMatch. Nothing loads until you agree."
                </p>
                <div class="consent-banner__actions">
                    <button class="consent-banner__accept" on:click=on_accept>
                        "Allow"
                    </button>
                    <button class="consent-banner__decline" on:click=on_decline>
                        "Decline"
                    </button>
                </div>
            </div>
        </Show>
    }
}

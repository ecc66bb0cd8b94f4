//! Dashboard navigation sidebar.
//!
//! Expanded it shows labeled links; collapsed it narrows to an icon rail.
//! On mobile it becomes an overlay drawer toggled from the top bar, closing
//! itself after navigation so the drawer never lingers over content.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::ui::{DashboardUi, LayoutMode, use_dashboard_ui};

/// Dashboard routes shown in the sidebar, in display order.
pub const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("/dashboard", "▦", "Projects"),
    ("/messages", "✉", "Messages"),
    ("/billing", "◈", "Billing"),
    ("/profile", "◉", "Profile"),
];

/// Class list for the sidebar element given the current chrome state.
pub fn sidebar_class(state: &DashboardUi) -> String {
    match state.layout_mode() {
        LayoutMode::Mobile => {
            if state.sidebar_open {
                "sidebar sidebar--drawer sidebar--drawer-open".to_owned()
            } else {
                "sidebar sidebar--drawer".to_owned()
            }
        }
        LayoutMode::DesktopExpanded => "sidebar sidebar--expanded".to_owned(),
        LayoutMode::DesktopCollapsed => "sidebar sidebar--rail".to_owned(),
    }
}

/// Whether link labels are visible (hidden only on the desktop rail).
pub fn labels_visible(state: &DashboardUi) -> bool {
    state.layout_mode() != LayoutMode::DesktopCollapsed
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = use_dashboard_ui();

    let on_collapse = move |_| ui.update(DashboardUi::toggle_sidebar);
    // Mobile drawer closes after navigating; desktop keeps its state.
    let on_nav = move |_| {
        if ui.get().is_mobile {
            ui.update(|u| u.set_sidebar(false));
        }
    };

    view! {
        <nav class=move || sidebar_class(&ui.get())>
            <a class="sidebar__brand" href="/dashboard">
                <span class="sidebar__brand-mark">"◆"</span>
                <Show when=move || labels_visible(&ui.get())>
                    <span class="sidebar__brand-name">"CapMatch"</span>
                </Show>
            </a>
            <ul class="sidebar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, icon, label)| {
                        view! {
                            <li class="sidebar__item">
                                <a class="sidebar__link" href=*href on:click=on_nav>
                                    <span class="sidebar__icon" aria-hidden="true">{*icon}</span>
                                    <Show when=move || labels_visible(&ui.get())>
                                        <span class="sidebar__label">{*label}</span>
                                    </Show>
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button
                class="sidebar__collapse"
                on:click=on_collapse
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
            >
                {move || if ui.get().sidebar_open { "«" } else { "»" }}
            </button>
        </nav>
    }
}

//! Authenticated shell: session guard, chrome state, sidebar and top bar.
//!
//! ARCHITECTURE
//! ============
//! Every dashboard page nests its content in this layout. The guard sits
//! outermost so nothing below it mounts for a guest; inside it the shell
//! provides the chrome-state and profile contexts, installs the viewport
//! watcher, and offsets the content area around the sidebar/top bar.

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::state::profile::ProfileState;
use crate::state::ui::provide_dashboard_ui;

/// Wrap a dashboard page in the guarded shell.
#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    // StoredValue lets the children fn pass through two re-runnable closures.
    let children = StoredValue::new(children);
    view! {
        <RequireSession>
            <DashboardShell>
                {move || children.with_value(|children| children())}
            </DashboardShell>
        </RequireSession>
    }
}

/// The shell proper. Mounts only once the guard reaches `Authed`.
#[component]
fn DashboardShell(children: ChildrenFn) -> impl IntoView {
    let ui = provide_dashboard_ui();
    provide_context(RwSignal::new(ProfileState::default()));

    #[cfg(feature = "csr")]
    crate::util::viewport::install_mobile_watcher(ui);

    view! {
        <div class="dashboard-shell">
            <Sidebar/>
            <Topbar/>
            <main
                class="dashboard-shell__content"
                style=move || ui.get().content_offset_style()
            >
                {children()}
            </main>
        </div>
    }
}

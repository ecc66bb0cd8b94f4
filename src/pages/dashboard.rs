//! Dashboard landing page: the viewer's projects with create and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! First page behind the session guard. Loads the project list once on
//! mount and keeps creation/deletion dialogs route-local; the shared shell
//! chrome comes from `DashboardLayout`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::project_card::ProjectCard;
use crate::net::types::Project;

/// Validate and normalize a new project's name.
///
/// # Errors
///
/// Returns a user-facing message when the name is effectively empty.
pub fn validate_project_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Give the project a name.");
    }
    Ok(name.to_owned())
}

/// Request body for `POST /projects`. An empty summary is omitted.
pub fn build_project_payload(name: &str, summary: &str) -> serde_json::Value {
    let summary = summary.trim();
    if summary.is_empty() {
        serde_json::json!({ "name": name })
    } else {
        serde_json::json!({ "name": name, "summary": summary })
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <ProjectsView/>
        </DashboardLayout>
    }
}

#[component]
fn ProjectsView() -> impl IntoView {
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_projects().await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                match fetched {
                    Some(items) => projects.set(items),
                    None => error.set(Some("Could not load projects.".to_owned())),
                }
                loading.set(false);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let show_create = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let on_create = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |project: Project| {
        projects.update(|items| items.push(project));
        show_create.set(false);
    });
    let on_delete_request = Callback::new(move |id: String| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_deleted = Callback::new(move |id: String| {
        projects.update(|items| items.retain(|p| p.id != id));
        delete_target.set(None);
    });

    view! {
        <div class="projects-view">
            <div class="projects-view__header">
                <h1>"Projects"</h1>
                <button class="projects-view__new" on:click=on_create>
                    "+ New project"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="projects-view__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <Show
                    when=move || !projects.get().is_empty()
                    fallback=move || {
                        view! {
                            <p class="projects-view__empty">
                                "No projects yet. Create one to start matching."
                            </p>
                        }
                    }
                >
                    <div class="projects-view__cards">
                        {move || {
                            projects
                                .get()
                                .into_iter()
                                .map(|project| {
                                    view! {
                                        <ProjectCard project=project on_delete=on_delete_request/>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
            <Show when=move || show_create.get()>
                <CreateProjectDialog on_cancel=on_create_cancel on_created=on_created/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteProjectDialog
                    target=delete_target
                    on_cancel=on_delete_cancel
                    on_deleted=on_deleted
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating a project.
#[component]
fn CreateProjectDialog(
    on_cancel: Callback<()>,
    on_created: Callback<Project>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let summary = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_project_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let payload = build_project_payload(&name_value, &summary.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&payload).await {
                    Ok(project) => on_created.run(project),
                    Err(e) => {
                        info.set(format!("Create failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name_value;
        }
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=submit>
                <h2>"New project"</h2>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Project name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="dialog__input"
                    placeholder="One-line summary (optional)"
                    prop:value=move || summary.get()
                    on:input=move |ev| summary.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || busy.get()>
                        "Create"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Confirmation dialog for deleting a project.
#[component]
fn DeleteProjectDialog(
    target: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_deleted: Callback<String>,
) -> impl IntoView {
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let confirm = move |_| {
        if busy.get() {
            return;
        }
        let Some(project_id) = target.get() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_project(&project_id).await {
                Ok(()) => on_deleted.run(project_id),
                Err(e) => {
                    info.set(format!("Delete failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = project_id;
        }
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>"Delete project?"</h2>
                <p>"This removes the project and its matches. There is no undo."</p>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="dialog__danger"
                        on:click=confirm
                        disabled=move || busy.get()
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

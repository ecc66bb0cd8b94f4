//! Card component for project list items on the dashboard.

use leptos::prelude::*;

use crate::net::types::Project;

/// A card representing one fundraising project.
#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let Project { id, name, summary, stage, created_at } = project;
    let stage_label = stage.unwrap_or_default();
    let has_stage = !stage_label.is_empty();
    let created_label = created_at.unwrap_or_default();
    let has_created = !created_label.is_empty();

    let on_delete_click = Callback::new({
        let id = id.clone();
        move |()| {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(id.clone());
            }
        }
    });

    view! {
        <div class="project-card">
            <div class="project-card__header">
                <span class="project-card__name">{name}</span>
                <Show when=move || has_stage>
                    <span class="project-card__stage">{stage_label.clone()}</span>
                </Show>
                <button
                    class="project-card__delete"
                    on:click=move |_| on_delete_click.run(())
                    title="Delete project"
                    aria-label="Delete project"
                >
                    "✕"
                </button>
            </div>
            <p class="project-card__summary">{summary.unwrap_or_default()}</p>
            <Show when=move || has_created>
                <span class="project-card__created">{created_label.clone()}</span>
            </Show>
        </div>
    }
}

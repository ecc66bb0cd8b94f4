//! Messages page: conversation list, thread view, composer.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::types::{Conversation, Message};

/// Validate and normalize a message draft.
///
/// # Errors
///
/// Returns a user-facing message when the draft is effectively empty.
pub fn validate_message_body(body: &str) -> Result<String, &'static str> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Write a message first.");
    }
    Ok(body.to_owned())
}

/// List-preview line for a conversation.
pub fn conversation_preview(convo: &Conversation) -> String {
    convo
        .last_message
        .clone()
        .unwrap_or_else(|| "No messages yet".to_owned())
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <MessagesView/>
        </DashboardLayout>
    }
}

#[component]
fn MessagesView() -> impl IntoView {
    let conversations = RwSignal::new(Vec::<Conversation>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_conversations().await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                conversations.set(fetched.unwrap_or_default());
                loading.set(false);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="messages-view">
            <aside class="messages-view__list">
                <h1>"Messages"</h1>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading conversations..."</p> }
                >
                    <Show
                        when=move || !conversations.get().is_empty()
                        fallback=move || {
                            view! {
                                <p class="messages-view__empty">
                                    "No conversations yet. Matches appear here."
                                </p>
                            }
                        }
                    >
                        <ul class="messages-view__items">
                            {move || {
                                conversations
                                    .get()
                                    .into_iter()
                                    .map(|convo| {
                                        let id = convo.id.clone();
                                        let active_id = convo.id.clone();
                                        view! {
                                            <li
                                                class="messages-view__item"
                                                class:messages-view__item--active=move || {
                                                    selected.get().as_deref() == Some(active_id.as_str())
                                                }
                                                class:messages-view__item--unread=convo.unread
                                                on:click=move |_| selected.set(Some(id.clone()))
                                            >
                                                <span class="messages-view__counterpart">
                                                    {convo.counterpart_name.clone()}
                                                </span>
                                                <span class="messages-view__preview">
                                                    {conversation_preview(&convo)}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </aside>
            <Show
                when=move || selected.get().is_some()
                fallback=move || {
                    view! {
                        <section class="messages-view__thread messages-view__thread--empty">
                            <p>"Select a conversation."</p>
                        </section>
                    }
                }
            >
                <ThreadView conversation_id=Signal::derive(move || {
                    selected.get().unwrap_or_default()
                })/>
            </Show>
        </div>
    }
}

/// One conversation's messages plus the composer.
#[component]
fn ThreadView(conversation_id: Signal<String>) -> impl IntoView {
    let messages = RwSignal::new(Vec::<Message>::new());
    let loading = RwSignal::new(true);
    let draft = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Reload whenever the selected conversation changes.
    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            let id = conversation_id.get();
            loading.set(true);
            let alive_task = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_messages(&id).await;
                if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    messages.set(fetched.unwrap_or_default());
                    loading.set(false);
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_message_body(&draft.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let id = conversation_id.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_message(&id, &body).await {
                    Ok(message) => {
                        messages.update(|items| items.push(message));
                        draft.set(String::new());
                    }
                    Err(e) => info.set(format!("Send failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (body, conversation_id.get());
        }
    };

    view! {
        <section class="messages-view__thread">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading messages..."</p> }
            >
                <ul class="messages-view__messages">
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|message| {
                                view! {
                                    <li
                                        class="messages-view__message"
                                        class:messages-view__message--own=message.is_own
                                    >
                                        <span class="messages-view__sender">
                                            {message.sender_name.clone()}
                                        </span>
                                        <p class="messages-view__body">{message.body.clone()}</p>
                                        <span class="messages-view__time">
                                            {message.sent_at.clone().unwrap_or_default()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
            <form class="messages-view__composer" on:submit=on_send>
                <input
                    class="messages-view__input"
                    type="text"
                    placeholder="Write a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="messages-view__info">{move || info.get()}</p>
            </Show>
        </section>
    }
}

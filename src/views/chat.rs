use crate::api::ChatClient;
use crate::carousel::{CarouselState, ROTATION_INTERVAL};
use crate::interpret::interpret;
use crate::store::ConversationStore;
use crate::types::{ChatMessage, Role, SideContentKind};
use dioxus::document;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const WELCOME_MESSAGE: &str =
    "Welcome! Ask me anything about our services, pricing, or how other teams use us.";

/// Canned openers rendered under the composer. Picking one only stages the
/// draft; the user still sends it themselves.
const QUICK_REPLIES: &[(&str, &str)] = &[
    ("Services", "What services do you offer?"),
    ("Pricing", "Tell me about your pricing plans"),
    ("Case studies", "Can you share some customer case studies?"),
    ("Contact", "How do I get in touch with your team?"),
];

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const SCROLL_TO_LATEST_JS: &str =
    "const el = document.getElementById('chat-list'); if (el) { el.scrollTop = el.scrollHeight; }";

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn ChatView() -> Element {
    let mut store = use_signal(|| ConversationStore::with_greeting(WELCOME_MESSAGE));
    let client = use_signal(ChatClient::from_env);

    // The store bumps its revision on every message-list change; reacting to
    // it here is what keeps the newest message in view.
    use_effect(move || {
        let _revision = store.read().revision();
        let _ = document::eval(SCROLL_TO_LATEST_JS);
    });

    let mut send_message = move |text: String| {
        let Some(turn) = store.write().submit(&text) else {
            return;
        };
        spawn(async move {
            let chat_client = client.peek().clone();
            let outcome = match chat_client {
                Ok(client) => client
                    .send(&turn.query)
                    .await
                    .map(|answer| interpret(&answer, turn.topic)),
                Err(err) => Err(err),
            };
            store.write().ingest(outcome);
        });
    };

    let snapshot = store.read().clone();
    let pending = snapshot.is_pending();
    let draft = snapshot.draft().to_string();
    let suggestions = snapshot.suggestions().to_vec();

    rsx! {
        div { id: "chat-list", class: "chat-list",
            for msg in snapshot.messages().iter() {
                MessageRow { message: msg.clone() }
            }
            if pending {
                div { class: "message-row assistant",
                    div { class: "bubble assistant", LoadingDots {} }
                }
            }
        }

        div { class: "composer",
            div { class: "quick-replies",
                for (label, content) in QUICK_REPLIES.iter() {
                    button {
                        class: "chip", r#type: "button",
                        onclick: move |_| store.write().set_draft(*content),
                        "{label}"
                    }
                }
            }
            if !suggestions.is_empty() {
                div { class: "suggested-questions",
                    for question in suggestions.iter() {
                        button {
                            class: "chip", r#type: "button",
                            onclick: {
                                let question = question.clone();
                                move |_| store.write().select_suggestion(question.clone())
                            },
                            "{question}"
                        }
                    }
                }
            }
            div { class: "input-group",
                input {
                    r#type: "text", placeholder: "Type a message...",
                    value: "{draft}",
                    oninput: move |ev| store.write().set_draft(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            let text = store.read().draft().to_string();
                            send_message(text);
                        }
                    },
                    autofocus: true,
                }
                button {
                    class: "btn-primary", r#type: "button",
                    disabled: pending || draft.trim().is_empty(),
                    onclick: move |_| {
                        let text = store.read().draft().to_string();
                        send_message(text);
                    },
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    rsx! {
        div { class: "message-row {role_class}",
            div { class: "message-stack",
                div { class: "bubble {role_class}", "{message.content}" }
                if let Some(kind) = message.side_content {
                    SideContentCarousel { kind }
                }
                if let Some(ts) = format_message_timestamp(message.created_at) {
                    div {
                        class: format_args!(
                            "message-timestamp {}",
                            match message.role { Role::User => "align-end", Role::Assistant => "" }
                        ),
                        "{ts}"
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingDots() -> Element {
    rsx! {
        div { class: "loading-dots",
            div { class: "dot" }
            div { class: "dot" }
            div { class: "dot" }
        }
    }
}

/// One independent auto-advancing carousel per annotated message.
///
/// The timer task is tied to the component scope, so unmounting the carousel
/// cancels it; no tick can touch a destroyed instance. A manual dot selection
/// bumps the phase counter, which turns the in-flight sleep into a no-op and
/// restarts the rotation from the chosen slide.
#[component]
fn SideContentCarousel(kind: SideContentKind) -> Element {
    let mut state = use_signal(move || CarouselState::for_kind(kind));
    let mut phase = use_signal(|| 0u64);

    use_effect(move || {
        spawn(async move {
            loop {
                let epoch = *phase.peek();
                tokio::time::sleep(ROTATION_INTERVAL).await;
                if *phase.peek() == epoch {
                    state.write().tick();
                }
            }
        });
    });

    let snapshot = state.read().clone();
    let active = *snapshot.active_item();

    rsx! {
        div { class: "carousel",
            img { src: "{active.source}", alt: "{active.caption}" }
            div { class: "carousel-caption", "{active.caption}" }
            div { class: "carousel-dots",
                for index in 0..snapshot.items().len() {
                    button {
                        r#type: "button",
                        class: if index == snapshot.active_index() { "carousel-dot active" } else { "carousel-dot" },
                        onclick: move |_| {
                            state.write().select(index);
                            *phase.write() += 1;
                        },
                    }
                }
            }
        }
    }
}

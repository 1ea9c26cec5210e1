//! Home Page
//!
//! Chat view: transcript from the locally cached message list, an input
//! box, and a clear-history action. Redirects to login when signed out.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::{ChatMessage, ChatState, MessageRole, SessionState, UiState};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        {move || {
            if session.is_logged_in() {
                view! { <ChatView /> }.into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// The chat transcript and composer
#[component]
fn ChatView() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let chat = use_context::<ChatState>().expect("ChatState not found");
    let ui = use_context::<UiState>().expect("UiState not found");

    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() || sending.get_untracked() {
            return;
        }
        set_draft.set(String::new());
        chat.append(ChatMessage::user(text.clone()));

        set_sending.set(true);
        spawn_local(async move {
            match api::send_message(session, ui, &text).await {
                Ok(reply) => {
                    chat.append(ChatMessage::bot(reply));
                }
                Err(e) => {
                    ui.show_error(&e);
                }
            }
            set_sending.set(false);
        });
    };

    let clear_history = move |_| {
        chat.clear();
        ui.show_success("Chat history cleared");
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Chat"</h1>
                    <p class="text-gray-400 mt-1">"Ask the campus assistant anything"</p>
                </div>
                <button
                    on:click=clear_history
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Clear history"
                </button>
            </div>

            // Transcript
            <div class="bg-gray-800 rounded-xl p-4 min-h-[50vh] space-y-3">
                {move || {
                    let messages = chat.messages.get();
                    if messages.is_empty() {
                        view! {
                            <div class="flex flex-col items-center justify-center py-16 text-center">
                                <div class="text-5xl mb-4">"💬"</div>
                                <p class="text-gray-400">"No messages yet. Say hello!"</p>
                            </div>
                        }.into_view()
                    } else {
                        messages.iter().map(|message| view! {
                            <MessageBubble message=message.clone() />
                        }).collect_view()
                    }
                }}

                {move || {
                    if sending.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-gray-400 text-sm">
                                <InlineLoading />
                                <span>"Assistant is typing..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Composer
            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=move |_| send()
                    disabled=move || sending.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// A single transcript entry, aligned by sender
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (align, bubble) = match message.role {
        MessageRole::User => ("flex justify-end", "bg-primary-600 text-white"),
        MessageRole::Bot => ("flex justify-start", "bg-gray-700 text-gray-100"),
    };

    let time = chrono::DateTime::from_timestamp_millis(message.timestamp)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default();

    view! {
        <div class=align>
            <div class=format!("max-w-[75%] rounded-lg px-4 py-2 {}", bubble)>
                <p class="whitespace-pre-wrap break-words">{message.content}</p>
                <p class="text-xs opacity-60 mt-1 text-right">{time}</p>
            </div>
        </div>
    }
}

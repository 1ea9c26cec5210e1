//! Login Page
//!
//! Username/password form that exchanges credentials for a session token.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::LoadingOverlay;
use crate::state::{SessionState, UiState};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let ui = use_context::<UiState>().expect("UiState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            ui.show_error("Enter a username and password");
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(session, ui, &user, &pass).await {
                Ok(token) => {
                    session.set_token(&token);
                    ui.show_success("Welcome back!");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    ui.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold">"Log in"</h1>
                <p class="text-gray-400 mt-1">"Sign in to chat with the assistant"</p>
            </div>

            <LoadingOverlay loading=submitting>
                <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>

                    <p class="text-sm text-gray-400 text-center">
                        "No account yet? "
                        <A href="/register" class="text-primary-400 hover:underline">
                            "Register"
                        </A>
                    </p>
                </form>
            </LoadingOverlay>
        </div>
    }
}

//! Navigation Component
//!
//! Header navigation bar with brand, links, and logout.

use leptos::*;
use leptos_router::*;

use crate::state::{SessionState, UiState};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let ui = use_context::<UiState>().expect("UiState not found");

    let navigate = use_navigate();
    let logout = move |_: ev::MouseEvent| {
        session.clear_token();
        ui.show_success("Logged out");
        navigate("/login", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💬"</span>
                        <span class="text-xl font-bold text-white">"DCU Chat"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            if session.is_logged_in() {
                                view! {
                                    <NavLink href="/" label="Chat" />
                                    <button
                                        on:click=logout.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        "Log out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Log in" />
                                    <NavLink href="/register" label="Register" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

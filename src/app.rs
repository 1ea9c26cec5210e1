//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Home, Login, Register};
use crate::state::{provide_stores, ChatState, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide stores to all components
    provide_stores();

    // Restore persisted state before the first render
    let session = use_context::<SessionState>().expect("SessionState not found");
    let chat = use_context::<ChatState>().expect("ChatState not found");
    session.initialize();
    chat.load();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Send the user back to login when the backend invalidates the session
                <SessionRedirect />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/register" view=Register />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with session status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Watches the session's expiry flag and navigates to the login page
#[component]
fn SessionRedirect() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    create_effect(move |_| {
        if session.expired.get() {
            session.expired.set(false);
            navigate("/login", Default::default());
        }
    });

    view! {}
}

/// Footer component showing session and cache status
#[component]
fn Footer() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let chat = use_context::<ChatState>().expect("ChatState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Session status
                <div class="flex items-center space-x-2">
                    {move || {
                        if session.is_logged_in() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Signed in"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                    <span>"Signed out"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Cached message count
                <div class="text-gray-400">
                    {move || {
                        let count = chat.messages.with(|m| m.len());
                        if count == 1 {
                            "1 message".to_string()
                        } else {
                            format!("{} messages", count)
                        }
                    }}
                </div>

                // Cache expiry note
                <div class="text-gray-500">"History clears at midnight"</div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Chat"
            </A>
        </div>
    }
}

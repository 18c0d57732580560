//! App Root Component
//!
//! Main application component with routing, the authentication guard and
//! global providers.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::components::Toast;
use crate::pages::{ChatViewer, Config, Dashboard, Login};
use crate::state::global::{provide_global_state, GlobalState};
use crate::storage::BrowserStore;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state (with the browser-backed settings store) to all
    // components
    provide_global_state(Rc::new(BrowserStore));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <main>
                    <Routes>
                        <Route path="/login" view=Login />
                        <Route path="/" view=|| view! {
                            <RequireAuth><Dashboard /></RequireAuth>
                        } />
                        <Route path="/dashboard" view=|| view! {
                            <RequireAuth><Dashboard /></RequireAuth>
                        } />
                        <Route path="/config" view=|| view! {
                            <RequireAuth><Config /></RequireAuth>
                        } />
                        <Route path="/chat/:client_id" view=|| view! {
                            <RequireAuth><ChatViewer /></RequireAuth>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Redirects to the login page when the session flag is not set
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.store.is_authenticated() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Página não encontrada"</h1>
            <p class="text-gray-400 mb-6">"A página que você procura não existe."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Ir para a Dashboard"
            </A>
        </div>
    }
}

//! Login Page
//!
//! Gate in front of the dashboard. Authentication is a session flag only;
//! any non-empty credentials pass.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (user, set_user) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if user.get().trim().is_empty() || password.get().trim().is_empty() {
            state.show_error("Preencha todos os campos obrigatórios");
            return;
        }

        state.store.set_authenticated(true);
        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md border border-gray-700">
                <div class="flex items-center space-x-3 mb-6">
                    <span class="text-2xl">"💬"</span>
                    <div>
                        <h1 class="text-xl font-bold">"Agent Analytics Dashboard"</h1>
                        <p class="text-sm text-gray-400">"Relatórios de conversas n8n"</p>
                    </div>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Usuário"</label>
                        <input
                            type="text"
                            prop:value=move || user.get()
                            on:input=move |ev| set_user.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Senha"</label>
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
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                               font-semibold transition-colors"
                    >
                        "Entrar"
                    </button>
                </form>
            </div>
        </div>
    }
}

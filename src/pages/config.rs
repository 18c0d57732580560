//! Configuration Page
//!
//! Controlled form over the persisted [`DbConfig`]: PostgreSQL connection
//! credentials, backend API URL and conversation table column mapping.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::global::GlobalState;
use crate::storage::DbConfig;

/// Derive a (value, setter) pair for one form field of the config signal.
fn field_lens(
    config: RwSignal<DbConfig>,
    get: fn(&DbConfig) -> &String,
    set: fn(&mut DbConfig, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || config.with(|c| get(c).clone()));
    let on_input = Callback::new(move |v| config.update(|c| set(c, v)));
    (value, on_input)
}

/// Configuration page component
#[component]
pub fn Config() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    // Saved blob pre-fills the form; defaults otherwise (port 5432).
    let config = create_rw_signal(state.store.load_config().unwrap_or_default());

    let (host, set_host) = field_lens(config, |c| &c.host, |c, v| c.host = v);
    let (port, set_port) = field_lens(config, |c| &c.port, |c, v| c.port = v);
    let (user, set_user) = field_lens(config, |c| &c.user, |c, v| c.user = v);
    let (password, set_password) = field_lens(config, |c| &c.password, |c, v| c.password = v);
    let (database, set_database) = field_lens(config, |c| &c.database, |c, v| c.database = v);
    let (table, set_table) = field_lens(config, |c| &c.table, |c, v| c.table = v);
    let (api_url, set_api_url) = field_lens(config, |c| &c.api_url, |c, v| c.api_url = v);
    let (date_column, set_date_column) =
        field_lens(config, |c| &c.date_column, |c, v| c.date_column = v);
    let (question_column, set_question_column) =
        field_lens(config, |c| &c.question_column, |c, v| c.question_column = v);
    let (answer_column, set_answer_column) =
        field_lens(config, |c| &c.answer_column, |c, v| c.answer_column = v);
    let (client_column, set_client_column) =
        field_lens(config, |c| &c.client_column, |c, v| c.client_column = v);
    let (status_column, set_status_column) =
        field_lens(config, |c| &c.status_column, |c, v| c.status_column = v);

    // Client-only check, no network call
    let state_for_test = state.clone();
    let test_connection = move |_| {
        match config.get_untracked().validate_connection_fields() {
            Ok(()) => state_for_test.show_success("Conexão testada com sucesso!"),
            Err(_) => state_for_test.show_error("Preencha todos os campos obrigatórios"),
        }
    };

    let state_for_save = state;
    let navigate_for_save = navigate.clone();
    let save = move |_| {
        let current = config.get_untracked();

        if current.validate_for_save().is_err() {
            state_for_save.show_error("Preencha todos os campos obrigatórios");
            return;
        }

        match state_for_save.store.save_config(&current) {
            Ok(()) => {
                state_for_save.show_success("Configuração salva com sucesso!");
                navigate_for_save("/dashboard", Default::default());
            }
            Err(e) => {
                state_for_save.show_error(&format!("Falha ao salvar configuração: {e}"));
            }
        }
    };

    view! {
        <div class="container mx-auto px-6 py-8 max-w-4xl space-y-6">
            <button
                on:click=move |_| navigate("/dashboard", Default::default())
                class="px-4 py-2 text-gray-300 hover:text-white hover:bg-gray-700 rounded-lg transition-colors"
            >
                "← Voltar à Dashboard"
            </button>

            <div class="bg-gray-800 rounded-xl p-6 space-y-8">
                <div>
                    <h1 class="text-2xl font-bold">"Configuração do Banco de Dados"</h1>
                    <p class="text-gray-400 mt-1">"Configure a conexão PostgreSQL e mapeie as colunas"</p>
                </div>

                // Connection credentials
                <section class="space-y-4">
                    <h2 class="text-lg font-semibold">"Credenciais de Conexão"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Field label="Host *" placeholder="localhost" value=host on_input=set_host />
                        <Field label="Porta *" placeholder="5432" value=port on_input=set_port />
                        <Field label="Usuário *" placeholder="postgres" value=user on_input=set_user />
                        <Field
                            label="Senha *"
                            placeholder="••••••••"
                            password=true
                            value=password
                            on_input=set_password
                        />
                        <Field label="Nome do Banco *" placeholder="agent_db" value=database on_input=set_database />
                        <Field label="Nome da Tabela *" placeholder="conversations" value=table on_input=set_table />
                    </div>
                </section>

                // Backend API URL
                <section class="space-y-4 pt-6 border-t border-gray-700">
                    <h2 class="text-lg font-semibold">"URL da API Backend"</h2>
                    <Field
                        label="URL da API *"
                        placeholder="http://localhost:3000"
                        value=api_url
                        on_input=set_api_url
                    />
                    <p class="text-sm text-gray-400">
                        "URL completa da sua API backend que conecta ao banco de dados PostgreSQL"
                    </p>
                </section>

                // Column mapping
                <section class="space-y-4 pt-6 border-t border-gray-700">
                    <h2 class="text-lg font-semibold">"Mapeamento de Colunas"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <Field label="Coluna de Data" placeholder="created_at" value=date_column on_input=set_date_column />
                        <Field label="Coluna de Pergunta" placeholder="question" value=question_column on_input=set_question_column />
                        <Field label="Coluna de Resposta" placeholder="answer" value=answer_column on_input=set_answer_column />
                        <Field label="Coluna de Cliente" placeholder="client_name" value=client_column on_input=set_client_column />
                        <Field label="Coluna de Status do Ticket" placeholder="status" value=status_column on_input=set_status_column />
                    </div>
                </section>

                // Actions
                <div class="flex space-x-3 pt-6">
                    <button
                        on:click=test_connection
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Testar Conexão"
                    </button>
                    <button
                        on:click=save
                        class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Salvar Configuração"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Labeled text input bound to one config field
#[component]
fn Field(
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)]
    password: bool,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=if password { "password" } else { "text" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

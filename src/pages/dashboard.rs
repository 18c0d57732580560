//! Dashboard Page
//!
//! Metrics overview and attended client list for the selected period.
//!
//! A load cycle issues both API requests inside one task and settles once,
//! after the second result arrives; there is never a half-loaded view. Each
//! cycle carries a generation token so a response from a superseded cycle
//! (period changed mid-flight) is discarded instead of clobbering fresher
//! state.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{self, ApiError};
use crate::components::{Loading, MetricCard, StatusBadge};
use crate::state::global::{Client, DashboardView, GlobalState, MetricsSummary, PeriodFilter};

/// Error panel heading
const LOAD_ERROR_HEADING: &str = "Erro ao carregar os dados";

/// Detail line when a failed request carried no message of its own; must
/// stay distinct from the heading so the panel never repeats itself
const LOAD_ERROR_FALLBACK: &str = "Não foi possível contatar o servidor";

/// Failure message for a settled load cycle: the first request's error
/// wins, then the second's, then the generic fallback.
fn load_failure_message(summary: Option<ApiError>, clients: Option<ApiError>) -> String {
    summary
        .or(clients)
        .map(|e| e.to_string())
        .unwrap_or_else(|| LOAD_ERROR_FALLBACK.to_string())
}

/// Run one load cycle for the given period.
fn start_load(state: GlobalState, period: PeriodFilter) {
    let token = state.begin_load();
    let base = api::resolve_api_base(state.store.as_ref());

    spawn_local(async move {
        let summary = api::fetch_summary(&base, period).await;
        let clients = api::fetch_clients(&base, period).await;

        // A newer cycle started while these were in flight; it owns the
        // loading flag and the data signals now.
        if !state.is_current(token) {
            return;
        }

        match (summary, clients) {
            (Ok(summary), Ok(clients)) => {
                state.summary.set(Some(summary));
                state.clients.set(clients);
                state.load_error.set(None);
            }
            (summary, clients) => {
                // Either request failing fails the whole cycle.
                let message = load_failure_message(summary.err(), clients.err());

                web_sys::console::error_1(
                    &format!("Dashboard load failed: {message}").into(),
                );

                state.summary.set(None);
                state.clients.set(Vec::new());
                state.load_error.set(Some(message));
            }
        }

        state.loading.set(false);
    });
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    // Load on mount and on every period change
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let period = state_for_effect.period.get();
        start_load(state_for_effect.clone(), period);
    });

    let state_for_retry = state.clone();
    let retry = Callback::new(move |_: ()| {
        let period = state_for_retry.period.get_untracked();
        start_load(state_for_retry.clone(), period);
    });

    let state_for_logout = state.clone();
    let navigate_for_logout = navigate.clone();
    let logout = move |_| {
        state_for_logout.store.set_authenticated(false);
        navigate_for_logout("/login", Default::default());
    };

    let navigate_for_config = navigate;
    let period = state.period;
    let state_for_view = state;

    view! {
        <div class="container mx-auto px-6 py-8 space-y-8">
            // Page header
            <header class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"💬"</span>
                    <div>
                        <h1 class="text-xl font-bold">"Agent Analytics Dashboard"</h1>
                        <p class="text-sm text-gray-400">"Relatórios de conversas n8n"</p>
                    </div>
                </div>

                <div class="flex items-center space-x-3">
                    <button
                        on:click=move |_| navigate_for_config("/config", Default::default())
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Configurações"
                    </button>
                    <button
                        on:click=logout
                        class="px-4 py-2 text-gray-300 hover:text-white hover:bg-gray-700 rounded-lg transition-colors"
                    >
                        "Sair"
                    </button>
                </div>
            </header>

            // Period selector
            <div class="flex justify-end">
                <select
                    prop:value=move || period.get().query_value()
                    on:change=move |ev| {
                        if let Some(selected) = PeriodFilter::from_query(&event_target_value(&ev)) {
                            period.set(selected);
                        }
                    }
                    class="bg-gray-700 rounded-lg px-4 py-2 w-[200px]
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {PeriodFilter::ALL.into_iter().map(|p| view! {
                        <option value=p.query_value()>{p.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            // One of the four render states
            {move || {
                match state_for_view.dashboard_view() {
                    DashboardView::Loading => view! { <Loading /> }.into_view(),
                    DashboardView::Error(message) => view! {
                        <ErrorPanel message=message retry=retry />
                    }.into_view(),
                    DashboardView::Empty => view! {
                        <div class="bg-gray-800 rounded-xl p-12 text-center">
                            <p class="text-gray-400">
                                "Nenhum cliente atendido no período selecionado."
                            </p>
                        </div>
                    }.into_view(),
                    DashboardView::Populated { summary, clients } => view! {
                        <SummaryCards summary=summary period=period.get_untracked() />
                        <ClientTable clients=clients />
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// Error panel with manual retry
#[component]
fn ErrorPanel(
    #[prop(into)]
    message: String,
    retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-12 text-center space-y-4">
            <div class="text-4xl">"⚠️"</div>
            <p class="text-red-400 font-medium">{LOAD_ERROR_HEADING}</p>
            <p class="text-gray-400 text-sm">{message}</p>
            <button
                on:click=move |_| retry.call(())
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Tentar novamente"
            </button>
        </div>
    }
}

/// The three-metric summary row
#[component]
fn SummaryCards(summary: MetricsSummary, period: PeriodFilter) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <MetricCard
                title="Clientes Atendidos"
                value=summary.clients_served
                subtitle=period.subtitle()
            />
            <MetricCard
                title="Total de Mensagens"
                value=summary.total_messages
                subtitle="enviadas e recebidas"
            />
            <MetricCard
                title="Tickets Abertos"
                value=summary.open_tickets
                subtitle="aguardando resolução"
            />
        </div>
    }
}

/// Attended clients table, in server order
#[component]
fn ClientTable(clients: Vec<Client>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Clientes Atendidos"</h2>

            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead>
                        <tr class="border-b border-gray-700 text-left text-sm text-gray-400">
                            <th class="py-3 px-4 font-semibold">"Nome do Cliente"</th>
                            <th class="py-3 px-4 font-semibold">"Total de Mensagens"</th>
                            <th class="py-3 px-4 font-semibold">"Status"</th>
                            <th class="py-3 px-4 font-semibold">"Última Interação"</th>
                            <th class="py-3 px-4 font-semibold text-right">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {clients.into_iter().map(|client| {
                            let navigate = navigate.clone();
                            let chat_path = format!("/chat/{}", client.id);

                            view! {
                                <tr class="border-b border-gray-700 hover:bg-gray-700/50 transition-colors">
                                    <td class="py-4 px-4 font-medium">{client.name}</td>
                                    <td class="py-4 px-4">{client.messages}</td>
                                    <td class="py-4 px-4">
                                        <StatusBadge status=client.status />
                                    </td>
                                    <td class="py-4 px-4 text-sm text-gray-400">
                                        {client.last_interaction}
                                    </td>
                                    <td class="py-4 px-4 text-right">
                                        <button
                                            on:click=move |_| navigate(&chat_path, Default::default())
                                            class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                                   text-sm font-medium transition-colors"
                                        >
                                            "Visualizar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_wins() {
        let message = load_failure_message(
            Some(ApiError::Status(500)),
            Some(ApiError::Network("connection refused".to_string())),
        );
        assert_eq!(message, ApiError::Status(500).to_string());
    }

    #[test]
    fn test_clients_failure_reported_when_summary_succeeded() {
        let message = load_failure_message(None, Some(ApiError::Status(500)));
        assert_eq!(message, ApiError::Status(500).to_string());
    }

    #[test]
    fn test_fallback_differs_from_panel_heading() {
        let message = load_failure_message(None, None);
        assert_eq!(message, LOAD_ERROR_FALLBACK);
        assert_ne!(message, LOAD_ERROR_HEADING);
    }
}

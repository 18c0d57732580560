//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the pure reduction
//! of the dashboard's four render states.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::storage::SharedStore;

/// Reporting window driving both dashboard API requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    #[default]
    Today,
    Last7Days,
    Last30Days,
}

impl PeriodFilter {
    /// All filters, in selector order
    pub const ALL: [PeriodFilter; 3] = [
        PeriodFilter::Today,
        PeriodFilter::Last7Days,
        PeriodFilter::Last30Days,
    ];

    /// Value sent as the `period` query parameter
    pub fn query_value(self) -> &'static str {
        match self {
            PeriodFilter::Today => "today",
            PeriodFilter::Last7Days => "7days",
            PeriodFilter::Last30Days => "30days",
        }
    }

    /// Parse a selector value back into a filter
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "today" => Some(PeriodFilter::Today),
            "7days" => Some(PeriodFilter::Last7Days),
            "30days" => Some(PeriodFilter::Last30Days),
            _ => None,
        }
    }

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            PeriodFilter::Today => "Hoje",
            PeriodFilter::Last7Days => "Últimos 7 dias",
            PeriodFilter::Last30Days => "Último mês",
        }
    }

    /// Metric card subtitle for the selected window
    pub fn subtitle(self) -> &'static str {
        match self {
            PeriodFilter::Today => "hoje",
            PeriodFilter::Last7Days => "nos últimos 7 dias",
            PeriodFilter::Last30Days => "no último mês",
        }
    }
}

/// Aggregated metrics for the selected period
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub clients_served: u32,
    pub total_messages: u32,
    pub open_tickets: u32,
}

/// One attended client row, in server order
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub messages: u32,
    pub status: ClientStatus,
    pub last_interaction: String,
}

/// Open/closed state of a client's support ticket.
///
/// The backend historically emitted the Portuguese values, so both
/// spellings decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[serde(alias = "aberto")]
    Open,
    #[serde(alias = "fechado")]
    Closed,
}

impl ClientStatus {
    /// Badge label
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Open => "aberto",
            ClientStatus::Closed => "fechado",
        }
    }

    pub fn is_open(self) -> bool {
        self == ClientStatus::Open
    }
}

/// The four mutually exclusive dashboard render states
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    /// A load cycle is in flight
    Loading,
    /// At least one request of the cycle failed
    Error(String),
    /// Load succeeded but the period has no attended clients
    Empty,
    /// Metrics and a non-empty client list are available
    Populated {
        summary: MetricsSummary,
        clients: Vec<Client>,
    },
}

/// Reduce the loader tuple into one render state.
///
/// Loading always wins; an error hides any previously held data; a
/// successful load with zero clients is `Empty`, never `Error`.
pub fn reduce_dashboard_view(
    loading: bool,
    error: Option<&str>,
    summary: Option<&MetricsSummary>,
    clients: &[Client],
) -> DashboardView {
    if loading {
        return DashboardView::Loading;
    }
    if let Some(message) = error {
        return DashboardView::Error(message.to_string());
    }
    match summary {
        Some(summary) if !clients.is_empty() => DashboardView::Populated {
            summary: *summary,
            clients: clients.to_vec(),
        },
        _ => DashboardView::Empty,
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Selected reporting window
    pub period: RwSignal<PeriodFilter>,
    /// Metrics summary from the last successful load
    pub summary: RwSignal<Option<MetricsSummary>>,
    /// Client list from the last successful load
    pub clients: RwSignal<Vec<Client>>,
    /// Whether a load cycle is in flight
    pub loading: RwSignal<bool>,
    /// Failure message of the last load cycle, if it failed
    pub load_error: RwSignal<Option<String>>,
    /// Monotonic load-cycle token; stale cycles never commit
    load_generation: RwSignal<u64>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Persisted settings port
    pub store: SharedStore,
}

/// Provide global state to the component tree
pub fn provide_global_state(store: SharedStore) {
    let state = GlobalState {
        period: create_rw_signal(PeriodFilter::default()),
        summary: create_rw_signal(None),
        clients: create_rw_signal(Vec::new()),
        // Starts true so the first paint is the spinner, not a flash of Empty
        loading: create_rw_signal(true),
        load_error: create_rw_signal(None),
        load_generation: create_rw_signal(0),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        store,
    };

    provide_context(state);
}

impl GlobalState {
    /// Current dashboard render state (reactive)
    pub fn dashboard_view(&self) -> DashboardView {
        reduce_dashboard_view(
            self.loading.get(),
            self.load_error.get().as_deref(),
            self.summary.get().as_ref(),
            &self.clients.get(),
        )
    }

    /// Start a new load cycle and return its token.
    ///
    /// Any cycle holding an older token is superseded from this point on.
    pub fn begin_load(&self) -> u64 {
        let token = self.load_generation.get_untracked() + 1;
        self.load_generation.set(token);
        self.loading.set(true);
        self.load_error.set(None);
        token
    }

    /// Whether the given load-cycle token is still the current one
    pub fn is_current(&self, token: u64) -> bool {
        self.load_generation.get_untracked() == token
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConfig, SettingsStore, StoreError};
    use std::rc::Rc;

    struct NullStore;

    impl SettingsStore for NullStore {
        fn load_config(&self) -> Option<DbConfig> {
            None
        }

        fn save_config(&self, _config: &DbConfig) -> Result<(), StoreError> {
            Ok(())
        }

        fn is_authenticated(&self) -> bool {
            false
        }

        fn set_authenticated(&self, _value: bool) {}
    }

    fn summary() -> MetricsSummary {
        MetricsSummary {
            clients_served: 42,
            total_messages: 286,
            open_tickets: 8,
        }
    }

    fn client(id: u32) -> Client {
        Client {
            id,
            name: format!("Cliente {id}"),
            messages: 3,
            status: ClientStatus::Open,
            last_interaction: "2025-10-17 14:30".to_string(),
        }
    }

    #[test]
    fn test_period_query_values() {
        assert_eq!(PeriodFilter::Today.query_value(), "today");
        assert_eq!(PeriodFilter::Last7Days.query_value(), "7days");
        assert_eq!(PeriodFilter::Last30Days.query_value(), "30days");
        assert_eq!(PeriodFilter::default(), PeriodFilter::Today);
    }

    #[test]
    fn test_period_from_query_round_trip() {
        for period in PeriodFilter::ALL {
            assert_eq!(PeriodFilter::from_query(period.query_value()), Some(period));
        }
        assert_eq!(PeriodFilter::from_query("yesterday"), None);
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let view = reduce_dashboard_view(true, Some("boom"), Some(&summary()), &[client(1)]);
        assert_eq!(view, DashboardView::Loading);
    }

    #[test]
    fn test_error_hides_previous_data() {
        let view = reduce_dashboard_view(
            false,
            Some("HTTP 500"),
            Some(&summary()),
            &[client(1), client(2)],
        );
        assert_eq!(view, DashboardView::Error("HTTP 500".to_string()));
    }

    #[test]
    fn test_zero_clients_is_empty_not_error() {
        let view = reduce_dashboard_view(false, None, Some(&summary()), &[]);
        assert_eq!(view, DashboardView::Empty);
    }

    #[test]
    fn test_populated_requires_summary_and_clients() {
        let clients = vec![client(1), client(2), client(3)];
        let view = reduce_dashboard_view(false, None, Some(&summary()), &clients);
        assert_eq!(
            view,
            DashboardView::Populated {
                summary: summary(),
                clients,
            }
        );

        // Clients without a summary means the load never fully succeeded.
        let view = reduce_dashboard_view(false, None, None, &[client(1)]);
        assert_eq!(view, DashboardView::Empty);
    }

    #[test]
    fn test_newer_load_supersedes_older_token() {
        let runtime = create_runtime();

        let state = GlobalState {
            period: create_rw_signal(PeriodFilter::default()),
            summary: create_rw_signal(None),
            clients: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            load_error: create_rw_signal(None),
            load_generation: create_rw_signal(0),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            store: Rc::new(NullStore),
        };

        let first = state.begin_load();
        assert!(state.is_current(first));

        let second = state.begin_load();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));

        runtime.dispose();
    }

    #[test]
    fn test_client_decodes_legacy_portuguese_status() {
        let raw = r#"{
            "id": 2,
            "name": "Maria Santos",
            "messages": 23,
            "status": "fechado",
            "lastInteraction": "2025-10-17 13:45"
        }"#;

        let decoded: Client = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.status, ClientStatus::Closed);
        assert_eq!(decoded.last_interaction, "2025-10-17 13:45");
    }

    #[test]
    fn test_summary_decodes_camel_case() {
        let raw = r#"{"clientsServed":42,"totalMessages":286,"openTickets":8}"#;
        let decoded: MetricsSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded, summary());
    }
}

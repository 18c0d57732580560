//! HTTP API Client
//!
//! Functions for communicating with the configured analytics REST API.
//! Responses are decoded into the typed dashboard shapes at this boundary;
//! a payload that does not match the schema is a [`ApiError::Decode`], never
//! raw data leaking into rendering.

use gloo_net::http::Request;
use thiserror::Error;

use crate::state::global::{Client, MetricsSummary, PeriodFilter};
use crate::storage::SettingsStore;

/// Default API base URL used when no configuration has been saved
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Resolve the API base URL from the saved configuration.
///
/// The base lives inside the persisted [`crate::storage::DbConfig`] blob;
/// there is no separate key to keep in sync.
pub fn resolve_api_base(store: &dyn SettingsStore) -> String {
    let base = store
        .load_config()
        .as_ref()
        .and_then(|config| config.api_base().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    base.trim_end_matches('/').to_string()
}

/// Errors crossing the API boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (DNS, refused connection, CORS, ...)
    #[error("Falha de rede: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("O servidor respondeu com status {0}")]
    Status(u16),

    /// The response body did not match the expected schema
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

fn endpoint_url(base: &str, path: &str, period: PeriodFilter) -> String {
    format!(
        "{}/api/{}?period={}",
        base.trim_end_matches('/'),
        path,
        period.query_value()
    )
}

/// Fetch the aggregated metrics summary for a period
pub async fn fetch_summary(base: &str, period: PeriodFilter) -> Result<MetricsSummary, ApiError> {
    let response = Request::get(&endpoint_url(base, "metrics", period))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the attended client list for a period, in server order
pub async fn fetch_clients(base: &str, period: PeriodFilter) -> Result<Vec<Client>, ApiError> {
    let response = Request::get(&endpoint_url(base, "clients", period))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConfig, StoreError};

    struct FixedStore(Option<DbConfig>);

    impl SettingsStore for FixedStore {
        fn load_config(&self) -> Option<DbConfig> {
            self.0.clone()
        }

        fn save_config(&self, _config: &DbConfig) -> Result<(), StoreError> {
            Ok(())
        }

        fn is_authenticated(&self) -> bool {
            false
        }

        fn set_authenticated(&self, _value: bool) {}
    }

    #[test]
    fn test_endpoint_url_per_period() {
        assert_eq!(
            endpoint_url("http://localhost:3000", "metrics", PeriodFilter::Today),
            "http://localhost:3000/api/metrics?period=today"
        );
        assert_eq!(
            endpoint_url("http://localhost:3000", "clients", PeriodFilter::Last7Days),
            "http://localhost:3000/api/clients?period=7days"
        );
        assert_eq!(
            endpoint_url("http://localhost:3000/", "clients", PeriodFilter::Last30Days),
            "http://localhost:3000/api/clients?period=30days"
        );
    }

    #[test]
    fn test_resolve_api_base_defaults_without_config() {
        let store = FixedStore(None);
        assert_eq!(resolve_api_base(&store), DEFAULT_API_BASE);
    }

    #[test]
    fn test_resolve_api_base_defaults_with_blank_url() {
        let store = FixedStore(Some(DbConfig::default()));
        assert_eq!(resolve_api_base(&store), DEFAULT_API_BASE);
    }

    #[test]
    fn test_resolve_api_base_strips_trailing_slash() {
        let config = DbConfig {
            api_url: "https://api.example.com/".to_string(),
            ..DbConfig::default()
        };
        let store = FixedStore(Some(config));
        assert_eq!(resolve_api_base(&store), "https://api.example.com");
    }
}

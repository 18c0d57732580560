//! Persisted Settings
//!
//! Database connection / column mapping configuration and the session
//! authentication flag, persisted in browser local storage. All access goes
//! through the [`SettingsStore`] port so pages never touch the key-value
//! store directly.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

/// Local storage key holding the serialized [`DbConfig`] blob
pub const CONFIG_KEY: &str = "dbConfig";

/// Local storage key holding the session authentication flag
pub const AUTH_KEY: &str = "isAuthenticated";

/// Database connection and column mapping settings.
///
/// Serialized as one JSON blob with camelCase keys (`dateColumn`, `apiUrl`,
/// ...) matching what the backend configuration form has always written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table: String,
    pub date_column: String,
    pub question_column: String,
    pub answer_column: String,
    pub client_column: String,
    pub status_column: String,
    pub api_url: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: "5432".to_string(),
            user: String::new(),
            password: String::new(),
            database: String::new(),
            table: String::new(),
            date_column: String::new(),
            question_column: String::new(),
            answer_column: String::new(),
            client_column: String::new(),
            status_column: String::new(),
            api_url: String::new(),
        }
    }
}

impl DbConfig {
    /// Required fields for saving the configuration.
    ///
    /// Returns every missing field so the form can report them all at once.
    pub fn validate_for_save(&self) -> Result<(), ConfigError> {
        let required = [
            ("host", &self.host),
            ("database", &self.database),
            ("user", &self.user),
            ("table", &self.table),
            ("apiUrl", &self.api_url),
        ];

        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields(missing))
        }
    }

    /// Required fields for the client-only "test connection" check.
    pub fn validate_connection_fields(&self) -> Result<(), ConfigError> {
        let required = [
            ("host", &self.host),
            ("database", &self.database),
            ("user", &self.user),
        ];

        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields(missing))
        }
    }

    /// Configured API base URL, if any.
    ///
    /// Single source of truth for the base URL; callers fall back to
    /// [`crate::api::DEFAULT_API_BASE`] when this is `None`.
    pub fn api_base(&self) -> Option<&str> {
        let url = self.api_url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Configuration validation errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// One or more required fields are empty
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Local storage is blocked or unavailable in this browsing context
    #[error("local storage is not available")]
    Unavailable,

    /// Serialization of the config blob failed
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage write itself was rejected (e.g. quota)
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Read/write port for persisted settings.
///
/// Pages receive an implementation through [`crate::state::GlobalState`]
/// instead of reaching for ambient storage.
pub trait SettingsStore {
    /// Load the saved configuration, if a valid blob exists.
    fn load_config(&self) -> Option<DbConfig>;

    /// Persist the configuration as one atomic blob write.
    fn save_config(&self, config: &DbConfig) -> Result<(), StoreError>;

    /// Whether the session authentication flag is set.
    fn is_authenticated(&self) -> bool;

    /// Set or clear the session authentication flag.
    fn set_authenticated(&self, value: bool);
}

/// Shared handle to the settings store
pub type SharedStore = Rc<dyn SettingsStore>;

/// [`SettingsStore`] backed by browser local storage.
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SettingsStore for BrowserStore {
    fn load_config(&self) -> Option<DbConfig> {
        let raw = local_storage()?.get_item(CONFIG_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save_config(&self, config: &DbConfig) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        let blob = serde_json::to_string(config)?;
        storage
            .set_item(CONFIG_KEY, &blob)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }

    fn is_authenticated(&self) -> bool {
        local_storage()
            .and_then(|s| s.get_item(AUTH_KEY).ok().flatten())
            .is_some()
    }

    fn set_authenticated(&self, value: bool) {
        if let Some(storage) = local_storage() {
            if value {
                let _ = storage.set_item(AUTH_KEY, "true");
            } else {
                let _ = storage.remove_item(AUTH_KEY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory store used to exercise save/load semantics natively.
    #[derive(Default)]
    struct MemoryStore {
        blob: RefCell<Option<String>>,
        authenticated: Cell<bool>,
    }

    impl SettingsStore for MemoryStore {
        fn load_config(&self) -> Option<DbConfig> {
            let blob = self.blob.borrow();
            blob.as_deref().and_then(|raw| serde_json::from_str(raw).ok())
        }

        fn save_config(&self, config: &DbConfig) -> Result<(), StoreError> {
            let blob = serde_json::to_string(config)?;
            *self.blob.borrow_mut() = Some(blob);
            Ok(())
        }

        fn is_authenticated(&self) -> bool {
            self.authenticated.get()
        }

        fn set_authenticated(&self, value: bool) {
            self.authenticated.set(value);
        }
    }

    fn filled_config() -> DbConfig {
        DbConfig {
            host: "localhost".to_string(),
            user: "postgres".to_string(),
            database: "agent_db".to_string(),
            table: "conversations".to_string(),
            api_url: "http://localhost:3000".to_string(),
            ..DbConfig::default()
        }
    }

    #[test]
    fn test_default_port() {
        let config = DbConfig::default();
        assert_eq!(config.port, "5432");
        assert!(config.host.is_empty());
        assert!(config.api_url.is_empty());
    }

    #[test]
    fn test_blob_uses_legacy_camel_case_keys() {
        let blob = serde_json::to_string(&filled_config()).unwrap();
        assert!(blob.contains("\"apiUrl\""));
        assert!(blob.contains("\"dateColumn\""));
        assert!(blob.contains("\"statusColumn\""));

        let decoded: DbConfig = serde_json::from_str(&blob).unwrap();
        assert_eq!(decoded, filled_config());
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let decoded: DbConfig = serde_json::from_str(r#"{"host":"db.local"}"#).unwrap();
        assert_eq!(decoded.host, "db.local");
        assert_eq!(decoded.port, "5432");
    }

    #[test]
    fn test_save_validation_rejects_missing_table() {
        let mut config = filled_config();
        config.table.clear();

        let err = config.validate_for_save().unwrap_err();
        assert_eq!(err, ConfigError::MissingFields(vec!["table"]));
    }

    #[test]
    fn test_save_validation_accepts_full_config() {
        assert!(filled_config().validate_for_save().is_ok());
    }

    #[test]
    fn test_connection_check_ignores_table_and_api_url() {
        let mut config = filled_config();
        config.table.clear();
        config.api_url.clear();

        assert!(config.validate_connection_fields().is_ok());
        config.host.clear();
        assert_eq!(
            config.validate_connection_fields().unwrap_err(),
            ConfigError::MissingFields(vec!["host"])
        );
    }

    #[test]
    fn test_api_base_is_derived_from_blob() {
        let config = filled_config();
        assert_eq!(config.api_base(), Some("http://localhost:3000"));

        let empty = DbConfig::default();
        assert_eq!(empty.api_base(), None);
    }

    #[test]
    fn test_rejected_save_writes_nothing() {
        let store = MemoryStore::default();
        let mut config = filled_config();
        config.table.clear();

        // The form validates before touching the store.
        if config.validate_for_save().is_ok() {
            store.save_config(&config).unwrap();
        }

        assert!(store.load_config().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryStore::default();
        let config = filled_config();

        config.validate_for_save().unwrap();
        store.save_config(&config).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.api_base(), config.api_base());
    }

    #[test]
    fn test_auth_flag_set_and_clear() {
        let store = MemoryStore::default();
        assert!(!store.is_authenticated());

        store.set_authenticated(true);
        assert!(store.is_authenticated());

        store.set_authenticated(false);
        assert!(!store.is_authenticated());
    }
}

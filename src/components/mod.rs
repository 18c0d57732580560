//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod metric_card;
pub mod status_badge;
pub mod toast;

pub use loading::Loading;
pub use metric_card::MetricCard;
pub use status_badge::StatusBadge;
pub use toast::Toast;

//! State Management
//!
//! Global application state and the dashboard view reduction.

pub mod global;

pub use global::{
    provide_global_state, Client, ClientStatus, DashboardView, GlobalState, MetricsSummary,
    PeriodFilter,
};

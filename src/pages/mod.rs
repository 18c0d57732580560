//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod config;
pub mod dashboard;
pub mod login;

pub use chat::ChatViewer;
pub use config::Config;
pub use dashboard::Dashboard;
pub use login::Login;

//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod dashboard;

pub use auth::Auth;
pub use dashboard::Dashboard;

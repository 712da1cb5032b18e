//! UI Components
//!
//! Reusable Leptos components for the auth and dashboard pages.

pub mod insight_list;
pub mod loading;
pub mod sections;
pub mod stat_card;
pub mod toast;

pub use insight_list::InsightList;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use toast::Toast;

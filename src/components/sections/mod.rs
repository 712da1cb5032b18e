//! Report Sections
//!
//! One component per dashboard section. Each is a pure read of its report
//! sub-object; absent data renders as placeholders, never as an error.

pub mod achievements;
pub mod champions;
pub mod goals;
pub mod growth;
pub mod overview;
pub mod performance;
pub mod team_impact;

pub use achievements::AchievementsSection;
pub use champions::ChampionsSection;
pub use goals::GoalsSection;
pub use growth::GrowthSection;
pub use overview::OverviewSection;
pub use performance::PerformanceSection;
pub use team_impact::TeamImpactSection;

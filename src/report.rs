//! Report Payload
//!
//! The yearly report as returned by the API. Every sub-section and leaf
//! field is optional; the dashboard renders placeholders for anything the
//! server left out, so a sparse payload never fails to display.

use serde::Deserialize;

/// Yearly report with its seven display sections
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub overview: Option<Overview>,
    pub performance: Option<Performance>,
    pub champions: Option<Champions>,
    pub team_impact: Option<TeamImpact>,
    pub growth: Option<Growth>,
    pub achievements: Option<Achievements>,
    pub future_goals: Option<FutureGoals>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub total_games: Option<u32>,
    pub win_rate: Option<f64>,
    #[serde(rename = "avgKDA")]
    pub avg_kda: Option<f64>,
    pub main_role: Option<String>,
    pub insights: Vec<String>,
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    pub avg_kills: Option<f64>,
    pub avg_deaths: Option<f64>,
    pub avg_assists: Option<f64>,
    pub cs_per_minute: Option<f64>,
    pub vision_score: Option<f64>,
    pub damage_per_minute: Option<f64>,
    pub insights: Vec<String>,
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Champions {
    pub top_champions: Vec<Champion>,
    pub insights: Vec<String>,
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Champion {
    pub name: String,
    pub role: String,
    pub games_played: Option<u32>,
    pub win_rate: Option<f64>,
    pub kda: Option<f64>,
    pub cs_per_min: Option<f64>,
    pub damage_per_min: Option<f64>,
    pub vision_score: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamImpact {
    pub kill_participation: Option<f64>,
    pub objective_control: Option<f64>,
    pub teamfight_presence: Option<f64>,
    pub support_rating: Option<f64>,
    pub insights: Vec<String>,
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Growth {
    pub kda_improvement: Option<f64>,
    pub rank_progress: Option<String>,
    pub new_champions: Option<u32>,
    pub consistency: Option<f64>,
    pub insights: Vec<String>,
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievements {
    pub list: Vec<Achievement>,
    pub top_games: Vec<TopGame>,
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub rarity: String,
    pub icon: Option<String>,
    pub date: String,
}

/// One of the year's outstanding games
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TopGame {
    pub result: String,
    pub duration: String,
    pub champion: String,
    pub role: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub kda: Option<f64>,
    pub grade: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FutureGoals {
    pub mechanical: Vec<Goal>,
    pub strategy: Vec<Goal>,
    pub champion: Vec<Goal>,
    pub mental: Vec<Goal>,
    pub team: Vec<Goal>,
    pub narrative: Option<String>,
}

impl FutureGoals {
    /// The fixed goal categories, in display order
    pub fn categories(&self) -> [(&'static str, &[Goal]); 5] {
        [
            ("Mechanical", &self.mechanical),
            ("Strategy", &self.strategy),
            ("Champion Pool", &self.champion),
            ("Mental Game", &self.mental),
            ("Teamplay", &self.team),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Goal {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub progress: Option<f64>,
    pub actions: Vec<GoalAction>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalAction {
    pub text: String,
    pub completed: bool,
}

// ============ Display formatting ============

/// Format a numeric stat with a fixed decimal count, `-` when absent
pub fn fmt_stat(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "-".to_string(),
    }
}

/// Format a whole-number stat, `-` when absent
pub fn fmt_count(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Format a percentage, `0%` when absent
pub fn fmt_percent(value: Option<f64>) -> String {
    format!("{}%", value.unwrap_or(0.0))
}

/// Format an improvement delta, `+0%` when absent
pub fn fmt_improvement(value: Option<f64>) -> String {
    format!("+{}%", value.unwrap_or(0.0))
}

/// Format a string stat, `-` when absent
pub fn fmt_text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Mean progress across a goal category, rounded to a whole percent
pub fn category_progress(goals: &[Goal]) -> u32 {
    if goals.is_empty() {
        return 0;
    }
    let total: f64 = goals.iter().map(|g| g.progress.unwrap_or(0.0)).sum();
    (total / goals.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_deserializes_to_all_none() {
        let report: Report = serde_json::from_str("{}").unwrap();
        assert!(report.overview.is_none());
        assert!(report.performance.is_none());
        assert!(report.champions.is_none());
        assert!(report.team_impact.is_none());
        assert!(report.growth.is_none());
        assert!(report.achievements.is_none());
        assert!(report.future_goals.is_none());
    }

    #[test]
    fn test_overview_kda_field_name() {
        let overview: Overview =
            serde_json::from_str(r#"{"totalGames":412,"winRate":53.2,"avgKDA":3.41}"#).unwrap();
        assert_eq!(overview.total_games, Some(412));
        assert_eq!(overview.avg_kda, Some(3.41));
        assert!(overview.insights.is_empty());
        assert!(overview.narrative.is_none());
    }

    #[test]
    fn test_sparse_champion_renders_placeholders() {
        let champ: Champion = serde_json::from_str(r#"{"name":"Ahri","role":"Mid"}"#).unwrap();
        assert_eq!(fmt_stat(champ.cs_per_min, 1), "-");
        assert_eq!(fmt_stat(champ.damage_per_min, 0), "-");
        assert_eq!(fmt_count(champ.games_played), "-");
    }

    #[test]
    fn test_fmt_stat_precision() {
        assert_eq!(fmt_stat(Some(3.14159), 2), "3.14");
        assert_eq!(fmt_stat(Some(812.4), 0), "812");
        assert_eq!(fmt_stat(None, 2), "-");
    }

    #[test]
    fn test_fmt_percent_defaults_to_zero() {
        assert_eq!(fmt_percent(Some(54.5)), "54.5%");
        assert_eq!(fmt_percent(Some(62.0)), "62%");
        assert_eq!(fmt_percent(None), "0%");
        assert_eq!(fmt_improvement(Some(12.0)), "+12%");
        assert_eq!(fmt_improvement(None), "+0%");
    }

    #[test]
    fn test_fmt_text_placeholder() {
        assert_eq!(fmt_text(Some("Jungle")), "Jungle");
        assert_eq!(fmt_text(Some("")), "-");
        assert_eq!(fmt_text(None), "-");
    }

    #[test]
    fn test_category_progress_rounds_mean() {
        let goals = vec![
            Goal { progress: Some(50.0), ..Default::default() },
            Goal { progress: Some(75.0), ..Default::default() },
        ];
        assert_eq!(category_progress(&goals), 63);
        assert_eq!(category_progress(&[]), 0);
    }

    #[test]
    fn test_category_progress_treats_missing_as_zero() {
        let goals = vec![
            Goal { progress: Some(80.0), ..Default::default() },
            Goal { progress: None, ..Default::default() },
        ];
        assert_eq!(category_progress(&goals), 40);
    }

    #[test]
    fn test_goal_categories_order() {
        let goals: FutureGoals = serde_json::from_str(
            r#"{"mechanical":[{"title":"CS drills","priority":"High","progress":30}]}"#,
        )
        .unwrap();
        let categories = goals.categories();
        assert_eq!(categories[0].0, "Mechanical");
        assert_eq!(categories[0].1.len(), 1);
        assert_eq!(categories[4].0, "Teamplay");
        assert!(categories[4].1.is_empty());
    }
}

//! API Request/Response Types
//!
//! DTOs for the auth and account-linking endpoints. The report payload
//! lives in [`crate::report`].

use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-success responses
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MagicLinkRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyMagicLinkRequest {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyMagicLinkResponse {
    pub token: String,
    pub user_id: String,
    /// Whether a summoner account is already linked to this user
    #[serde(default)]
    pub summoner_linked: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccessKeyResponse {
    pub token: String,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummonerRequest {
    pub summoner_name: String,
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkSummonerResponse {
    pub puuid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub player_puuid: String,
    pub year: i32,
}

/// User profile shown in the dashboard header
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_magic_link_defaults_summoner_linked() {
        let resp: VerifyMagicLinkResponse =
            serde_json::from_str(r#"{"token":"t","userId":"u"}"#).unwrap();
        assert_eq!(resp.token, "t");
        assert_eq!(resp.user_id, "u");
        assert!(!resp.summoner_linked);
    }

    #[test]
    fn test_link_request_uses_camel_case() {
        let body = serde_json::to_value(LinkSummonerRequest {
            summoner_name: "Faker".to_string(),
            region: "KR".to_string(),
        })
        .unwrap();
        assert_eq!(body["summonerName"], "Faker");
        assert_eq!(body["region"], "KR");
    }

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.summoner_name.is_none());
        assert!(profile.rank.is_none());
    }
}

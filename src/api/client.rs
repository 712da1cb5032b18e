//! HTTP API Client
//!
//! One function per endpoint of the Summoner's Chronicle REST API. Every
//! request carries `Content-Type: application/json`; authenticated calls add
//! the stored bearer token. Non-success responses surface the server's
//! `message` field or a per-endpoint fallback. HTTP 401 maps to
//! [`ApiError::Unauthorized`] so callers can tear the session down.

use chrono::Datelike;
use gloo_net::http::{Request, Response};

use crate::access_key::AccessKey;
use crate::api::error::ApiError;
use crate::api::types::*;
use crate::config;
use crate::report::Report;
use crate::state::session;

fn api_base() -> Result<String, ApiError> {
    let base = config::get_api_base();
    if base.is_empty() {
        return Err(ApiError::Config);
    }
    Ok(base)
}

fn bearer() -> Result<String, ApiError> {
    session::auth_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::Unauthorized)
}

/// The report year for all generate/fetch calls: the current calendar year
fn report_year() -> i32 {
    chrono::Utc::now().year()
}

/// Turn a non-success response into an [`ApiError`], consuming the body
async fn error_from(response: Response, fallback: &str) -> ApiError {
    if response.status() == 401 {
        return ApiError::Unauthorized;
    }

    let message = response
        .json::<ApiMessage>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());

    ApiError::Api {
        status: response.status(),
        message,
    }
}

/// Request a one-time sign-in link be emailed to the user
pub async fn send_magic_link(email: &str) -> Result<(), ApiError> {
    let api_base = api_base()?;

    let response = Request::post(&format!("{}/auth/magic-link", api_base))
        .json(&MagicLinkRequest {
            email: email.to_string(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Failed to send magic link").await);
    }

    Ok(())
}

/// Redeem a magic-link token from the URL
pub async fn verify_magic_link(token: &str) -> Result<VerifyMagicLinkResponse, ApiError> {
    let api_base = api_base()?;

    let response = Request::post(&format!("{}/auth/verify-magic-link", api_base))
        .json(&VerifyMagicLinkRequest {
            token: token.to_string(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Invalid or expired magic link").await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Authenticate with a parsed `.sumvault` access key
pub async fn verify_access_key(key: &AccessKey) -> Result<VerifyAccessKeyResponse, ApiError> {
    let api_base = api_base()?;

    let response = Request::post(&format!("{}/auth/verify", api_base))
        .json(key)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Authentication failed").await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Link a summoner account to the signed-in user
pub async fn link_summoner(
    summoner_name: &str,
    region: &str,
) -> Result<LinkSummonerResponse, ApiError> {
    let api_base = api_base()?;

    let response = Request::post(&format!("{}/summoner/link", api_base))
        .header("Authorization", &bearer()?)
        .json(&LinkSummonerRequest {
            summoner_name: summoner_name.to_string(),
            region: region.to_string(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Failed to link summoner account").await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Kick off report generation for the linked summoner
pub async fn generate_report() -> Result<(), ApiError> {
    let api_base = api_base()?;
    let puuid = session::summoner_puuid().ok_or(ApiError::Unauthorized)?;

    let response = Request::post(&format!("{}/report/generate", api_base))
        .header("Authorization", &bearer()?)
        .json(&GenerateReportRequest {
            player_puuid: puuid,
            year: report_year(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Failed to generate report").await);
    }

    Ok(())
}

/// Fetch the signed-in user's profile
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    let api_base = api_base()?;

    let response = Request::get(&format!("{}/user/profile", api_base))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Failed to load user data").await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the yearly report for the linked summoner
pub async fn fetch_report() -> Result<Report, ApiError> {
    let api_base = api_base()?;
    let puuid = session::summoner_puuid().ok_or(ApiError::Unauthorized)?;

    let response = Request::get(&format!(
        "{}/report/{}?year={}",
        api_base,
        puuid,
        report_year()
    ))
    .header("Authorization", &bearer()?)
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Failed to load report data").await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Download the rendered PDF report as raw bytes
pub async fn download_report_pdf() -> Result<Vec<u8>, ApiError> {
    let api_base = api_base()?;
    let puuid = session::summoner_puuid().ok_or(ApiError::Unauthorized)?;

    let response = Request::get(&format!(
        "{}/report/{}/download?format=pdf",
        api_base, puuid
    ))
    .header("Authorization", &bearer()?)
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response, "Failed to download report").await);
    }

    response
        .binary()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

//! Application Configuration
//!
//! Frozen build-time settings plus the local-storage override for the API
//! base URL.

/// Immutable application settings compiled into the binary.
pub struct AppConfig {
    pub name: &'static str,
    pub version: &'static str,
    /// Default API endpoint, used unless overridden in local storage.
    pub api_endpoint: &'static str,
}

pub const CONFIG: AppConfig = AppConfig {
    name: "Summoner's Chronicle",
    version: env!("CARGO_PKG_VERSION"),
    api_endpoint: "https://api.summoners-chronicle.gg/v1",
};

/// Local storage key holding an API base URL override
const API_URL_KEY: &str = "chronicle_api_url";

/// Get the API base URL from local storage or use the configured default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                CONFIG.api_endpoint.to_string()
            }
        } else {
            CONFIG.api_endpoint.to_string()
        }
    } else {
        CONFIG.api_endpoint.to_string()
    };
    normalize_base(&url)
}

/// Normalize a base URL: trim whitespace and any trailing slash
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8082/api/"), "http://localhost:8082/api");
        assert_eq!(normalize_base("http://localhost:8082/api"), "http://localhost:8082/api");
    }

    #[test]
    fn test_normalize_empty_stays_empty() {
        assert_eq!(normalize_base("  "), "");
    }

    #[test]
    fn test_default_endpoint_is_configured() {
        assert!(!CONFIG.api_endpoint.is_empty());
    }
}

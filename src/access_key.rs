//! Access Key Files
//!
//! A `.sumvault` file is a JSON credential granting session authentication
//! without email verification. Validation happens entirely client-side
//! before any network call: the file name must carry the expected extension
//! and the content must provide non-empty `token` and `userId` fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected access key file extension
pub const ACCESS_KEY_EXT: &str = ".sumvault";

/// Parsed access key credential; extra fields in the file are ignored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessKey {
    pub token: String,
    pub user_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessKeyError {
    #[error("Please select a valid .sumvault file")]
    BadExtension,

    #[error("Failed to parse access key file")]
    Malformed,

    #[error("Invalid access key format")]
    MissingFields,
}

/// Check a selected file name for the `.sumvault` extension
pub fn is_access_key_file(name: &str) -> bool {
    name.ends_with(ACCESS_KEY_EXT)
}

/// Parse access key file content, requiring both credential fields
pub fn parse_access_key(contents: &str) -> Result<AccessKey, AccessKeyError> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|_| AccessKeyError::Malformed)?;

    let key: AccessKey =
        serde_json::from_value(value).map_err(|_| AccessKeyError::MissingFields)?;

    if key.token.is_empty() || key.user_id.is_empty() {
        return Err(AccessKeyError::MissingFields);
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check() {
        assert!(is_access_key_file("faker.sumvault"));
        assert!(!is_access_key_file("faker.sumvault.txt"));
        assert!(!is_access_key_file("notes.json"));
        assert!(!is_access_key_file(""));
    }

    #[test]
    fn test_parse_valid_key() {
        let key = parse_access_key(r#"{"token":"abc123","userId":"user-1"}"#).unwrap();
        assert_eq!(key.token, "abc123");
        assert_eq!(key.user_id, "user-1");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let key = parse_access_key(
            r#"{"token":"abc","userId":"u","issuedAt":"2025-01-01","region":"euw"}"#,
        )
        .unwrap();
        assert_eq!(key.token, "abc");
    }

    #[test]
    fn test_missing_token_rejected() {
        assert_eq!(
            parse_access_key(r#"{"userId":"u"}"#),
            Err(AccessKeyError::MissingFields)
        );
    }

    #[test]
    fn test_missing_user_id_rejected() {
        assert_eq!(
            parse_access_key(r#"{"token":"abc"}"#),
            Err(AccessKeyError::MissingFields)
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            parse_access_key(r#"{"token":"","userId":"u"}"#),
            Err(AccessKeyError::MissingFields)
        );
    }

    #[test]
    fn test_garbage_rejected_as_malformed() {
        assert_eq!(parse_access_key("not json"), Err(AccessKeyError::Malformed));
        assert_eq!(parse_access_key(""), Err(AccessKeyError::Malformed));
    }
}

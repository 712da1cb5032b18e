//! Session Storage
//!
//! The persisted session lives in browser local storage under five keys:
//! bearer credentials written at authentication time and the linked
//! summoner reference written once during setup. Cleared on logout and on
//! any 401 from the API.

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_ID_KEY: &str = "userId";
pub const SUMMONER_PUUID_KEY: &str = "summonerPuuid";
pub const SUMMONER_NAME_KEY: &str = "summonerName";
pub const REGION_KEY: &str = "region";

/// Every key owned by the session, in the order they are written
pub const SESSION_KEYS: [&str; 5] = [
    AUTH_TOKEN_KEY,
    USER_ID_KEY,
    SUMMONER_PUUID_KEY,
    SUMMONER_NAME_KEY,
    REGION_KEY,
];

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// The stored bearer token, if any
pub fn auth_token() -> Option<String> {
    get(AUTH_TOKEN_KEY)
}

/// The linked summoner's puuid, if setup has completed
pub fn summoner_puuid() -> Option<String> {
    get(SUMMONER_PUUID_KEY)
}

pub fn is_authenticated() -> bool {
    auth_token().is_some()
}

/// Persist bearer credentials after a successful authentication
pub fn store_credentials(token: &str, user_id: &str) {
    set(AUTH_TOKEN_KEY, token);
    set(USER_ID_KEY, user_id);
}

/// Persist the linked summoner reference after setup
pub fn store_summoner(puuid: &str, name: &str, region: &str) {
    set(SUMMONER_PUUID_KEY, puuid);
    set(SUMMONER_NAME_KEY, name);
    set(REGION_KEY, region);
}

/// Remove all five session keys
pub fn clear() {
    if let Some(storage) = local_storage() {
        for key in SESSION_KEYS {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_owns_five_keys() {
        assert_eq!(SESSION_KEYS.len(), 5);
        assert!(SESSION_KEYS.contains(&"authToken"));
        assert!(SESSION_KEYS.contains(&"userId"));
        assert!(SESSION_KEYS.contains(&"summonerPuuid"));
        assert!(SESSION_KEYS.contains(&"summonerName"));
        assert!(SESSION_KEYS.contains(&"region"));
    }
}

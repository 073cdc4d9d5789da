use contracts::system::auth::SessionUser;
use web_sys::window;

use crate::shared::config::config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Parse the persisted session user. Malformed JSON counts as no session.
pub fn parse_session_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::error!("Failed to parse session user from localStorage: {}", e);
            None
        }
    }
}

/// Get the current user from localStorage
pub fn get_current_user() -> Option<SessionUser> {
    let raw = get_local_storage()?
        .get_item(&config().storage.user_key)
        .ok()??;
    parse_session_user(&raw)
}

/// Bearer token of the current session, if the login flow stored one
pub fn get_access_token() -> Option<String> {
    get_current_user()?.token
}

/// Persist the sale returned by the create call for the detail page
pub fn save_data_venta(data: &serde_json::Value) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(data) {
        Ok(json) => {
            if let Err(e) = storage.set_item(&config().storage.data_venta_key, &json) {
                log::error!("Failed to store data_venta: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to serialize data_venta: {}", e),
    }
}

/// Read the sale stored by [`save_data_venta`]
pub fn get_data_venta() -> Option<serde_json::Value> {
    let raw = get_local_storage()?
        .get_item(&config().storage.data_venta_key)
        .ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_session_is_none() {
        assert_eq!(parse_session_user("{not json"), None);
        assert_eq!(parse_session_user(r#"{"id_rol": 1}"#), None);
    }

    #[test]
    fn test_valid_session() {
        let user = parse_session_user(r#"{"id_usuario": 5, "id_rol": 2, "token": "abc"}"#).unwrap();
        assert_eq!(user.id_usuario, 5);
        assert_eq!(user.token.as_deref(), Some("abc"));
    }
}

use serde::{Deserialize, Serialize};

/// Role id of the restricted "operario" profile.
pub const ROL_OPERARIO: i32 = 4;

/// Current user persisted by the login flow.
///
/// Read-only from the admin pages. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id_usuario: i64,
    pub id_rol: i32,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl SessionUser {
    pub fn is_operario(&self) -> bool {
        self.id_rol == ROL_OPERARIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_ignores_extra_fields() {
        let user: SessionUser = serde_json::from_str(
            r#"{"id_usuario": 12, "id_rol": 4, "correo": "op@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.id_usuario, 12);
        assert!(user.is_operario());
        assert_eq!(user.token, None);
    }

    #[test]
    fn test_admin_is_not_operario() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id_usuario": 1, "id_rol": 1, "nombre": "Admin"}"#).unwrap();
        assert!(!user.is_operario());
    }
}

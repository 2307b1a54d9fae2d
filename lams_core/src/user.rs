//! The user record served by the REST user directory.
//!
//! Field names follow the directory's camelCase JSON so the fetch layer
//! can deserialize responses directly.

use serde::{Deserialize, Serialize};

/// A user as stored in the directory. `last_login` is maintained
/// best-effort by the login flow; `avatar` is optional decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub department: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// What a successful login produces: the matched user plus the
/// fabricated opaque token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_directory_json() {
        let json = r#"{
            "id": 1,
            "email": "admin@lams.com",
            "firstName": "Ada",
            "lastName": "Admin",
            "role": "admin",
            "isActive": true,
            "department": "IT",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("valid directory record");
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "Ada");
        assert!(user.is_active);
        assert_eq!(user.avatar, None);
        assert_eq!(user.last_login, None);
        assert_eq!(user.full_name(), "Ada Admin");
    }

    #[test]
    fn serializes_camel_case() {
        let user = User {
            id: 7,
            email: "teacher@lams.com".into(),
            first_name: "Tess".into(),
            last_name: "Teacher".into(),
            role: "teacher".into(),
            is_active: true,
            avatar: None,
            department: "Science".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login: Some("2025-06-01T12:00:00Z".into()),
        };

        let json = serde_json::to_string(&user).expect("serializable");
        assert!(json.contains("\"firstName\":\"Tess\""));
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"lastLogin\""));
        assert!(!json.contains("avatar"));
    }
}

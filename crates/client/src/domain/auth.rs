use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire body of the register/login endpoints. The backend accepts email or
/// username interchangeably; unset fields are omitted from the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    pub fn email_password(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            username: None,
            password: Some(password.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_credential_fields_are_omitted_from_the_body() {
        let creds = Credentials::email_password("a@b.co", "hunter2");
        let v = serde_json::to_value(&creds).unwrap();
        assert_eq!(v, json!({"email": "a@b.co", "password": "hunter2"}));
    }

    #[test]
    fn parses_login_response_with_token() {
        let v = json!({
            "success": true,
            "message": "Login successful",
            "token": "jwt-abc",
            "user": {"email": "a@b.co"}
        });

        let res: AuthResponse = serde_json::from_value(v).unwrap();
        assert!(res.success);
        assert_eq!(res.token.as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn parses_failure_response_without_token() {
        let v = json!({"success": false, "message": "Invalid credentials"});
        let res: AuthResponse = serde_json::from_value(v).unwrap();
        assert!(!res.success);
        assert!(res.token.is_none());
        assert!(res.user.is_none());
    }
}

//! Authentication Models
//! Mission: Define token claims and auth request/response shapes

use serde::{Deserialize, Serialize};

/// JWT claims payload.
///
/// Always carries `username`; the profile fields ride along for display
/// purposes. The password hash is deliberately never part of a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub iat: usize, // issue timestamp
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response for register/login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_never_expose_a_password_field() {
        let claims = Claims {
            username: "bob".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Smith".to_string(),
            phone: "+14155550000".to_string(),
            iat: 1_700_000_000,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "bob");
        assert!(json["iat"].is_number());
    }
}

//! # Account models
//!
//! - [`Credentials`] / [`Registration`]: bodies of `POST /api/auth` and
//!   `POST /api/users`.
//! - [`AuthToken`]: both endpoints answer `{ "token": "..." }`. The token is
//!   opaque to the client and only ever echoed back in `x-auth-token`.
//! - [`User`]: the account behind the token, from `GET /api/auth`. The API
//!   never sends the password hash to this endpoint, and the client has no
//!   field for it.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Body of `POST /api/auth`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of the login and register endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthToken {
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
}

/// The authenticated account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_without_token_decodes_empty() {
        let token: AuthToken = serde_json::from_str("{}").unwrap();
        assert!(token.token.is_empty());
    }

    #[test]
    fn user_decodes_mongo_id() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","name":"Ada","email":"a@b.com","avatar":"//gravatar/x","date":"2024-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = User {
            email: "a@b.com".into(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "a@b.com");
    }
}

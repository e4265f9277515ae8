//! Login, registration and logout.

use store::KeyValueStore;

use crate::client::{json_body, Access, ApiClient};
use crate::error::ApiError;
use crate::models::{AuthToken, Credentials, Registration, User};
use crate::transport::{HttpTransport, Method};

impl<S: KeyValueStore, T: HttpTransport> ApiClient<S, T> {
    /// `POST /api/auth`. On success the token is persisted for the session TTL.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = json_body(&Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        let token: AuthToken = self
            .fetch(Method::Post, "/api/auth", Some(body), Access::Public)
            .await?;
        self.start_session(token)
    }

    /// `POST /api/users`. Creates the account and signs it in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let body = json_body(&Registration {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        let token: AuthToken = self
            .fetch(Method::Post, "/api/users", Some(body), Access::Public)
            .await?;
        self.start_session(token)
    }

    /// Forget the session locally. No request is made.
    pub fn logout(&self) {
        self.session.clear_session();
        tracing::info!("Signed out");
    }

    /// `GET /api/auth`: the account the token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(Method::Get, "/api/auth", None, Access::Private)
            .await
    }

    fn start_session(&self, token: AuthToken) -> Result<(), ApiError> {
        if token.token.is_empty() {
            tracing::warn!("Authentication response did not include a token");
            return Err(ApiError::MissingToken);
        }
        self.session.set_session(&token.token, self.session_ttl);
        tracing::info!("Signed in");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use crate::test_support::{client, WEEK};
    use crate::ApiError;

    #[tokio::test]
    async fn login_persists_token_and_later_calls_carry_it() {
        let (client, _store, transport, _redirects) = client();
        transport.respond(200, json!({"token": "abc"}));
        transport.respond(200, json!({"_id": "pr1", "user": {"_id": "u1", "name": "Ada"}}));

        client.login("a@b.com", "x").await.unwrap();
        assert_eq!(client.session().token().as_deref(), Some("abc"));

        let login = transport.last_request().unwrap();
        assert_eq!(login.path, "/api/auth");
        assert_eq!(login.body, Some(json!({"email": "a@b.com", "password": "x"})));
        assert_eq!(login.header("x-auth-token"), None);

        client.current_profile().await.unwrap();
        let me = transport.last_request().unwrap();
        assert_eq!(me.path, "/api/profile/me");
        assert_eq!(me.header("x-auth-token"), Some("abc"));
    }

    #[tokio::test]
    async fn token_lasts_for_the_session_ttl() {
        let (client, store, transport, _redirects) = client();
        transport.respond(200, json!({"token": "abc"}));
        client.login("a@b.com", "x").await.unwrap();

        store.advance(WEEK - Duration::from_secs(1));
        assert!(client.is_authenticated());
        store.advance(Duration::from_secs(1));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn login_without_token_fails() {
        let (client, _store, transport, _redirects) = client();
        transport.respond(200, json!({}));

        assert_eq!(client.login("a@b.com", "x").await, Err(ApiError::MissingToken));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_login_surfaces_server_message() {
        let (client, _store, transport, redirects) = client();
        transport.respond(400, json!({"errors": [{"msg": "Invalid Credentials"}]}));

        let err = client.login("a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid Credentials");
        assert!(!client.is_authenticated());
        assert_eq!(redirects.get(), 0);
    }

    #[tokio::test]
    async fn register_signs_in() {
        let (client, _store, transport, _redirects) = client();
        transport.respond(200, json!({"token": "new"}));

        client.register(" Ada ", "a@b.com", "secret1").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "/api/users");
        assert_eq!(request.body.as_ref().unwrap()["name"], "Ada");
        assert_eq!(client.session().token().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn after_logout_no_privileged_call_carries_the_token() {
        let (client, _store, transport, redirects) = client();
        transport.respond(200, json!({"token": "abc"}));
        client.login("a@b.com", "x").await.unwrap();

        client.logout();
        assert!(!client.is_authenticated());

        assert_eq!(client.posts().await, Err(ApiError::MissingSession));
        assert_eq!(client.current_user().await, Err(ApiError::MissingSession));
        assert_eq!(transport.request_count(), 1);
        assert_eq!(redirects.get(), 2);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.header("x-auth-token").is_none()));
    }

    #[tokio::test]
    async fn current_user_decodes_account() {
        let (client, _store, transport, _redirects) = client();
        client.session().set_session("abc", WEEK);
        transport.respond(200, json!({"_id": "u1", "name": "Ada", "email": "a@b.com"}));

        let user = client.current_user().await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(transport.last_request().unwrap().path, "/api/auth");
    }
}

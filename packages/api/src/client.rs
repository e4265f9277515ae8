//! # ApiClient: session guard and authorized fetcher
//!
//! Every page talks to the API through one [`ApiClient`]. It owns the
//! [`Session`] and the [`HttpTransport`], so no page reads the token or builds
//! headers itself.
//!
//! ## Privileged calls
//!
//! 1. [`ApiClient::guard`] reads the token. If there is none it runs the login
//!    redirect and fails with [`ApiError::MissingSession`]; nothing is sent.
//! 2. The token is attached as `x-auth-token`; bodies get
//!    `Content-Type: application/json`.
//! 3. One attempt is made. The response is classified by
//!    [`ApiError::from_response`]; a 401 also runs the login redirect.
//!
//! The guard only checks presence. A stale or forged token passes it and is
//! rejected by the server on use.

use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{KeyValueStore, Session, SessionConfig};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method};

/// Header carrying the session token on privileged calls.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Whether a call needs the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Private,
}

/// Client for the DevConnector API bound to one browser session.
#[derive(Clone)]
pub struct ApiClient<S: KeyValueStore, T: HttpTransport> {
    pub(crate) session: Session<S>,
    transport: T,
    pub(crate) session_ttl: Duration,
    on_login_required: Option<Rc<dyn Fn()>>,
}

impl<S: KeyValueStore, T: HttpTransport> ApiClient<S, T> {
    pub fn new(session: Session<S>, transport: T) -> Self {
        Self {
            session,
            transport,
            session_ttl: SessionConfig::default().ttl(),
            on_login_required: None,
        }
    }

    /// Client whose session keys and token lifetime come from `config`.
    pub fn from_config(store: S, transport: T, config: &SessionConfig) -> Self {
        Self::new(Session::with_config(store, config), transport).with_session_ttl(config.ttl())
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Run `redirect` whenever a privileged call finds no token or the
    /// server rejects the token.
    pub fn with_login_redirect(mut self, redirect: impl Fn() + 'static) -> Self {
        self.on_login_required = Some(Rc::new(redirect));
        self
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Session guard: the token, or a login redirect and `MissingSession`.
    pub fn guard(&self) -> Result<String, ApiError> {
        match self.session.token() {
            Some(token) => Ok(token),
            None => {
                tracing::debug!("No session token, redirecting to login");
                self.redirect_to_login();
                Err(ApiError::MissingSession)
            }
        }
    }

    fn redirect_to_login(&self) {
        if let Some(redirect) = &self.on_login_required {
            redirect();
        }
    }

    /// Send one request and return the raw success response.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        access: Access,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(method, path);
        if access == Access::Private {
            let token = self.guard()?;
            request.headers.push((AUTH_HEADER.to_string(), token));
        }
        if let Some(body) = body {
            request
                .headers
                .push(("Content-Type".to_string(), "application/json".to_string()));
            request.body = Some(body);
        }

        tracing::debug!(%method, path, "Sending API request");
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, path, "API request failed to send: {}", e);
            ApiError::from(e)
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let error = ApiError::from_response(&response);
        tracing::warn!(%method, path, status = response.status, "API request rejected: {}", error);
        if access == Access::Private && error.requires_login() {
            self.redirect_to_login();
        }
        Err(error)
    }

    /// Send one request and decode the JSON success body.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        access: Access,
    ) -> Result<R, ApiError> {
        let response = self.send(method, path, body, access).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(%method, path, "Undecodable API response: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Send one request whose success body is not needed.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        access: Access,
    ) -> Result<(), ApiError> {
        self.send(method, path, body, access).await.map(|_| ())
    }
}

/// Serialize a request body.
pub(crate) fn json_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

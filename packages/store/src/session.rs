//! # Session: the browser-persisted login state
//!
//! A [`Session`] wraps a [`KeyValueStore`] and owns the two pieces of client
//! state the web app keeps between page loads:
//!
//! | Key (default) | Value | Lifetime |
//! |---------------|-------|----------|
//! | `Token` | opaque session token issued by `POST /api/auth` | fixed TTL (7 days) |
//! | `userPosts` | JSON array of post ids created from this browser | browser session |
//!
//! The token is never inspected. It is either absent or a non-empty string, and
//! reading it never renews it.
//!
//! ## Owned post ids
//!
//! The owned-post list only decides whether a delete control is shown. It is
//! local, per-browser state that the user can clear or edit, so it is not an
//! authorization check; the API decides whether a delete is allowed.
//! Absent or unparsable data reads as an empty list.

use std::time::Duration;

use crate::config::SessionConfig;

/// Persisted string key/value storage with optional expiry.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when absent or expired.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`. `ttl = None` keeps it for the browser session.
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>);
    fn remove(&self, key: &str);
}

/// Token and owned-post state for the current browser.
#[derive(Clone, Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    token_key: String,
    owned_posts_key: String,
}

impl<S: KeyValueStore> Session<S> {
    /// Session using the default storage keys.
    pub fn new(store: S) -> Self {
        Self::with_config(store, &SessionConfig::default())
    }

    pub fn with_config(store: S, config: &SessionConfig) -> Self {
        Self {
            store,
            token_key: config.token_key.clone(),
            owned_posts_key: config.owned_posts_key.clone(),
        }
    }

    /// Persist `token` for `ttl`. An empty token clears the session instead.
    pub fn set_session(&self, token: &str, ttl: Duration) {
        if token.is_empty() {
            self.clear_session();
            return;
        }
        self.store.set(&self.token_key, token, Some(ttl));
    }

    /// The current token, if present and unexpired.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(&self.token_key)
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the token and the owned-post list.
    pub fn clear_session(&self) {
        self.store.remove(&self.token_key);
        self.store.remove(&self.owned_posts_key);
    }

    /// Post ids recorded as created by this browser, in creation order.
    pub fn owned_post_ids(&self) -> Vec<String> {
        let Some(raw) = self.store.get(&self.owned_posts_key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Ignoring malformed owned post list: {}", e);
                Vec::new()
            }
        }
    }

    pub fn set_owned_post_ids(&self, ids: &[String]) {
        match serde_json::to_string(ids) {
            Ok(raw) => self.store.set(&self.owned_posts_key, &raw, None),
            Err(e) => tracing::warn!("Failed to encode owned post list: {}", e),
        }
    }

    /// Remember that this browser created `post_id`.
    pub fn record_ownership(&self, post_id: &str) {
        let mut ids = self.owned_post_ids();
        if ids.iter().any(|id| id == post_id) {
            return;
        }
        ids.push(post_id.to_string());
        self.set_owned_post_ids(&ids);
    }

    /// Whether a delete control should be offered for `post_id`.
    pub fn is_owned(&self, post_id: &str) -> bool {
        self.owned_post_ids().iter().any(|id| id == post_id)
    }

    pub fn release_ownership(&self, post_id: &str) {
        let ids = self.owned_post_ids();
        let remaining: Vec<String> = ids.iter().filter(|id| *id != post_id).cloned().collect();
        if remaining.len() != ids.len() {
            self.set_owned_post_ids(&remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    #[test]
    fn token_roundtrip_and_clear() {
        let session = Session::new(MemoryStore::new());
        assert!(session.token().is_none());

        session.set_session("abc", WEEK);
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert!(session.is_authenticated());

        session.clear_session();
        assert!(session.token().is_none());
    }

    #[test]
    fn token_expires_after_ttl_without_renewal() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.set_session("abc", WEEK);

        store.advance(Duration::from_secs(6 * 24 * 60 * 60));
        assert_eq!(session.token().as_deref(), Some("abc"));

        // Reading above must not have extended the lifetime.
        store.advance(Duration::from_secs(24 * 60 * 60));
        assert!(session.token().is_none());
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.set_session("abc", WEEK);
        session.set_session("", WEEK);
        assert!(session.token().is_none());

        store.set("Token", "", None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn ownership_roundtrip() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_owned("p1"));

        session.record_ownership("p1");
        session.record_ownership("p2");
        session.record_ownership("p1");
        assert!(session.is_owned("p1"));
        assert_eq!(session.owned_post_ids(), vec!["p1", "p2"]);

        session.release_ownership("p1");
        assert!(!session.is_owned("p1"));
        assert_eq!(session.owned_post_ids(), vec!["p2"]);
    }

    #[test]
    fn owned_ids_are_stored_as_json_array() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.record_ownership("p1");
        assert_eq!(store.get("userPosts").as_deref(), Some(r#"["p1"]"#));
    }

    #[test]
    fn malformed_owned_list_reads_as_empty() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        for raw in ["not json", "{\"p1\":true}", "[1,2,3]", ""] {
            store.set("userPosts", raw, None);
            assert!(session.owned_post_ids().is_empty(), "input {raw:?}");
            assert!(!session.is_owned("p1"));
        }

        // Recording over garbage starts a fresh list.
        session.record_ownership("p9");
        assert_eq!(session.owned_post_ids(), vec!["p9"]);
    }

    #[test]
    fn clear_session_forgets_owned_posts() {
        let session = Session::new(MemoryStore::new());
        session.set_session("abc", WEEK);
        session.record_ownership("p1");

        session.clear_session();
        assert!(session.owned_post_ids().is_empty());
    }

    #[test]
    fn custom_keys_from_config() {
        let store = MemoryStore::new();
        let config = SessionConfig {
            token_key: "dc_token".to_string(),
            owned_posts_key: "dc_posts".to_string(),
            ..SessionConfig::default()
        };
        let session = Session::with_config(store.clone(), &config);
        session.set_session("abc", WEEK);
        session.record_ownership("p1");

        assert_eq!(store.get("dc_token").as_deref(), Some("abc"));
        assert!(store.get("Token").is_none());
        assert!(store.get("dc_posts").is_some());
    }
}

//! Session context and hooks for the UI.

use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::{DevConnectorConfig, KeyValueStore};

use crate::client::{make_client, use_client};

/// Whether this browser currently holds a session token.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AuthState {
    pub signed_in: bool,
}

impl AuthState {
    pub fn signed_in() -> Self {
        Self { signed_in: true }
    }

    pub fn signed_out() -> Self {
        Self { signed_in: false }
    }

    /// State of the session held by `client`.
    pub fn of<S: KeyValueStore, T: HttpTransport>(client: &ApiClient<S, T>) -> Self {
        Self {
            signed_in: client.is_authenticated(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates on login, logout and login redirects.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provides the API client and the [`AuthState`] signal to its children.
///
/// `on_login_required` runs whenever a privileged call finds no token or the
/// API rejects it; the app uses it to navigate to the login page.
#[component]
pub fn SessionProvider(
    config: DevConnectorConfig,
    on_login_required: EventHandler<()>,
    children: Element,
) -> Element {
    let (auth_state, client) = use_hook(|| {
        let client = make_client(&config);
        let auth_state = Signal::new(AuthState::of(&client));
        let client = client.with_login_redirect(move || {
            let mut auth_state = auth_state;
            auth_state.set(AuthState::signed_out());
            on_login_required.call(());
        });
        (auth_state, client)
    });
    use_context_provider(|| auth_state);
    use_context_provider(|| client);

    rsx! {
        {children}
    }
}

/// Run the session guard once on mount.
///
/// For pages that show a form before making any call, so a visitor without a
/// token is sent to the login page straight away.
pub fn use_session_guard() {
    let client = use_client();
    use_effect(move || {
        if client.guard().is_err() {
            tracing::debug!("Session guard redirected an anonymous visitor");
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn auth_state_follows_the_clients_own_store() {
        let client = make_client(&DevConnectorConfig::default());
        assert_eq!(AuthState::of(&client), AuthState::signed_out());

        client
            .session()
            .set_session("abc", Duration::from_secs(60));
        assert_eq!(AuthState::of(&client), AuthState::signed_in());

        let redirecting = client.clone().with_login_redirect(|| {});
        assert_eq!(AuthState::of(&redirecting), AuthState::signed_in());

        redirecting.logout();
        assert_eq!(AuthState::of(&client), AuthState::signed_out());
    }
}

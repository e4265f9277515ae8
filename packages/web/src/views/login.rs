//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_auth, use_client, AuthState, ErrorAlert};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if auth().signed_in {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(String::new());

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set("Email and password are required".to_string());
                return;
            }

            loading.set(true);
            match client.login(&e, &p).await {
                Ok(()) => {
                    auth.set(AuthState::signed_in());
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(err.user_message("Login failed"));
                }
            }
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h1 { class: "large text-primary", "Sign In" }
            p { class: "lead", "Sign into your account" }

            ErrorAlert { message: error() }

            form {
                class: "form",
                onsubmit: handle_login,
                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Loading..." } else { "Login" }
                }
            }

            p {
                class: "my-1",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign Up" }
            }
        }
    }
}

//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::{use_auth, use_client, AuthState, ErrorAlert};

use crate::Route;

const MIN_PASSWORD_LEN: usize = 6;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if auth().signed_in {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(String::new());

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set("Name is required".to_string());
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set("Please enter a valid email".to_string());
                return;
            }
            if p.len() < MIN_PASSWORD_LEN {
                error.set(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters"
                ));
                return;
            }
            if p != cp {
                error.set("Passwords do not match".to_string());
                return;
            }

            loading.set(true);
            match client.register(&n, &e, &p).await {
                Ok(()) => {
                    auth.set(AuthState::signed_in());
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(err.user_message("Registration failed"));
                }
            }
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h1 { class: "large text-primary", "Sign Up" }
            p { class: "lead", "Create Your Account" }

            ErrorAlert { message: error() }

            form {
                class: "form",
                onsubmit: handle_register,
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm Password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "my-1",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign In" }
            }
        }
    }
}

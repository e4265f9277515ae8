use api::Profile;
use dioxus::prelude::*;
use ui::{use_client, DeveloperCard, ErrorAlert, Loading};

use crate::Route;

/// Public directory of developer profiles.
#[component]
pub fn Developers() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut profiles = use_signal(Vec::<Profile>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.profiles().await {
                Ok(list) => {
                    error.set(String::new());
                    profiles.set(list);
                }
                Err(e) => error.set(e.user_message("Error loading developers")),
            }
            loading.set(false);
        }
    });

    let on_view = move |user_id: String| {
        nav.push(Route::ProfileView { user_id });
    };

    if loading() {
        return rsx! { Loading {} };
    }

    rsx! {
        section {
            h1 { class: "large text-primary", "Developers" }
            p { class: "lead", "Browse and connect with developers" }

            ErrorAlert { message: error() }

            div {
                class: "profiles",
                for profile in profiles() {
                    DeveloperCard {
                        key: "{profile.id}",
                        profile: profile.clone(),
                        on_view,
                    }
                }
                if profiles.read().is_empty() && error.read().is_empty() {
                    p { "No developers found" }
                }
            }
        }
    }
}

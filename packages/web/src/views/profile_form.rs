//! Create and edit profile pages. Both submit `POST /api/profile`; only
//! create sends the credential lists.

use dioxus::prelude::*;
use ui::{use_client, use_session_guard, ErrorAlert, Loading, ProfileFields, ProfileFormState};

use crate::Route;

#[component]
pub fn CreateProfile() -> Element {
    use_session_guard();
    let form = use_signal(ProfileFormState::default);

    rsx! {
        section {
            h1 { class: "large text-primary", "Create Your Profile" }
            p { class: "lead", "Let's get some information to make your profile stand out" }
            ProfileForm { form, creating: true, fallback_error: "Error creating profile" }
        }
    }
}

#[component]
pub fn EditProfile() -> Element {
    let client = use_client();
    let mut form = use_signal(ProfileFormState::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.current_profile().await {
                Ok(profile) => form.set(ProfileFormState::from_profile(&profile)),
                Err(e) => error.set(e.user_message("Error loading profile")),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { Loading {} };
    }

    rsx! {
        section {
            h1 { class: "large text-primary", "Edit Your Profile" }
            p { class: "lead", "Add some changes to your profile" }
            ErrorAlert { message: error() }
            ProfileForm { form, fallback_error: "Error updating profile" }
        }
    }
}

#[component]
fn ProfileForm(
    form: Signal<ProfileFormState>,
    /// New profiles also send empty credential lists.
    #[props(default)]
    creating: bool,
    fallback_error: String,
) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut error = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let fallback = fallback_error.clone();
        spawn(async move {
            error.set(String::new());
            let state = form();
            if let Err(message) = state.validate() {
                error.set(message);
                return;
            }

            saving.set(true);
            let request = state.to_request();
            let saved = if creating {
                client.create_profile(&request).await
            } else {
                client.save_profile(&request).await
            };
            match saved {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    error.set(e.user_message(&fallback));
                }
            }
        });
    };

    rsx! {
        ErrorAlert { message: error() }
        form {
            class: "form",
            onsubmit: handle_submit,
            ProfileFields { form }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Submit" }
                }
                Link { class: "btn btn-light", to: Route::Dashboard {}, "Go Back" }
            }
        }
    }
}

//! Signed-in user's dashboard: profile summary, credentials, account deletion.

use api::{ApiError, Profile};
use dioxus::prelude::*;
use ui::icons::{FaBriefcase, FaGraduationCap, FaUserMinus, FaUserPen};
use ui::{
    use_auth, use_client, AuthState, EducationTable, ErrorAlert, ExperienceTable, Icon, Loading,
};

use crate::Route;

/// The API answers `/api/profile/me` with 400 (or 404) when the account has
/// no profile yet.
fn is_missing_profile(error: &ApiError) -> bool {
    matches!(error.status(), Some(400) | Some(404))
}

#[component]
pub fn Dashboard() -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut user_name = use_signal(String::new);
    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);
    let mut confirm_delete = use_signal(|| false);

    let mut loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                if client.guard().is_err() {
                    return;
                }
                match client.current_user().await {
                    Ok(user) => user_name.set(user.display_name().to_string()),
                    Err(e) => tracing::debug!("Could not load account: {}", e),
                }
                match client.current_profile().await {
                    Ok(found) => {
                        error.set(String::new());
                        profile.set(Some(found));
                    }
                    Err(e) if is_missing_profile(&e) => profile.set(None),
                    Err(e) => error.set(e.user_message("Error loading profile")),
                }
                loading.set(false);
            }
        }
    });

    let delete_experience = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_experience(&id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error deleting experience")),
                }
            });
        }
    };

    let delete_education = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_education(&id).await {
                    Ok(()) => loader.restart(),
                    Err(e) => error.set(e.user_message("Error deleting education")),
                }
            });
        }
    };

    let delete_account = move |_| {
        let client = client.clone();
        spawn(async move {
            match client.delete_account().await {
                Ok(()) => {
                    auth.set(AuthState::signed_out());
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    confirm_delete.set(false);
                    error.set(e.user_message("Error deleting account"));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            Loading {}
            ErrorAlert { message: error() }
        };
    }

    rsx! {
        section {
            h1 { class: "large text-primary", "Dashboard" }
            p { class: "lead", "Welcome {user_name}" }

            ErrorAlert { message: error() }

            if let Some(profile) = profile() {
                div {
                    class: "dash-buttons",
                    Link {
                        class: "btn btn-light",
                        to: Route::EditProfile {},
                        Icon { icon: FaUserPen, width: 14, height: 14 }
                        " Edit Profile"
                    }
                    Link {
                        class: "btn btn-light",
                        to: Route::AddExperience {},
                        Icon { icon: FaBriefcase, width: 14, height: 14 }
                        " Add Experience"
                    }
                    Link {
                        class: "btn btn-light",
                        to: Route::AddEducation {},
                        Icon { icon: FaGraduationCap, width: 14, height: 14 }
                        " Add Education"
                    }
                }

                h2 { class: "my-2", "Experience Credentials" }
                ExperienceTable {
                    experience: profile.experience.clone(),
                    on_delete: delete_experience,
                }

                h2 { class: "my-2", "Education Credentials" }
                EducationTable {
                    education: profile.education.clone(),
                    on_delete: delete_education,
                }
            } else {
                p { "You have not yet setup a profile, please add some info" }
                Link { class: "btn btn-primary", to: Route::CreateProfile {}, "Create Profile" }
            }

            div {
                class: "my-2",
                if confirm_delete() {
                    p { "This removes your profile, posts and account. It cannot be undone." }
                    button {
                        class: "btn btn-danger",
                        onclick: delete_account,
                        "Yes, delete my account"
                    }
                    button {
                        class: "btn btn-light",
                        onclick: move |_| confirm_delete.set(false),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| confirm_delete.set(true),
                        Icon { icon: FaUserMinus, width: 14, height: 14 }
                        " Delete My Account"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_is_recognised_by_status() {
        let missing = ApiError::Rejected {
            status: 400,
            message: Some("There is no profile for this user".into()),
        };
        assert!(is_missing_profile(&missing));
        assert!(is_missing_profile(&ApiError::NotFound { message: None }));
        assert!(!is_missing_profile(&ApiError::Server {
            status: 500,
            message: None
        }));
        assert!(!is_missing_profile(&ApiError::MissingSession));
    }
}

//! Public profile page.

use api::Profile;
use dioxus::prelude::*;
use ui::format::avatar_url;
use ui::icons::FaCheck;
use ui::{use_client, EducationTable, ErrorAlert, ExperienceTable, Icon, Loading, SocialIcons};

use crate::Route;

#[component]
pub fn ProfileView(user_id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| user_id.clone());
    if *id_signal.peek() != user_id {
        id_signal.set(user_id.clone());
    }

    let client = use_client();
    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            loading.set(true);
            error.set(String::new());
            match client.profile_by_user(&id).await {
                Ok(found) => profile.set(Some(found)),
                Err(e) => {
                    profile.set(None);
                    error.set(e.user_message("Profile not found"));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { Loading {} };
    }

    let Some(profile) = profile() else {
        return rsx! {
            ErrorAlert { message: error() }
            Link { class: "btn btn-light", to: Route::Developers {}, "Back To Profiles" }
        };
    };

    let name = profile.user.name().to_string();
    let avatar = avatar_url(profile.user.avatar());
    let headline = match profile.company.as_str() {
        "" => profile.status.clone(),
        company => format!("{} at {}", profile.status, company),
    };

    rsx! {
        Link { class: "btn btn-light", to: Route::Developers {}, "Back To Profiles" }

        div {
            class: "profile-grid",
            div {
                class: "profile-top",
                if !avatar.is_empty() {
                    img { class: "avatar round", src: "{avatar}", alt: "{name}" }
                }
                h1 { class: "large", "{name}" }
                p { class: "lead", "{headline}" }
                if !profile.location.is_empty() {
                    p { "{profile.location}" }
                }
                SocialIcons {
                    website: profile.website.clone(),
                    social: profile.social.clone(),
                }
            }

            div {
                class: "profile-about",
                if !profile.bio.is_empty() {
                    h2 { class: "text-primary", "{name}'s Bio" }
                    p { "{profile.bio}" }
                }
                h2 { class: "text-primary", "Skill Set" }
                div {
                    class: "skills",
                    for skill in profile.skills.iter() {
                        span {
                            key: "{skill}",
                            Icon { icon: FaCheck, width: 12, height: 12 }
                            " {skill}"
                        }
                    }
                }
            }

            div {
                class: "profile-exp",
                h2 { class: "text-primary", "Experience" }
                ExperienceTable { experience: profile.experience.clone() }
            }

            div {
                class: "profile-edu",
                h2 { class: "text-primary", "Education" }
                EducationTable { education: profile.education.clone() }
            }
        }
    }
}

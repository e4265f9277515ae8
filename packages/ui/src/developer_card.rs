use api::{Profile, SocialLinks};
use dioxus::prelude::*;

use crate::brands::{FaFacebook, FaInstagram, FaLinkedin, FaTwitter, FaYoutube};
use crate::format::avatar_url;
use crate::icons::{FaCheck, FaGlobe};
use crate::Icon;

/// Summary of one developer for the directory listing.
#[component]
pub fn DeveloperCard(profile: Profile, on_view: EventHandler<String>) -> Element {
    let user_id = profile.user.id().to_string();
    let name = profile.user.name().to_string();
    let avatar = avatar_url(profile.user.avatar());
    let headline = match profile.company.as_str() {
        "" => profile.status.clone(),
        company => format!("{} at {}", profile.status, company),
    };

    rsx! {
        div {
            class: "profile-card",
            if !avatar.is_empty() {
                img { class: "avatar", src: "{avatar}", alt: "{name}" }
            }
            div {
                class: "profile-card-body",
                h2 { "{name}" }
                p { "{headline}" }
                if !profile.location.is_empty() {
                    p { class: "muted", "{profile.location}" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_view.call(user_id.clone()),
                    "View Profile"
                }
            }
            ul {
                class: "skills",
                for skill in profile.skills.iter().take(4) {
                    li {
                        key: "{skill}",
                        Icon { icon: FaCheck, width: 12, height: 12 }
                        " {skill}"
                    }
                }
            }
        }
    }
}

/// Website and social network links of a profile.
#[component]
pub fn SocialIcons(website: String, social: Option<SocialLinks>) -> Element {
    let links = social.unwrap_or_default();
    rsx! {
        div {
            class: "social-icons",
            if !website.is_empty() {
                a { href: "{website}", target: "_blank", rel: "noopener noreferrer",
                    Icon { icon: FaGlobe, width: 24, height: 24 }
                }
            }
            for (network, url) in links.entries() {
                a {
                    key: "{network}",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{network}",
                    {network_icon(network)}
                }
            }
        }
    }
}

fn network_icon(network: &str) -> Element {
    match network {
        "youtube" => rsx! { Icon { icon: FaYoutube, width: 24, height: 24 } },
        "twitter" => rsx! { Icon { icon: FaTwitter, width: 24, height: 24 } },
        "facebook" => rsx! { Icon { icon: FaFacebook, width: 24, height: 24 } },
        "linkedin" => rsx! { Icon { icon: FaLinkedin, width: 24, height: 24 } },
        "instagram" => rsx! { Icon { icon: FaInstagram, width: 24, height: 24 } },
        _ => rsx! { "{network}" },
    }
}

use dioxus::prelude::*;

use store::DevConnectorConfig;
use ui::icons::{FaRightFromBracket, FaUser};
use ui::{use_auth, use_client, AuthState, Icon, Navbar, SessionProvider};
use views::{
    AddEducation, AddExperience, CreateProfile, Dashboard, Developers, Discussion, EditProfile,
    Login, NotFound, Posts, ProfileView, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/developers")]
        Developers {},
        #[route("/profile/:user_id")]
        ProfileView { user_id: String },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/create-profile")]
        CreateProfile {},
        #[route("/edit-profile")]
        EditProfile {},
        #[route("/add-experience")]
        AddExperience {},
        #[route("/add-education")]
        AddEducation {},
        #[route("/posts")]
        Posts {},
        #[route("/posts/:post_id")]
        Discussion { post_id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../devconnector.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled config, letting `api_url` replace the API host.
fn load_config(raw: &str, api_url: Option<&str>) -> DevConnectorConfig {
    let config = DevConnectorConfig::from_toml(raw).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", DevConnectorConfig::filename(), e);
        DevConnectorConfig::default()
    });
    match api_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Session context, navbar and page outlet shared by every route.
#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();
    let config = use_hook(|| load_config(CONFIG_TOML, option_env!("DEVCONNECTOR_API_URL")));

    rsx! {
        SessionProvider {
            config,
            on_login_required: move |_| {
                nav.replace(Route::Login {});
            },
            SessionNavbar {}
            main {
                class: "container",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn SessionNavbar() -> Element {
    let nav = use_navigator();
    let client = use_client();
    let mut auth = use_auth();

    let handle_logout = move |evt: MouseEvent| {
        evt.prevent_default();
        client.logout();
        auth.set(AuthState::signed_out());
        nav.push(Route::Login {});
    };

    rsx! {
        Navbar {
            on_brand: move |_| {
                nav.push(Route::Developers {});
            },
            li { Link { to: Route::Developers {}, "Developers" } }
            if auth().signed_in {
                li { Link { to: Route::Posts {}, "Posts" } }
                li {
                    Link {
                        to: Route::Dashboard {},
                        Icon { icon: FaUser, width: 14, height: 14 }
                        " Dashboard"
                    }
                }
                li {
                    a {
                        href: "#",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        " Logout"
                    }
                }
            } else {
                li { Link { to: Route::Register {}, "Register" } }
                li { Link { to: Route::Login {}, "Login" } }
            }
        }
    }
}

/// Redirect `/` to `/developers`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Developers {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = load_config(CONFIG_TOML, None);
        assert_eq!(config, DevConnectorConfig::default());
    }

    #[test]
    fn build_time_url_overrides_config() {
        let config = load_config(CONFIG_TOML, Some("https://api.example.com"));
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.session.token_key, "Token");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = load_config(CONFIG_TOML, Some("  "));
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = load_config("[api\nbase_url = 1", None);
        assert_eq!(config, DevConnectorConfig::default());
    }

    #[test]
    fn routes_render_to_expected_paths() {
        assert_eq!(
            Route::ProfileView {
                user_id: "u1".into()
            }
            .to_string(),
            "/profile/u1"
        );
        assert_eq!(
            Route::Discussion {
                post_id: "p1".into()
            }
            .to_string(),
            "/posts/p1"
        );
        assert_eq!(Route::AddEducation {}.to_string(), "/add-education");
    }
}

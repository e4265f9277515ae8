//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

mod client;
pub use client::{make_client, use_client, Client, PlatformStore};

mod auth;
pub use auth::{use_auth, use_session_guard, AuthState, SessionProvider};

pub mod format;
pub mod forms;
pub use forms::{EducationFormState, ExperienceFormState, ProfileFormState};

mod navbar;
pub use navbar::Navbar;

mod alert;
pub use alert::{ErrorAlert, Loading};

mod developer_card;
pub use developer_card::{DeveloperCard, SocialIcons};

mod post_card;
pub use post_card::{CommentList, PostCard};

mod credentials;
pub use credentials::{EducationTable, ExperienceTable};

mod profile_fields;
pub use profile_fields::ProfileFields;

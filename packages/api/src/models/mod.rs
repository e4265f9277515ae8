//! Wire models for the DevConnector API.
//!
//! Response types default every field so that partially populated documents
//! still decode; request types serialize exactly the fields the API expects.

mod nullable;
mod post;
mod profile;
mod user;

pub use post::{Comment, Like, Post, PostText};
pub use profile::{
    Education, EducationRequest, Experience, ExperienceRequest, Profile, ProfileOwner,
    ProfileRequest, ProfileUser, SocialLinks,
};
pub use user::{AuthToken, Credentials, Registration, User};

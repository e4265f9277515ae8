//! Profile endpoints: the signed-in user's profile, its credentials, and the
//! public developer directory.

use serde_json::Value;
use store::KeyValueStore;

use crate::client::{json_body, Access, ApiClient};
use crate::error::ApiError;
use crate::models::{EducationRequest, ExperienceRequest, Profile, ProfileRequest};
use crate::transport::{HttpTransport, Method};

impl<S: KeyValueStore, T: HttpTransport> ApiClient<S, T> {
    /// `POST /api/profile` for a new profile. The body also starts the
    /// credential lists empty.
    pub async fn create_profile(&self, profile: &ProfileRequest) -> Result<Profile, ApiError> {
        let mut body = json_body(profile)?;
        if let Value::Object(fields) = &mut body {
            fields.insert("experience".to_string(), Value::Array(Vec::new()));
            fields.insert("education".to_string(), Value::Array(Vec::new()));
        }
        self.fetch(Method::Post, "/api/profile", Some(body), Access::Private)
            .await
    }

    /// `POST /api/profile` for an existing profile. Credentials are left out
    /// so the API keeps the entries it has.
    pub async fn save_profile(&self, profile: &ProfileRequest) -> Result<Profile, ApiError> {
        let body = json_body(profile)?;
        self.fetch(Method::Post, "/api/profile", Some(body), Access::Private)
            .await
    }

    /// `GET /api/profile/me`.
    pub async fn current_profile(&self) -> Result<Profile, ApiError> {
        self.fetch(Method::Get, "/api/profile/me", None, Access::Private)
            .await
    }

    /// `GET /api/profile`: every developer profile. Public.
    pub async fn profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.fetch(Method::Get, "/api/profile", None, Access::Public)
            .await
    }

    /// `GET /api/profile/user/:id`. Public.
    pub async fn profile_by_user(&self, user_id: &str) -> Result<Profile, ApiError> {
        self.fetch(
            Method::Get,
            &format!("/api/profile/user/{user_id}"),
            None,
            Access::Public,
        )
        .await
    }

    /// `PUT /api/profile/experience`: append one experience entry.
    pub async fn add_experience(&self, entry: &ExperienceRequest) -> Result<Profile, ApiError> {
        let body = json_body(entry)?;
        self.fetch(Method::Put, "/api/profile/experience", Some(body), Access::Private)
            .await
    }

    /// `PUT /api/profile/education`: append one education entry.
    pub async fn add_education(&self, entry: &EducationRequest) -> Result<Profile, ApiError> {
        let body = json_body(entry)?;
        self.fetch(Method::Put, "/api/profile/education", Some(body), Access::Private)
            .await
    }

    pub async fn delete_experience(&self, experience_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::Delete,
            &format!("/api/profile/experience/{experience_id}"),
            None,
            Access::Private,
        )
        .await
    }

    pub async fn delete_education(&self, education_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::Delete,
            &format!("/api/profile/education/{education_id}"),
            None,
            Access::Private,
        )
        .await
    }

    /// `DELETE /api/profile`: removes the profile, posts and account, then
    /// ends the local session.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.execute(Method::Delete, "/api/profile", None, Access::Private)
            .await?;
        self.session.clear_session();
        tracing::info!("Account deleted");
        Ok(())
    }
}

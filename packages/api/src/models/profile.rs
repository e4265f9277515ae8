//! # Profile models
//!
//! One canonical [`Profile`] shape serves the dashboard, the developer list,
//! the profile viewer and the edit form.
//!
//! The `user` field is populated (`{_id, name, avatar}`) by the read
//! endpoints but comes back as a bare id from `POST /api/profile`, so it is
//! modelled as the untagged [`ProfileOwner`].
//!
//! Credential entries carry `from`/`to` as the API's date strings. A missing
//! `to` (or `current: true`) means the entry is ongoing.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Account summary embedded in a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUser {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
}

/// Owner of a profile: populated account or bare account id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProfileOwner {
    User(ProfileUser),
    Id(String),
}

impl Default for ProfileOwner {
    fn default() -> Self {
        ProfileOwner::Id(String::new())
    }
}

impl ProfileOwner {
    pub fn id(&self) -> &str {
        match self {
            ProfileOwner::User(user) => &user.id,
            ProfileOwner::Id(id) => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProfileOwner::User(user) => &user.name,
            ProfileOwner::Id(_) => "",
        }
    }

    pub fn avatar(&self) -> &str {
        match self {
            ProfileOwner::User(user) => &user.avatar,
            ProfileOwner::Id(_) => "",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub youtube: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub twitter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facebook: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instagram: String,
}

impl SocialLinks {
    /// `(network, url)` pairs for the links that are set.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("youtube", self.youtube.as_str()),
            ("twitter", self.twitter.as_str()),
            ("facebook", self.facebook.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.current || self.to.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fieldofstudy: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Education {
    pub fn is_current(&self) -> bool {
        self.current || self.to.as_deref().map_or(true, str::is_empty)
    }
}

/// A developer profile as returned by the profile endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: ProfileOwner,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub githubusername: String,
    #[serde(default)]
    pub social: Option<SocialLinks>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

/// Body of `POST /api/profile`, used for both create and edit.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProfileRequest {
    pub status: String,
    pub company: String,
    pub website: String,
    pub location: String,
    pub skills: Vec<String>,
    pub githubusername: String,
    pub bio: String,
    pub social: SocialLinks,
}

/// Body of `PUT /api/profile/experience`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    pub description: String,
}

/// Body of `PUT /api/profile/education`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_profile_decodes() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "_id": "pr1",
                "user": {"_id": "u1", "name": "Ada", "avatar": "//gravatar/ada"},
                "status": "Developer",
                "company": "Analytical Engines",
                "skills": ["Rust", "Math"],
                "social": {"twitter": "https://twitter.com/ada"},
                "experience": [{"_id": "e1", "title": "Dev", "company": "AE", "from": "2020-01-01T00:00:00.000Z", "to": null, "current": true}],
                "education": [{"_id": "d1", "school": "Home", "degree": "BSc", "fieldofstudy": "Math", "from": "2010-01-01", "to": "2014-01-01"}]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.user.id(), "u1");
        assert_eq!(profile.user.name(), "Ada");
        assert_eq!(profile.skills, vec!["Rust", "Math"]);
        assert!(profile.experience[0].is_current());
        assert!(!profile.education[0].is_current());
        assert_eq!(profile.website, "");
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "_id": "pr1",
                "user": null,
                "status": null,
                "bio": null,
                "experience": [{"_id": "e1", "title": "Dev", "company": null, "from": "2020-01-01", "current": null}],
                "education": null
            }"#,
        )
        .unwrap();
        assert_eq!(profile.user, ProfileOwner::default());
        assert_eq!(profile.status, "");
        assert_eq!(profile.experience[0].company, "");
        assert!(!profile.experience[0].current);
        assert!(profile.education.is_empty());
    }

    #[test]
    fn unpopulated_owner_decodes_as_id() {
        let profile: Profile =
            serde_json::from_str(r#"{"_id": "pr1", "user": "u1", "status": "Developer"}"#).unwrap();
        assert_eq!(profile.user, ProfileOwner::Id("u1".to_string()));
        assert_eq!(profile.user.id(), "u1");
        assert_eq!(profile.user.name(), "");
    }

    #[test]
    fn social_entries_skip_empty_links() {
        let social = SocialLinks {
            twitter: "https://twitter.com/ada".into(),
            linkedin: "  ".into(),
            ..SocialLinks::default()
        };
        assert_eq!(social.entries(), vec![("twitter", "https://twitter.com/ada")]);
    }

    #[test]
    fn current_experience_omits_to() {
        let body = serde_json::to_value(ExperienceRequest {
            title: "Dev".into(),
            company: "AE".into(),
            from: "2020-01-01".into(),
            current: true,
            ..ExperienceRequest::default()
        })
        .unwrap();
        assert!(body.get("to").is_none());
        assert_eq!(body["current"], true);
        assert_eq!(body["location"], "");
    }

    #[test]
    fn profile_request_carries_social_object() {
        let body = serde_json::to_value(ProfileRequest {
            status: "Developer".into(),
            skills: vec!["Rust".into()],
            ..ProfileRequest::default()
        })
        .unwrap();
        assert_eq!(body["skills"][0], "Rust");
        assert_eq!(body["social"]["youtube"], "");
    }
}

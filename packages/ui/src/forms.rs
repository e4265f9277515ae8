//! Form state for the profile and credential pages.
//!
//! Inputs are kept as plain strings while the user edits; conversion to the
//! API request bodies happens on submit.

use api::{EducationRequest, ExperienceRequest, Profile, ProfileRequest, SocialLinks};

/// Choices for the professional status select.
pub const STATUS_OPTIONS: &[&str] = &[
    "Developer",
    "Junior Developer",
    "Senior Developer",
    "Manager",
    "Student",
    "Instructor",
    "Other",
];

/// Split a comma separated skill list, dropping blanks.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fields of the create and edit profile forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormState {
    pub status: String,
    pub company: String,
    pub website: String,
    pub location: String,
    /// Comma separated, as typed.
    pub skills: String,
    pub githubusername: String,
    pub bio: String,
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

impl ProfileFormState {
    /// Prefill the edit form from an existing profile.
    pub fn from_profile(profile: &Profile) -> Self {
        let social = profile.social.clone().unwrap_or_default();
        Self {
            status: profile.status.clone(),
            company: profile.company.clone(),
            website: profile.website.clone(),
            location: profile.location.clone(),
            skills: profile.skills.join(", "),
            githubusername: profile.githubusername.clone(),
            bio: profile.bio.clone(),
            youtube: social.youtube,
            twitter: social.twitter,
            facebook: social.facebook,
            linkedin: social.linkedin,
            instagram: social.instagram,
        }
    }

    /// Status and at least one skill are required.
    pub fn validate(&self) -> Result<(), String> {
        if self.status.trim().is_empty() {
            return Err("Status is required".to_string());
        }
        if parse_skills(&self.skills).is_empty() {
            return Err("Skills is required".to_string());
        }
        Ok(())
    }

    pub fn to_request(&self) -> ProfileRequest {
        ProfileRequest {
            status: self.status.trim().to_string(),
            company: self.company.trim().to_string(),
            website: self.website.trim().to_string(),
            location: self.location.trim().to_string(),
            skills: parse_skills(&self.skills),
            githubusername: self.githubusername.trim().to_string(),
            bio: self.bio.trim().to_string(),
            social: SocialLinks {
                youtube: self.youtube.trim().to_string(),
                twitter: self.twitter.trim().to_string(),
                facebook: self.facebook.trim().to_string(),
                linkedin: self.linkedin.trim().to_string(),
                instagram: self.instagram.trim().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceFormState {
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceFormState {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.company.trim().is_empty() {
            return Err("Company is required".to_string());
        }
        if self.from.trim().is_empty() {
            return Err("From date is required".to_string());
        }
        Ok(())
    }

    /// A current job is sent without an end date.
    pub fn to_request(&self) -> ExperienceRequest {
        ExperienceRequest {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            from: self.from.trim().to_string(),
            to: end_date(&self.to, self.current),
            current: self.current,
            description: self.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationFormState {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

impl EducationFormState {
    pub fn validate(&self) -> Result<(), String> {
        if self.school.trim().is_empty() {
            return Err("School is required".to_string());
        }
        if self.degree.trim().is_empty() {
            return Err("Degree is required".to_string());
        }
        if self.fieldofstudy.trim().is_empty() {
            return Err("Field of study is required".to_string());
        }
        if self.from.trim().is_empty() {
            return Err("From date is required".to_string());
        }
        Ok(())
    }

    pub fn to_request(&self) -> EducationRequest {
        EducationRequest {
            school: self.school.trim().to_string(),
            degree: self.degree.trim().to_string(),
            fieldofstudy: self.fieldofstudy.trim().to_string(),
            from: self.from.trim().to_string(),
            to: end_date(&self.to, self.current),
            current: self.current,
            description: self.description.trim().to_string(),
        }
    }
}

fn end_date(to: &str, current: bool) -> Option<String> {
    let to = to.trim();
    if current || to.is_empty() {
        None
    } else {
        Some(to.to_string())
    }
}

#[cfg(test)]
mod tests {
    use api::ProfileOwner;

    use super::*;

    #[test]
    fn skills_are_split_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_skills(" Rust, SQL ,,  , Dioxus,"),
            vec!["Rust", "SQL", "Dioxus"]
        );
        assert!(parse_skills(" , ").is_empty());
    }

    #[test]
    fn edit_form_round_trips_an_existing_profile() {
        let profile = Profile {
            id: "pr1".into(),
            user: ProfileOwner::Id("u1".into()),
            status: "Developer".into(),
            company: "AE".into(),
            skills: vec!["Rust".into(), "SQL".into()],
            social: Some(SocialLinks {
                twitter: "https://twitter.com/ada".into(),
                ..SocialLinks::default()
            }),
            ..Profile::default()
        };

        let form = ProfileFormState::from_profile(&profile);
        assert_eq!(form.skills, "Rust, SQL");
        assert_eq!(form.twitter, "https://twitter.com/ada");

        let request = form.to_request();
        assert_eq!(request.status, "Developer");
        assert_eq!(request.company, "AE");
        assert_eq!(request.skills, profile.skills);
        assert_eq!(request.social.twitter, "https://twitter.com/ada");
        assert_eq!(request.social.youtube, "");
    }

    #[test]
    fn profile_without_social_prefills_blank_links() {
        let form = ProfileFormState::from_profile(&Profile::default());
        assert_eq!(form, ProfileFormState::default());
    }

    #[test]
    fn profile_form_requires_status_and_skills() {
        let mut form = ProfileFormState::default();
        assert_eq!(form.validate(), Err("Status is required".to_string()));
        form.status = "Student".into();
        form.skills = " , ".into();
        assert_eq!(form.validate(), Err("Skills is required".to_string()));
        form.skills = "Rust".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn current_experience_drops_end_date() {
        let form = ExperienceFormState {
            title: "Dev".into(),
            company: "AE".into(),
            from: "2020-01-01".into(),
            to: "2021-01-01".into(),
            current: true,
            ..ExperienceFormState::default()
        };
        let request = form.to_request();
        assert_eq!(request.to, None);
        assert!(request.current);
    }

    #[test]
    fn finished_education_keeps_end_date() {
        let form = EducationFormState {
            school: "Home".into(),
            degree: "BSc".into(),
            fieldofstudy: "Math".into(),
            from: "2010-09-01".into(),
            to: " 2014-06-30 ".into(),
            ..EducationFormState::default()
        };
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.to_request().to.as_deref(), Some("2014-06-30"));
    }

    #[test]
    fn credential_forms_report_first_missing_field() {
        let experience = ExperienceFormState {
            title: "Dev".into(),
            ..ExperienceFormState::default()
        };
        assert_eq!(experience.validate(), Err("Company is required".to_string()));

        let education = EducationFormState {
            school: "Home".into(),
            degree: "BSc".into(),
            ..EducationFormState::default()
        };
        assert_eq!(
            education.validate(),
            Err("Field of study is required".to_string())
        );
    }
}

//! User profile domain model.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which side of the job board the account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    /// A job seeker.
    Worker,
    /// An account posting vacancies.
    Employer,
}

/// The registered user.
///
/// Optional fields form the worker's resume/profile section and are filled in
/// later via [`ProfilePatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account id, generated at registration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: UserRole,
    /// Short professional tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Free-form bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Skill list shown on the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Work-experience summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// Avatar image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

/// A partial profile update.
///
/// Each field is optional; only the fields that are present overwrite the
/// corresponding user attribute. The account id and role are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub photo_uri: Option<String>,
}

impl ProfilePatch {
    /// Applies the patch to `user`, field by field.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(headline) = self.headline {
            user.headline = Some(headline);
        }
        if let Some(about) = self.about {
            user.about = Some(about);
        }
        if let Some(skills) = self.skills {
            user.skills = Some(skills);
        }
        if let Some(experience) = self.experience {
            user.experience = Some(experience);
        }
        if let Some(photo_uri) = self.photo_uri {
            user.photo_uri = Some(photo_uri);
        }
    }

    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Anna".to_string(),
            role: UserRole::Worker,
            headline: None,
            about: Some("old bio".to_string()),
            skills: None,
            experience: None,
            photo_uri: None,
        }
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut patched = user();
        ProfilePatch {
            headline: Some("React Native developer".to_string()),
            skills: Some(vec!["React".to_string(), "TypeScript".to_string()]),
            ..Default::default()
        }
        .apply(&mut patched);

        assert_eq!(patched.headline.as_deref(), Some("React Native developer"));
        assert_eq!(patched.skills.as_ref().unwrap().len(), 2);
        // Untouched fields survive.
        assert_eq!(patched.name, "Anna");
        assert_eq!(patched.about.as_deref(), Some("old bio"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Employer).unwrap();
        assert_eq!(json, "\"employer\"");
        assert_eq!(UserRole::Worker.to_string(), "worker");
    }
}

use serde::{Deserialize, Serialize};

/// Site owner profile, rendered on the about page and interpolated into
/// the resume export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update for the profile. Resume sections (skills, experience,
/// education, certifications) are replaced wholesale when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub certifications: Option<Vec<String>>,
}

impl Profile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(github) = patch.github {
            self.github = github;
        }
        if let Some(linkedin) = patch.linkedin {
            self.linkedin = linkedin;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
        if let Some(certifications) = patch.certifications {
            self.certifications = certifications;
        }
    }
}

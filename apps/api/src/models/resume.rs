//! Structured resume document consumed by the ATS engine.
//!
//! Every list defaults to empty and every scalar may be absent, so any JSON
//! object deserializes into a scoreable document.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    /// Bullet points. Also accepted as `description` on the wire.
    #[serde(alias = "description", deserialize_with = "non_blank_strings")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: Option<String>,
    #[serde(deserialize_with = "non_blank_strings")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    pub link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

impl ResumeDocument {
    /// Concatenates every free-text field into one space-separated string.
    pub fn full_text(&self) -> String {
        let info = &self.personal_info;
        let mut parts: Vec<&str> = vec![
            info.name.as_deref().unwrap_or(""),
            info.title.as_deref().unwrap_or(""),
            info.location.as_deref().unwrap_or(""),
        ];
        if let Some(summary) = self.summary.as_deref() {
            parts.push(summary);
        }

        for exp in &self.experience {
            parts.push(exp.company.as_deref().unwrap_or(""));
            parts.push(exp.position.as_deref().unwrap_or(""));
            parts.push(exp.location.as_deref().unwrap_or(""));
            parts.extend(exp.bullets.iter().map(String::as_str));
        }

        for edu in &self.education {
            parts.push(edu.institution.as_deref().unwrap_or(""));
            parts.push(edu.degree.as_deref().unwrap_or(""));
            parts.push(edu.field.as_deref().unwrap_or(""));
            parts.extend(edu.highlights.iter().map(String::as_str));
        }

        for group in &self.skills {
            parts.push(group.category.as_deref().unwrap_or(""));
            parts.extend(group.items.iter().map(String::as_str));
        }

        for proj in &self.projects {
            parts.push(proj.name.as_deref().unwrap_or(""));
            parts.push(proj.description.as_deref().unwrap_or(""));
            parts.extend(proj.highlights.iter().map(String::as_str));
            parts.extend(proj.technologies.iter().map(String::as_str));
        }

        parts.join(" ")
    }

    /// All experience bullets in document order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|exp| exp.bullets.iter().map(String::as_str))
    }
}

/// True when the optional field holds something other than whitespace.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().filter(|s| !s.trim().is_empty()).collect())
}

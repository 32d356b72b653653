//! Payload schemas for the content endpoints.
//!
//! Each endpoint returns a fixed JSON shape; the required `Vec` field on
//! every section payload doubles as the structural predicate a response
//! must satisfy (deserialization fails when it is missing or not an array).
//! Field names follow the JSON's camelCase via serde renames.

use serde::Deserialize;

/// `home.json`: hero name and the roles cycled by the typewriter.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HomeData {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// `about.json`: markdown body plus an optional portrait.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub about: String,
    #[serde(default)]
    pub image_source: Option<String>,
}

/// `skills.json`: intro paragraph and categorized skill grid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillsData {
    #[serde(default)]
    pub intro: String,
    pub skills: Vec<SkillCategory>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub icon: String,
    pub title: String,
}

/// `education.json`: school cards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EducationData {
    pub education: Vec<EducationRecord>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    /// Date range line (e.g. "2015 - 2019").
    pub title: String,
    pub card_title: String,
    pub card_subtitle: String,
}

/// `experiences.json`: work history timeline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperiencesData {
    pub experiences: Vec<ExperienceRecord>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub work_type: String,
    #[serde(default)]
    pub date_text: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub work_description: Vec<String>,
}

/// `projects.json`: project cards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    /// Markdown body.
    pub body_text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectLink {
    pub text: String,
    pub href: String,
}

/// `social.json`: brand links for the hero row.
///
/// Entries missing either field are skipped at render time, not errors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialData {
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

/// `routes.json`: optional server-delivered navigation sections.
///
/// A missing or malformed `sections` field means "use the defaults";
/// it is never an error surfaced to the user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoutesData {
    #[serde(default)]
    pub sections: Option<Vec<SectionEntry>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    pub header_title: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_payload_with_sections() {
        let data: RoutesData = serde_json::from_str(
            r#"{ "sections": [{ "headerTitle": "Work", "path": "/work" }] }"#,
        )
        .unwrap();
        let sections = data.sections.unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header_title, "Work");
        assert_eq!(sections[0].path, "/work");
    }

    #[test]
    fn test_routes_payload_missing_sections() {
        let data: RoutesData = serde_json::from_str(r#"{ "other": 1 }"#).unwrap();
        assert_eq!(data.sections, None);
    }

    #[test]
    fn test_routes_payload_malformed_sections_is_decode_error() {
        let result = serde_json::from_str::<RoutesData>(r#"{ "sections": "nope" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_section_payload_requires_array() {
        // Structural predicate: `skills` must be present and an array.
        assert!(serde_json::from_str::<SkillsData>(r#"{ "intro": "hi" }"#).is_err());
        assert!(serde_json::from_str::<SkillsData>(r#"{ "skills": {} }"#).is_err());

        let data: SkillsData = serde_json::from_str(r#"{ "skills": [] }"#).unwrap();
        assert!(data.skills.is_empty());
    }

    #[test]
    fn test_project_optional_fields_default() {
        let data: ProjectsData = serde_json::from_str(
            r#"{ "projects": [{ "title": "Folio", "bodyText": "A portfolio." }] }"#,
        )
        .unwrap();
        let project = &data.projects[0];
        assert!(project.image.is_none());
        assert!(project.links.is_empty());
        assert!(project.tags.is_empty());
    }
}

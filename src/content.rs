use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("Invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Site-relative path of the profile picture.
    pub image: String,
    /// Site-relative path of the resume PDF.
    pub resume: String,
    pub summary: String,
    pub education: Education,
    pub strengths: Vec<String>,
    pub interests: String,
    #[serde(default)]
    pub copyright_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn badge_class(self) -> &'static str {
        match self {
            Proficiency::Advanced => "bg-green-600 text-white",
            Proficiency::Intermediate => "bg-blue-600 text-white",
            Proficiency::Beginner => "bg-gray-600 text-white",
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

pub const MAX_SKILL_DOTS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
    pub description: String,
    pub color_class: String,
    pub dots: u8,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub summary: String,
    pub icon_class: String,
    pub tag_class: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub duration: String,
    pub client: String,
    pub description: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    pub business_objective: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub detail: String,
    pub link: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    /// Third-party relay receiving the `name`, `email` and `message` form fields.
    pub form_endpoint: String,
}

pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    parse(raw)
}

pub fn parse(raw: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> ContentError {
    ContentError::Invalid {
        field: field.into(),
        reason: reason.into(),
    }
}

fn check_url(field: &str, url: &str) -> Result<(), ContentError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(invalid(field, format!("expected an http(s) URL, got {url:?}")))
    }
}

fn check_asset(field: &str, path: &str) -> Result<(), ContentError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a site-relative path, got {path:?}")))
    }
}

impl Portfolio {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(invalid("profile.name", "must not be empty"));
        }
        check_asset("profile.image", &self.profile.image)?;
        check_asset("profile.resume", &self.profile.resume)?;

        for skill in &self.skills {
            if skill.dots > MAX_SKILL_DOTS {
                return Err(invalid(
                    format!("skills.{}.dots", skill.name),
                    format!("{} is more than {MAX_SKILL_DOTS}", skill.dots),
                ));
            }
            if skill.percent > 100 {
                return Err(invalid(
                    format!("skills.{}.percent", skill.name),
                    format!("{} is more than 100", skill.percent),
                ));
            }
        }
        for project in &self.projects {
            check_url(&format!("projects.{}.link", project.title), &project.link)?;
        }
        for cert in &self.certifications {
            check_url(&format!("certifications.{}.link", cert.title), &cert.link)?;
        }
        check_url("contact.github", &self.contact.github)?;
        check_url("contact.linkedin", &self.contact.linkedin)?;
        check_url("contact.form_endpoint", &self.contact.form_endpoint)?;
        Ok(())
    }

    /// Year shown in the footer; falls back to the year the site was built.
    pub fn copyright_year(&self) -> i32 {
        self.profile.copyright_year.unwrap_or_else(build_year)
    }
}

pub fn build_year() -> i32 {
    env!("BUILD_YEAR")
        .parse()
        .unwrap_or_else(|_| Utc::now().year())
}

/// When this binary was built, as stamped by the build script.
pub fn build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> Portfolio {
        portfolio().expect("embedded portfolio should load").clone()
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let p = embedded();
        assert!(!p.profile.name.is_empty());
        assert_eq!(p.skills.len(), 8);
        assert_eq!(p.projects.len(), 2);
        assert_eq!(p.certifications.len(), 4);
        assert!(p.contact.form_endpoint.starts_with("https://"));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_parse_error() {
        let err = parse("{ \"profile\": 1 }").expect_err("garbage should not parse");
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_too_many_dots() {
        let mut p = embedded();
        p.skills[0].dots = 6;
        let err = p.validate().expect_err("six dots is too many");
        match err {
            ContentError::Invalid { field, .. } => {
                assert_eq!(field, format!("skills.{}.dots", p.skills[0].name))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_percent_over_100() {
        let mut p = embedded();
        p.skills[1].percent = 101;
        assert!(matches!(
            p.validate(),
            Err(ContentError::Invalid { .. })
        ));
    }

    #[test]
    fn test_bad_links() {
        let mut p = embedded();
        p.contact.form_endpoint = "formspree.io/f/abc".to_string();
        assert!(p.validate().is_err());

        let mut p = embedded();
        p.profile.resume = "resume.pdf".to_string();
        let err = p.validate().expect_err("relative resume path");
        assert!(err.to_string().contains("profile.resume"));
    }

    #[test]
    fn test_copyright_year() {
        let mut p = embedded();
        p.profile.copyright_year = Some(2025);
        assert_eq!(p.copyright_year(), 2025);

        p.profile.copyright_year = None;
        assert!(p.copyright_year() >= 2024);
    }

    #[test]
    fn test_build_stamp() {
        let built = build_time().expect("build script should stamp an RFC 3339 time");
        assert_eq!(built.year(), build_year());
    }
}

use bevy::prelude::Resource;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("../../portfolio_content.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    pub about: AboutContent,
    pub experience: ExperienceContent,
    pub skills: SkillsContent,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExperienceContent {
    pub title: String,
    pub resume_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillsContent {
    pub title: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillItem {
    pub text: String,
    pub url: Option<String>,
}

impl PortfolioContent {
    pub fn from_toml(content: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(content)?)
    }

    /// Content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = PortfolioContent::embedded().expect("embedded content should parse");

        assert_eq!(content.name, "Steve Meckman");
        assert_eq!(content.about.title, "About Me");
        assert!(content.experience.resume_url.ends_with("resume.pdf"));
        assert_eq!(content.skills.categories.len(), 6);
    }

    #[test]
    fn links_are_optional() {
        let content = PortfolioContent::embedded().expect("embedded content should parse");
        let javascript = &content.skills.categories[1];

        assert_eq!(javascript.category, "JavaScript");
        assert_eq!(javascript.items[0].url, None);
        assert_eq!(
            javascript.items[3].url.as_deref(),
            Some("https://gist.github.com/smeckman")
        );
    }

    #[test]
    fn missing_sections_are_an_error() {
        let result = PortfolioContent::from_toml(r#"name = "Nobody""#);

        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}

// src/portfolio.rs

use serde::{Deserialize, Serialize};

pub const PORTFOLIO_FILE_NAME: &str = "portfolio.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub name: String,
    pub title: String,
    pub bio: String,

    // may be a data: URI after an image edit
    pub avatar_url: String,

    pub contact: Contact,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,

    // absent or empty disables editing entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    #[serde(rename = "Tools & DevOps")]
    ToolsDevOps,
    Languages,
}

impl SkillCategory {
    /// Display order of the skill groups.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::ToolsDevOps,
        SkillCategory::Languages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::ToolsDevOps => "Tools & DevOps",
            SkillCategory::Languages => "Languages",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub duration: String,
    pub description: Vec<String>,
}

impl PortfolioRecord {
    /// Password that unlocks edit mode, if editing is enabled for this document.
    pub fn configured_password(&self) -> Option<&str> {
        self.edit_password.as_deref().filter(|p| !p.is_empty())
    }

    /// Skills of one category, each paired with its index in the flat list.
    pub fn skills_in(&self, category: SkillCategory) -> Vec<(usize, &Skill)> {
        self.skills
            .iter()
            .enumerate()
            .filter(|(_, s)| s.category == category)
            .collect()
    }
}

// ======================================================
// Unit Tests
// ======================================================

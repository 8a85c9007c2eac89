//! Portfolio fact store: the immutable record every reply is built from.
//!
//! Constructed once at startup (built-in canonical profile, or a JSON file via
//! `PROFILE_PATH`) and shared read-only behind an `Arc`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod canonical;

pub use canonical::canonical_profile;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("profile must list at least one project")]
    NoProjects,

    #[error("profile must list at least one {0} skill")]
    NoSkills(&'static str),

    #[error("profile must list at least one experience entry")]
    NoExperience,
}

/// Skill names grouped by category. Each list keeps its authored order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    pub programming: Vec<String>,
    pub ai_ml: Vec<String>,
    pub frameworks: Vec<String>,
    pub web: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Programming,
    AiMl,
    Frameworks,
    Web,
    Databases,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::AiMl,
        SkillCategory::Frameworks,
        SkillCategory::Web,
        SkillCategory::Databases,
        SkillCategory::Tools,
    ];

    /// Human-readable label used in the system prompt.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::AiMl => "AI/ML",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Web => "Web Technologies",
            SkillCategory::Databases => "Databases",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::AiMl => &self.ai_ml,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Web => &self.web,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tools => &self.tools,
        }
    }

    /// The first `n` skills of a category (fewer if the category is shorter).
    pub fn top(&self, category: SkillCategory, n: usize) -> &[String] {
        let all = self.get(category);
        &all[..n.min(all.len())]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioProfile {
    pub name: String,
    pub role: String,
    pub location: String,
    /// Total experience as written, e.g. "3+ years".
    pub experience: String,
    pub education: String,
    pub email: String,
    pub phone: String,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub experience_details: Vec<ExperienceEntry>,
    pub certifications: Vec<String>,
}

impl PortfolioProfile {
    /// Loads a profile from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;
        let profile: PortfolioProfile = serde_json::from_str(&raw)
            .with_context(|| format!("Profile file '{}' is not valid JSON", path.display()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the fields every reply template relies on, so no reply ever
    /// renders with a blank slot.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let required = [
            ("name", &self.name),
            ("role", &self.role),
            ("location", &self.location),
            ("experience", &self.experience),
            ("education", &self.education),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProfileError::EmptyField(field));
            }
        }
        for category in [SkillCategory::AiMl, SkillCategory::Programming] {
            if !self.skills.get(category).iter().any(|s| !s.trim().is_empty()) {
                return Err(ProfileError::NoSkills(category.label()));
            }
        }
        if !self.projects.iter().any(|p| !p.name.trim().is_empty()) {
            return Err(ProfileError::NoProjects);
        }
        if !self
            .experience_details
            .iter()
            .any(|e| !e.company.trim().is_empty())
        {
            return Err(ProfileError::NoExperience);
        }
        Ok(())
    }

    /// Names of the first `n` projects.
    pub fn featured_projects(&self, n: usize) -> Vec<&str> {
        self.projects.iter().take(n).map(|p| p.name.as_str()).collect()
    }

    /// Employers of the first `n` experience entries.
    pub fn recent_employers(&self, n: usize) -> Vec<&str> {
        self.experience_details
            .iter()
            .take(n)
            .map(|e| e.company.as_str())
            .collect()
    }
}

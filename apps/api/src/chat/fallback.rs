//! Keyword fallback: canned replies used whenever the completion API can't answer.
//!
//! Rules are checked in table order and the first rule with any keyword contained
//! in the lower-cased message wins. Matching is plain substring containment, so
//! "hi" also matches "this" and "work" matches "network".

use crate::chat::prompts::{
    CONTACT_REPLY, DEFAULT_REPLY, EDUCATION_REPLY, EXPERIENCE_REPLY, GREETING_REPLY,
    LOCATION_REPLY, PROJECTS_REPLY, SKILLS_REPLY,
};
use crate::chat::template::render;
use crate::profile::PortfolioProfile;

/// Topic a fallback rule answers. Exposed for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Greeting,
    Location,
    General,
}

pub struct FallbackRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub template: &'static str,
}

pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        topic: Topic::Skills,
        keywords: &["skill", "technology", "tech"],
        template: SKILLS_REPLY,
    },
    FallbackRule {
        topic: Topic::Projects,
        keywords: &["project", "work", "portfolio"],
        template: PROJECTS_REPLY,
    },
    FallbackRule {
        topic: Topic::Experience,
        keywords: &["experience", "background", "career"],
        template: EXPERIENCE_REPLY,
    },
    FallbackRule {
        topic: Topic::Education,
        keywords: &["education", "qualification", "degree"],
        template: EDUCATION_REPLY,
    },
    FallbackRule {
        topic: Topic::Contact,
        keywords: &["contact", "hire", "email", "reach"],
        template: CONTACT_REPLY,
    },
    FallbackRule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey", "greet"],
        template: GREETING_REPLY,
    },
    FallbackRule {
        topic: Topic::Location,
        keywords: &["location", "where", "based"],
        template: LOCATION_REPLY,
    },
];

/// Returns the first rule whose keywords appear in `message`, if any.
pub fn match_rule(message: &str) -> Option<&'static FallbackRule> {
    let msg = message.to_lowercase();
    FALLBACK_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| msg.contains(k)))
}

/// Topic the fallback would answer `message` with.
pub fn classify(message: &str) -> Topic {
    match_rule(message).map_or(Topic::General, |r| r.topic)
}

/// Canned reply for `message`, interpolated from the profile.
pub fn fallback_response(message: &str, profile: &PortfolioProfile) -> String {
    let template = match_rule(message).map_or(DEFAULT_REPLY, |r| r.template);
    render(template, profile)
}

//! Placeholder interpolation for prompt and reply templates.
//!
//! Which profile facts a template shows is decided by the placeholders it uses;
//! this module only knows how to produce each placeholder's value.

use crate::chat::prompts::SYSTEM_PROMPT_TEMPLATE;
use crate::profile::{PortfolioProfile, SkillCategory};

const TOP_SKILLS: usize = 3;
const FEATURED_PROJECTS: usize = 2;
const RECENT_EMPLOYERS: usize = 2;

/// Fills every known `{placeholder}` in `template` from the profile.
/// Unknown placeholders are left untouched.
pub fn render(template: &str, profile: &PortfolioProfile) -> String {
    let values = placeholder_values(profile);
    fill_placeholders(template, |key| {
        values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    })
}

/// Replaces each `{key}` in `template` with `lookup(key)` in one left-to-right pass.
///
/// Substituted text is copied as-is and never scanned again, so a value that
/// itself contains `{key}` stays literal. Keys `lookup` does not know are kept.
pub fn fill_placeholders<'a>(
    template: &str,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let key_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let value = (key_len > 0 && after[key_len..].starts_with('}'))
            .then(|| lookup(&after[..key_len]))
            .flatten();
        match value {
            Some(value) => {
                out.push_str(value);
                rest = &after[key_len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Builds the system prompt for the completion API.
pub fn system_prompt(profile: &PortfolioProfile) -> String {
    render(SYSTEM_PROMPT_TEMPLATE, profile)
}

fn placeholder_values(profile: &PortfolioProfile) -> Vec<(&'static str, String)> {
    vec![
        ("name", profile.name.clone()),
        ("role", profile.role.clone()),
        ("location", profile.location.clone()),
        ("experience", profile.experience.clone()),
        ("education", profile.education.clone()),
        ("email", profile.email.clone()),
        ("phone", profile.phone.clone()),
        (
            "ai_ml_skills",
            profile.skills.top(SkillCategory::AiMl, TOP_SKILLS).join(", "),
        ),
        (
            "programming_skills",
            profile
                .skills
                .top(SkillCategory::Programming, TOP_SKILLS)
                .join(", "),
        ),
        (
            "featured_projects",
            profile.featured_projects(FEATURED_PROJECTS).join(", "),
        ),
        (
            "recent_employers",
            profile.recent_employers(RECENT_EMPLOYERS).join(" and "),
        ),
        (
            "certification_count",
            profile.certifications.len().to_string(),
        ),
        ("skills_block", skills_block(profile)),
        ("projects_block", projects_block(profile)),
        ("experience_block", experience_block(profile)),
        ("certifications_block", bullet_list(&profile.certifications)),
    ]
}

fn skills_block(profile: &PortfolioProfile) -> String {
    SkillCategory::ALL
        .iter()
        .map(|&c| format!("- {}: {}", c.label(), profile.skills.get(c).join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn projects_block(profile: &PortfolioProfile) -> String {
    profile
        .projects
        .iter()
        .map(|p| {
            format!(
                "- {}: {} (Tech: {})",
                p.name,
                p.description,
                p.technologies.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn experience_block(profile: &PortfolioProfile) -> String {
    profile
        .experience_details
        .iter()
        .map(|e| {
            format!(
                "- {} at {} ({}): {}",
                e.role, e.company, e.duration, e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::canonical_profile;

    #[test]
    fn test_render_fills_scalar_fields() {
        let profile = canonical_profile();
        let out = render("{name} <{email}> in {location}", &profile);
        assert_eq!(
            out,
            "Vinoth Kumar <vinothkumar@example.com> in Coimbatore, Tamil Nadu, India"
        );
    }

    #[test]
    fn test_render_slices_first_three_skills() {
        let profile = canonical_profile();
        assert_eq!(
            render("{ai_ml_skills}", &profile),
            "Machine Learning, Deep Learning, Computer Vision"
        );
        assert_eq!(
            render("{programming_skills}", &profile),
            "Python, JavaScript, Java"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let profile = canonical_profile();
        assert_eq!(render("{nope} {name}", &profile), "{nope} Vinoth Kumar");
    }

    #[test]
    fn test_substituted_values_are_not_expanded_again() {
        let mut profile = canonical_profile();
        profile.name = "{email}".to_string();
        profile.email = "{phone}".to_string();
        assert_eq!(render("{name} / {email}", &profile), "{email} / {phone}");
    }

    #[test]
    fn test_fill_placeholders_keeps_stray_braces() {
        let lookup = |key: &str| (key == "x").then_some("1");
        assert_eq!(fill_placeholders("{x} {y} {} {x", lookup), "1 {y} {} {x");
        assert_eq!(fill_placeholders("{{x}}", lookup), "{1}");
    }

    #[test]
    fn test_render_joins_employers_with_and() {
        let profile = canonical_profile();
        assert_eq!(
            render("{recent_employers}", &profile),
            "Ozibook and Universiti Teknologi MARA"
        );
    }

    #[test]
    fn test_system_prompt_contains_every_profile_field() {
        let profile = canonical_profile();
        let prompt = system_prompt(&profile);

        for scalar in [
            &profile.name,
            &profile.role,
            &profile.location,
            &profile.experience,
            &profile.education,
            &profile.email,
            &profile.phone,
        ] {
            assert!(prompt.contains(scalar.as_str()), "missing {scalar}");
        }
        for category in SkillCategory::ALL {
            for skill in profile.skills.get(category) {
                assert!(prompt.contains(skill.as_str()), "missing skill {skill}");
            }
        }
        for project in &profile.projects {
            assert!(prompt.contains(&project.name));
            assert!(prompt.contains(&project.description));
        }
        for entry in &profile.experience_details {
            assert!(prompt.contains(&format!(
                "{} at {} ({})",
                entry.role, entry.company, entry.duration
            )));
        }
        for cert in &profile.certifications {
            assert!(prompt.contains(cert.as_str()));
        }
        assert!(prompt.contains("150 words"));
        assert!(!prompt.contains('{'), "unfilled placeholder in prompt");
    }
}

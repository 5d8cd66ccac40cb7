use crate::taxonomy::{RECOMMENDED_SECTIONS, REQUIRED_SECTIONS};
use std::collections::HashSet;

/// Outcome of checking a heading list against the section rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCheck {
    pub missing_required: Vec<String>,
    pub missing_recommended: Vec<String>,
    pub errors: Vec<String>,
}

impl SectionCheck {
    pub fn is_valid(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Presence-only check; content, order and nesting are not inspected.
pub fn check_sections(found: &[String]) -> SectionCheck {
    check_sections_against(found, &REQUIRED_SECTIONS, &RECOMMENDED_SECTIONS)
}

pub fn check_sections_against(
    found: &[String],
    required: &[&str],
    recommended: &[&str],
) -> SectionCheck {
    let present: HashSet<String> = found.iter().map(|s| s.to_lowercase()).collect();
    let is_missing = |name: &str| !present.contains(&name.to_lowercase());

    let missing_required: Vec<String> = required
        .iter()
        .filter(|name| is_missing(name))
        .map(|name| name.to_string())
        .collect();
    let errors = missing_required
        .iter()
        .map(|name| format!("Missing required section: {name}"))
        .collect();
    let missing_recommended = recommended
        .iter()
        .filter(|name| is_missing(name))
        .map(|name| name.to_string())
        .collect();

    SectionCheck {
        missing_required,
        missing_recommended,
        errors,
    }
}

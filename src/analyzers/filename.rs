use crate::core::BestPracticeId;
use once_cell::sync::Lazy;
use regex::Regex;

static BEST_PRACTICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]+)(\d+)-BP(\d+)-(.+)\.md$").unwrap());

/// Parse `<PILLAR><NN>-BP<NN>-<name>.md`.
///
/// Returns `None` for anything else, including numbers too large for `u64`.
/// Non-matching names are ordinary documents, not errors.
pub fn parse_best_practice_filename(filename: &str) -> Option<BestPracticeId> {
    let caps = BEST_PRACTICE_PATTERN.captures(filename)?;
    Some(BestPracticeId {
        pillar: caps[1].to_string(),
        question: caps[2].parse().ok()?,
        practice: caps[3].parse().ok()?,
        name: caps[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_best_practice_name() {
        let id = parse_best_practice_filename("SEC03-BP05-some-practice.md").unwrap();
        assert_eq!(id.pillar, "SEC");
        assert_eq!(id.question, 3);
        assert_eq!(id.practice, 5);
        assert_eq!(id.name, "some-practice");
        assert_eq!(id.id(), "SEC03-BP05");
    }

    #[test]
    fn leading_zeros_and_wide_numbers() {
        let id = parse_best_practice_filename("OPS007-BP120-x.md").unwrap();
        assert_eq!(id.question, 7);
        assert_eq!(id.practice, 120);
        assert_eq!(id.id(), "OPS07-BP120");
    }

    #[test]
    fn name_is_kept_verbatim() {
        let id = parse_best_practice_filename("REL01-BP02-Use Fault_Isolation.v2.md").unwrap();
        assert_eq!(id.name, "Use Fault_Isolation.v2");
    }

    #[test]
    fn rejects_names_without_practice_segment() {
        assert_eq!(parse_best_practice_filename("SEC03-some-practice.md"), None);
        assert_eq!(parse_best_practice_filename("README.md"), None);
        assert_eq!(parse_best_practice_filename("sec03-BP05-lower.md"), None);
        assert_eq!(parse_best_practice_filename("SEC03-BP05-.md"), None);
        assert_eq!(parse_best_practice_filename("SEC03-BP05-x.txt"), None);
    }

    #[test]
    fn rejects_numbers_beyond_u64() {
        assert_eq!(
            parse_best_practice_filename("SEC99999999999999999999999-BP01-x.md"),
            None
        );
    }
}

//! Export filename derivation.

use regex::Regex;
use std::sync::LazyLock;

static INVALID_FILENAME_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("Invalid filename regex"));

/// Suffix appended to every exported configuration file.
pub const EXPORT_SUFFIX: &str = "_config.yaml";

/// Derive the suggested export filename for a project.
///
/// The name is lower-cased and every character outside `[a-z0-9]` becomes
/// its own `_` (runs are not collapsed), then `_config.yaml` is appended.
/// Names with nothing usable degrade to underscores instead of failing.
pub fn export_filename(project_name: &str) -> String {
    let lowered = project_name.to_lowercase();
    let stem = INVALID_FILENAME_CHAR.replace_all(&lowered, "_");
    format!("{}{}", stem, EXPORT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(export_filename("Test Project"), "test_project_config.yaml");
    }

    #[test]
    fn test_special_characters_each_become_underscore() {
        assert_eq!(
            export_filename("Project with Special!@#$%^&*() Characters"),
            "project_with_special___________characters_config.yaml"
        );
    }

    #[test]
    fn test_digits_are_kept() {
        assert_eq!(export_filename("Auction 2024"), "auction_2024_config.yaml");
    }

    #[test]
    fn test_unsanitizable_names_degrade() {
        assert_eq!(export_filename("!!!"), "____config.yaml");
        assert_eq!(export_filename(""), "_config.yaml");
        assert_eq!(export_filename("Café"), "caf__config.yaml");
    }
}

//! Rule-set loading and merging.

use std::path::Path;

use mechedit_core::prelude::*;

/// Separator placed between rule files when several are combined
pub const RULE_SEPARATOR: &str = "\n\n---\n\n";

/// Load the default rule-set from `path`.
///
/// A missing or unreadable file degrades to an empty rule-set: the analysis
/// still runs, just without custom rules.
pub fn load_default_rules(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            info!(
                "Loaded default rules from {} ({} bytes)",
                path.display(),
                content.len()
            );
            content
        }
        Err(e) => {
            warn!(
                "Could not load default rules from {}: {}. Using an empty rule-set",
                path.display(),
                e
            );
            String::new()
        }
    }
}

/// Join rule file contents in order, skipping blank ones.
pub fn join_rule_sources<S: AsRef<str>>(sources: &[S]) -> String {
    sources
        .iter()
        .map(AsRef::as_ref)
        .filter(|source| !source.trim().is_empty())
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_default_rules_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.yml");
        std::fs::write(&path, "extends: existence\n").unwrap();

        assert_eq!(load_default_rules(&path), "extends: existence\n");
    }

    #[test]
    fn test_load_default_rules_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        assert_eq!(load_default_rules(&dir.path().join("nope.yml")), "");
    }

    #[test]
    fn test_join_rule_sources() {
        let joined = join_rule_sources(&["a: 1", "  ", "b: 2"]);
        assert_eq!(joined, "a: 1\n\n---\n\nb: 2");
    }

    #[test]
    fn test_join_rule_sources_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(join_rule_sources(&empty), "");
        assert_eq!(join_rule_sources(&["", "\n"]), "");
    }
}

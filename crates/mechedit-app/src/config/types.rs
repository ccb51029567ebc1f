//! Configuration types for The Mechanical Editor

use mechedit_analysis::ProviderSettings;
use serde::{Deserialize, Serialize};

/// Settings from `.mechedit/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub rules: RulesSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Rule-set settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesSettings {
    /// Default rule-set used when no rule files are loaded.
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_rules_path")]
    pub default_path: String,
}

impl Default for RulesSettings {
    fn default() -> Self {
        Self {
            default_path: default_rules_path(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Animate scrolling to a selected issue
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,

    /// Show the line number gutter in the analyzed document
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Show the corrected document after analysis (false: the submitted text)
    #[serde(default = "default_true")]
    pub show_corrected: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            smooth_scroll: true,
            show_line_numbers: true,
            show_corrected: true,
        }
    }
}

fn default_rules_path() -> String {
    "rules/default-vale-rules.yml".to_string()
}

fn default_toast_duration_ms() -> u64 {
    4000
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.provider.backend, "openai");
        assert_eq!(settings.rules.default_path, "rules/default-vale-rules.yml");
        assert_eq!(settings.ui.toast_duration_ms, 4000);
        assert!(settings.ui.smooth_scroll);
        assert!(settings.ui.show_corrected);
    }

    #[test]
    fn test_partial_ui_section_keeps_defaults() {
        let settings: Settings = toml::from_str("[ui]\nsmooth_scroll = false\n").unwrap();
        assert!(!settings.ui.smooth_scroll);
        assert!(settings.ui.show_line_numbers);
        assert_eq!(settings.ui.toast_duration_ms, 4000);
    }
}

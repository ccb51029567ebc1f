//! Settings parser for .mechedit/config.toml

use super::types::Settings;
use mechedit_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const MECHEDIT_DIR: &str = ".mechedit";

/// Load settings from `<config_dir>/.mechedit/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(MECHEDIT_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.mechedit/config.toml` with commented defaults if missing
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    let mechedit_dir = config_dir.join(MECHEDIT_DIR);

    if !mechedit_dir.exists() {
        std::fs::create_dir_all(&mechedit_dir)
            .with_context(|| format!("Failed to create {}", mechedit_dir.display()))?;
    }

    let config_path = mechedit_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# The Mechanical Editor Configuration

[provider]
# One of: openai, anthropic, google, ollama, groq, mistral, deepseek
backend = "openai"
model = "gpt-4o-mini"
# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"
# api_key = ""          # Literal key, overrides api_key_env

[rules]
# Used when no rule files are loaded
default_path = "rules/default-vale-rules.yml"

[ui]
toast_duration_ms = 4000
smooth_scroll = true
show_line_numbers = true
show_corrected = true   # false: show the submitted text after analysis
"#;
        std::fs::write(&config_path, default_content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }

    Ok(())
}

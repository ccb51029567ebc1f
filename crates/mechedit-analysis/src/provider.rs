//! Language model provider: settings and the production [`Analyzer`].

use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;
use mechedit_core::prelude::*;
use mechedit_core::AnalysisResult;
use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisRequest, Analyzer};
use crate::prompt::{
    build_suggestions_system_prompt, build_suggestions_user_message, build_system_prompt,
    build_user_message,
};
use crate::schema::{parse_response, parse_suggestions};

/// Backends accepted in `[provider] backend`
pub const SUPPORTED_BACKENDS: &[&str] = &[
    "openai",
    "anthropic",
    "google",
    "ollama",
    "groq",
    "mistral",
    "deepseek",
];

/// Which model to call and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub backend: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Literal key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            backend: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl ProviderSettings {
    /// The API key to use, if any. Empty values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn validate(&self) -> Result<()> {
        map_backend(&self.backend)?;
        if self.model.trim().is_empty() {
            return Err(Error::config_invalid("provider.model must not be empty"));
        }
        Ok(())
    }
}

fn map_backend(backend: &str) -> Result<LLMBackend> {
    match backend {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(Error::config_invalid(format!(
            "unknown provider backend '{other}' (expected one of: {})",
            SUPPORTED_BACKENDS.join(", ")
        ))),
    }
}

/// Analyzer that prompts a hosted language model.
///
/// The default rule-set is fixed at construction and substituted whenever a
/// request carries blank rules. The provider client is built per call, so a
/// missing API key surfaces as a provider error on that request instead of
/// preventing startup.
#[derive(Debug, Clone)]
pub struct LlmAnalyzer {
    settings: ProviderSettings,
    default_rules: String,
    system_prompt: String,
    suggestions_prompt: String,
}

impl LlmAnalyzer {
    pub fn new(settings: ProviderSettings, default_rules: impl Into<String>) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            default_rules: default_rules.into(),
            system_prompt: build_system_prompt(),
            suggestions_prompt: build_suggestions_system_prompt(),
        })
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    pub fn default_rules(&self) -> &str {
        &self.default_rules
    }

    async fn complete(&self, system_prompt: &str, user_msg: &str) -> Result<String> {
        let backend = map_backend(&self.settings.backend)?;

        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&self.settings.model)
            .system(system_prompt);

        if let Some(key) = self.settings.resolve_api_key() {
            builder = builder.api_key(key);
        }

        let llm = builder
            .build()
            .map_err(|e| Error::provider(format!("build LLM: {e}")))?;

        let messages = vec![ChatMessage::user().content(user_msg).build()];

        let response = llm
            .chat(&messages)
            .await
            .map_err(|e| Error::provider(format!("chat: {e}")))?;

        response
            .text()
            .ok_or_else(|| Error::provider("model returned no text"))
    }
}

impl Analyzer for LlmAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let rules = request.effective_rules(&self.default_rules);
        let user_msg = build_user_message(&request.document_content, rules);

        info!(
            "Requesting analysis from {}/{} ({} chars, {} chars of rules)",
            self.settings.backend,
            self.settings.model,
            request.document_content.chars().count(),
            rules.chars().count()
        );

        let raw = self.complete(&self.system_prompt, &user_msg).await?;
        let result = parse_response(&raw)?;

        info!("Analysis returned {} errors", result.error_count());
        Ok(result)
    }

    async fn suggest(&self, document_content: &str) -> Result<Vec<String>> {
        info!(
            "Requesting writing suggestions from {}/{} ({} chars)",
            self.settings.backend,
            self.settings.model,
            document_content.chars().count()
        );

        let user_msg = build_suggestions_user_message(document_content);
        let raw = self.complete(&self.suggestions_prompt, &user_msg).await?;
        let suggestions = parse_suggestions(&raw)?;

        info!("Model returned {} writing suggestions", suggestions.len());
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.backend, "openai");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_every_supported_backend_maps() {
        for backend in SUPPORTED_BACKENDS {
            assert!(map_backend(backend).is_ok(), "{backend} should map");
        }
    }

    #[test]
    fn test_unknown_backend_is_config_error() {
        let settings = ProviderSettings {
            backend: "palm".to_string(),
            ..Default::default()
        };
        let err = LlmAnalyzer::new(settings, "").unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("palm"));
    }

    #[test]
    fn test_empty_model_is_rejected() {
        let settings = ProviderSettings {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_literal_api_key_wins() {
        let settings = ProviderSettings {
            api_key: Some("sk-literal".to_string()),
            api_key_env: "MECHEDIT_TEST_KEY_THAT_IS_NOT_SET".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.resolve_api_key().as_deref(), Some("sk-literal"));
    }

    #[test]
    fn test_blank_literal_key_falls_through() {
        let settings = ProviderSettings {
            api_key: Some(String::new()),
            api_key_env: "MECHEDIT_TEST_KEY_THAT_IS_NOT_SET".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.resolve_api_key(), None);
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: ProviderSettings =
            serde_json::from_str(r#"{"backend":"anthropic","model":"claude-3-5-haiku-latest"}"#)
                .unwrap();
        assert_eq!(settings.backend, "anthropic");
        assert_eq!(settings.api_key_env, "OPENAI_API_KEY");
        assert_eq!(settings.api_key, None);
    }

    #[test]
    fn test_analyzer_keeps_default_rules() {
        let analyzer = LlmAnalyzer::new(ProviderSettings::default(), "extends: spelling").unwrap();
        assert_eq!(analyzer.default_rules(), "extends: spelling");
    }
}

//! The analysis capability and its request type.

use mechedit_core::prelude::*;
use mechedit_core::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Input of one analysis: the document and the user's rule text.
///
/// `vale_rules` may be empty, in which case the analyzer falls back to the
/// default rule-set it was constructed with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub document_content: String,
    pub vale_rules: String,
}

impl AnalysisRequest {
    pub fn new(document_content: impl Into<String>, vale_rules: impl Into<String>) -> Self {
        Self {
            document_content: document_content.into(),
            vale_rules: vale_rules.into(),
        }
    }

    /// True when the document has nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.document_content.trim().is_empty()
    }

    /// The rules to send: the request's own, or `default` when those are blank
    pub fn effective_rules<'a>(&'a self, default: &'a str) -> &'a str {
        if self.vale_rules.trim().is_empty() {
            default
        } else {
            &self.vale_rules
        }
    }
}

/// Turns a document and rule-set into a corrected document plus error records,
/// and a document into free-form writing suggestions.
///
/// Implementations own every provider-specific detail. Failures of the model
/// call or of response validation come back as [`Error::Provider`] or
/// [`Error::Schema`].
#[trait_variant::make(Analyzer: Send)]
pub trait LocalAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;

    /// Suggestions on clarity, concision and overall quality, in the
    /// model's order
    async fn suggest(&self, document_content: &str) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_rules_prefers_request_rules() {
        let request = AnalysisRequest::new("Text", "extends: spelling");
        assert_eq!(request.effective_rules("default"), "extends: spelling");
    }

    #[test]
    fn test_effective_rules_falls_back_when_blank() {
        let request = AnalysisRequest::new("Text", "  \n\t");
        assert_eq!(request.effective_rules("default"), "default");

        let request = AnalysisRequest::new("Text", "");
        assert_eq!(request.effective_rules(""), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(AnalysisRequest::new("   \n", "").is_blank());
        assert!(!AnalysisRequest::new(" a ", "").is_blank());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let json = serde_json::to_string(&AnalysisRequest::new("doc", "rules")).unwrap();
        assert_eq!(json, r#"{"documentContent":"doc","valeRules":"rules"}"#);
    }
}

//! # mechedit-analysis - Document Analysis Client
//!
//! Packages document text and a rule-set into a request, sends it to a hosted
//! language model and validates the JSON that comes back.
//!
//! Depends on [`mechedit_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Capability
//! - [`Analyzer`] - `analyze(request) -> AnalysisResult` and
//!   `suggest(document) -> Vec<String>` seam used by the app
//! - [`AnalysisRequest`] - Document content plus user-supplied rules
//!
//! ### LLM Provider
//! - [`LlmAnalyzer`] - Production analyzer built on the `llm` crate
//! - [`ProviderSettings`] - Backend, model and API key selection
//!
//! ### Request/Response Shaping
//! - [`build_system_prompt()`], [`build_user_message()`] - Prompt text
//! - [`build_suggestions_system_prompt()`], [`build_suggestions_user_message()`]
//! - [`parse_response()`], [`parse_suggestions()`] - Extract and validate the
//!   model's output
//!
//! ### Inputs
//! - [`load_default_rules()`] - Best-effort load of the default rule-set
//! - [`join_rule_sources()`] - Merge several rule files into one rule-set
//! - [`read_text_file()`], [`FileKind`] - Async reads of document/rule files

pub mod analyzer;
pub mod files;
pub mod prompt;
pub mod provider;
pub mod rules;
pub mod schema;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use analyzer::{AnalysisRequest, Analyzer, LocalAnalyzer};
pub use files::{read_text_file, FileKind};
pub use prompt::{
    build_suggestions_system_prompt, build_suggestions_user_message, build_system_prompt,
    build_user_message,
};
pub use provider::{LlmAnalyzer, ProviderSettings};
pub use rules::{join_rule_sources, load_default_rules, RULE_SEPARATOR};
pub use schema::{parse_response, parse_suggestions};

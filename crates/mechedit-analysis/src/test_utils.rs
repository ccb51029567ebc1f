//! Test utilities for analyzer consumers
//!
//! Provides a scripted [`MockAnalyzer`] that records every request it sees.
//! Analyses and writing suggestions are scripted separately.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use mechedit_core::prelude::*;
use mechedit_core::{AnalysisResult, ErrorRecord};

use crate::analyzer::{AnalysisRequest, Analyzer};

/// One scripted answer
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(AnalysisResult),
    ProviderFailure(String),
}

/// Analyzer that replays scripted responses in order.
///
/// When the script runs out it answers with an empty, error-free result that
/// echoes the document back as the corrected text.
#[derive(Debug, Default)]
pub struct MockAnalyzer {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<AnalysisRequest>>,
    /// `Err` holds a provider failure message
    suggestion_responses: Mutex<VecDeque<std::result::Result<Vec<String>, String>>>,
    suggestion_requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.push(MockResponse::Success(result));
        self
    }

    /// Queue a provider failure
    pub fn with_failure(self, message: &str) -> Self {
        self.push(MockResponse::ProviderFailure(message.to_string()));
        self
    }

    /// Sleep before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push(&self, response: MockResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    /// Requests seen so far, in call order
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests().len()
    }

    /// Queue writing suggestions
    pub fn with_suggestions(self, suggestions: &[&str]) -> Self {
        if let Ok(mut responses) = self.suggestion_responses.lock() {
            responses.push_back(Ok(suggestions.iter().map(|s| s.to_string()).collect()));
        }
        self
    }

    /// Queue a provider failure for the next suggestions request
    pub fn with_suggestions_failure(self, message: &str) -> Self {
        if let Ok(mut responses) = self.suggestion_responses.lock() {
            responses.push_back(Err(message.to_string()));
        }
        self
    }

    /// Documents sent for writing suggestions, in call order
    pub fn suggestion_requests(&self) -> Vec<String> {
        self.suggestion_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Analyzer for MockAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());

        match next {
            Some(MockResponse::Success(result)) => Ok(result),
            Some(MockResponse::ProviderFailure(message)) => Err(Error::provider(message)),
            None => Ok(AnalysisResult::new(request.document_content.clone(), vec![])),
        }
    }

    async fn suggest(&self, document_content: &str) -> Result<Vec<String>> {
        if let Ok(mut requests) = self.suggestion_requests.lock() {
            requests.push(document_content.to_string());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .suggestion_responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());

        match next {
            Some(Ok(suggestions)) => Ok(suggestions),
            Some(Err(message)) => Err(Error::provider(message)),
            None => Ok(Vec::new()),
        }
    }
}

/// The "Teh cat sat." result used across tests
pub fn teh_cat_result() -> AnalysisResult {
    AnalysisResult::new(
        "The cat sat.\n",
        vec![ErrorRecord::new("Spelling", 1, 0, 3, "Spelling.Teh")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mock = MockAnalyzer::new()
            .with_result(teh_cat_result())
            .with_failure("quota exceeded");

        let request = AnalysisRequest::new("Teh cat sat.\n", "");
        let first = mock.analyze(&request).await.unwrap();
        assert_eq!(first.error_count(), 1);

        let second = mock.analyze(&request).await.unwrap_err();
        assert!(second.is_provider_error());

        let third = mock.analyze(&request).await.unwrap();
        assert_eq!(third.corrected_document, "Teh cat sat.\n");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockAnalyzer::new();
        mock.analyze(&AnalysisRequest::new("doc", "rules")).await.unwrap();
        assert_eq!(mock.requests(), vec![AnalysisRequest::new("doc", "rules")]);
    }

    #[tokio::test]
    async fn test_mock_scripts_suggestions_separately() {
        let mock = MockAnalyzer::new()
            .with_result(teh_cat_result())
            .with_suggestions(&["Shorten the intro."])
            .with_suggestions_failure("quota exceeded");

        assert_eq!(
            mock.suggest("doc").await.unwrap(),
            vec!["Shorten the intro."]
        );
        assert!(mock.suggest("doc").await.unwrap_err().is_provider_error());
        assert!(mock.suggest("doc").await.unwrap().is_empty());
        assert_eq!(mock.suggestion_requests().len(), 3);

        // Analysis script is untouched
        let result = mock.analyze(&AnalysisRequest::new("doc", "")).await.unwrap();
        assert_eq!(result.error_count(), 1);
        assert_eq!(mock.call_count(), 1);
    }
}

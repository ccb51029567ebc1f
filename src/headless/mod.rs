//! Headless mode - JSON event output for scripted checks
//!
//! Analyzes one document without the TUI and writes structured JSON events
//! to stdout, so CI jobs and editor integrations can consume the result.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","request_id":1,"characters":13,"rule_files":0,"timestamp":1704700001000}
//! {"event":"issue","id":"error-1-0","message":"Spelling","line":1,"start":0,"end":3,"rule_id":"Vale.Spelling","timestamp":1704700002000}
//! {"event":"analysis_completed","request_id":1,"error_count":1,"corrected_document":"The cat sat.\n","timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use mechedit_core::{ErrorId, ErrorRecord};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The document was handed to the analyzer
    AnalysisStarted {
        request_id: u64,
        characters: usize,
        rule_files: usize,
        timestamp: i64,
    },

    /// One flagged span, in the analyzer's order
    Issue {
        id: String,
        message: String,
        line: i64,
        start: i64,
        end: i64,
        rule_id: String,
        timestamp: i64,
    },

    /// The analysis succeeded
    AnalysisCompleted {
        request_id: u64,
        error_count: usize,
        corrected_document: String,
        timestamp: i64,
    },

    /// The analyzer call or its response failed
    AnalysisFailed {
        request_id: u64,
        error: String,
        timestamp: i64,
    },

    /// A document or rule file could not be read
    FileReadFailed {
        path: String,
        error: String,
        timestamp: i64,
    },

    /// The request was rejected before reaching the analyzer
    ValidationFailed { reason: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one JSON line
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn analysis_started(request_id: u64, characters: usize, rule_files: usize) -> Self {
        Self::AnalysisStarted {
            request_id,
            characters,
            rule_files,
            timestamp: Self::now(),
        }
    }

    pub fn issue(id: &ErrorId, record: &ErrorRecord) -> Self {
        Self::Issue {
            id: id.to_string(),
            message: record.message.clone(),
            line: record.line,
            start: record.start,
            end: record.end,
            rule_id: record.rule_id.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(
        request_id: u64,
        error_count: usize,
        corrected_document: &str,
    ) -> Self {
        Self::AnalysisCompleted {
            request_id,
            error_count,
            corrected_document: corrected_document.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(request_id: u64, error: &str) -> Self {
        Self::AnalysisFailed {
            request_id,
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn file_read_failed(path: &Path, error: &str) -> Self {
        Self::FileReadFailed {
            path: path.display().to_string(),
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn validation_failed(reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            reason: reason.into(),
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_issue_serialization() {
        let record = ErrorRecord::new("Did you mean 'The'?", 1, 0, 3, "Vale.Spelling");
        let value = to_value(&HeadlessEvent::issue(&ErrorId::for_record(&record), &record));

        assert_eq!(value["event"], "issue");
        assert_eq!(value["id"], "error-1-0");
        assert_eq!(value["rule_id"], "Vale.Spelling");
        assert_eq!(value["end"], 3);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_analysis_completed_serialization() {
        let value = to_value(&HeadlessEvent::analysis_completed(7, 2, "Fixed."));

        assert_eq!(value["event"], "analysis_completed");
        assert_eq!(value["request_id"], 7);
        assert_eq!(value["error_count"], 2);
        assert_eq!(value["corrected_document"], "Fixed.");
    }

    #[test]
    fn test_file_read_failed_serialization() {
        let value = to_value(&HeadlessEvent::file_read_failed(
            Path::new("/tmp/missing.md"),
            "not found",
        ));

        assert_eq!(value["event"], "file_read_failed");
        assert_eq!(value["path"], "/tmp/missing.md");
        assert_eq!(value["error"], "not found");
    }

    #[test]
    fn test_validation_failed_serialization() {
        let value = to_value(&HeadlessEvent::validation_failed("Document is empty"));

        assert_eq!(value["event"], "validation_failed");
        assert_eq!(value["reason"], "Document is empty");
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::analysis_failed(3, "rate limited").emit_to(&mut out);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
        assert!(text.contains(r#""event":"analysis_failed""#));
    }
}

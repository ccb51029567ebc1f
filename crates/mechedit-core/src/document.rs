//! Analysis domain types: error records, analysis results and error ids.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One flagged span of text reported by the analysis collaborator.
///
/// `line` is 1-indexed; `start`/`end` are 0-indexed, end-exclusive character
/// offsets within that line. Values are kept exactly as reported: a record
/// may point outside its line and is clamped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub message: String,
    pub line: i64,
    pub start: i64,
    pub end: i64,
    pub rule_id: String,
}

impl ErrorRecord {
    pub fn new(
        message: impl Into<String>,
        line: i64,
        start: i64,
        end: i64,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            line,
            start,
            end,
            rule_id: rule_id.into(),
        }
    }

    /// 1-based position shown to users ("Pos: 4")
    pub fn display_position(&self) -> i64 {
        self.start + 1
    }
}

/// Output of one analysis cycle.
///
/// The order of `errors` is the collaborator's order and is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub corrected_document: String,
    pub errors: Vec<ErrorRecord>,
}

impl AnalysisResult {
    pub fn new(corrected_document: impl Into<String>, errors: Vec<ErrorRecord>) -> Self {
        Self {
            corrected_document: corrected_document.into(),
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Stable ids for every error, in collaborator order
    pub fn error_ids(&self) -> Vec<ErrorId> {
        assign_error_ids(&self.errors)
    }
}

/// Deterministic identifier of an error record: `error-{line}-{start}`.
///
/// Records sharing `(line, start)` are told apart by an ordinal suffix on the
/// second and later occurrences (`error-3-7-2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorId(String);

impl ErrorId {
    /// The base id for a record, without collision suffix
    pub fn for_record(record: &ErrorRecord) -> Self {
        Self(format!("error-{}-{}", record.line, record.start))
    }

    fn with_ordinal(record: &ErrorRecord, ordinal: usize) -> Self {
        if ordinal <= 1 {
            Self::for_record(record)
        } else {
            Self(format!("error-{}-{}-{}", record.line, record.start, ordinal))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Assign ids to records in order. The n-th record (n >= 2) sharing a
/// `(line, start)` pair gets the suffix `-n`.
pub fn assign_error_ids(errors: &[ErrorRecord]) -> Vec<ErrorId> {
    let mut seen: HashMap<(i64, i64), usize> = HashMap::new();
    errors
        .iter()
        .map(|record| {
            let ordinal = seen.entry((record.line, record.start)).or_insert(0);
            *ordinal += 1;
            ErrorId::with_ordinal(record, *ordinal)
        })
        .collect()
}

//! Validation of the model's raw answer into an [`AnalysisResult`] or a list
//! of writing suggestions.
//!
//! Models often wrap JSON in prose or a Markdown code fence, and some emit
//! integral numbers as floats (`3.0`). Both are tolerated; anything that does
//! not carry the expected fields with the expected types is a schema error.

use std::sync::LazyLock;

use mechedit_core::prelude::*;
use mechedit_core::{AnalysisResult, ErrorRecord};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z]+)?\s*\n(.*?)```").expect("code fence regex is valid")
});

/// `1. text`, `2) text` or `- text`
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+[.)]|[-*])\s+(.+?)\s*$").expect("list item regex is valid")
});

#[derive(Debug, Deserialize)]
struct RawSuggestions {
    suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    corrected_document: String,
    errors: Vec<RawError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawError {
    message: String,
    line: Value,
    start: Value,
    end: Value,
    rule_id: String,
}

/// Parse the model's text into a typed result.
///
/// Empty text is a provider error (the model produced nothing); text without a
/// JSON object, or a JSON object of the wrong shape, is a schema error.
pub fn parse_response(raw: &str) -> Result<AnalysisResult> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::provider("model returned an empty response"));
    }

    let json = extract_json_object(trimmed)
        .ok_or_else(|| Error::schema("response does not contain a JSON object"))?;

    let response: RawResponse =
        serde_json::from_str(json).map_err(|e| Error::schema(e.to_string()))?;

    let errors = response
        .errors
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            Ok(ErrorRecord {
                line: integer_field(&raw.line, index, "line")?,
                start: integer_field(&raw.start, index, "start")?,
                end: integer_field(&raw.end, index, "end")?,
                message: raw.message,
                rule_id: raw.rule_id,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed analysis response with {} errors", errors.len());
    Ok(AnalysisResult::new(response.corrected_document, errors))
}

/// Parse a writing-suggestions answer.
///
/// Accepts `{"suggestions": [...]}` (wrapped or not) or, when the text holds
/// no JSON object, a numbered or bulleted list. Numbering inside items is
/// stripped and blank items are dropped.
pub fn parse_suggestions(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::provider("model returned an empty response"));
    }

    let items = match extract_json_object(trimmed) {
        Some(json) => {
            let parsed: RawSuggestions =
                serde_json::from_str(json).map_err(|e| Error::schema(e.to_string()))?;
            parsed.suggestions
        }
        None => {
            let listed: Vec<String> = trimmed
                .lines()
                .filter_map(|line| LIST_ITEM.captures(line))
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
                .collect();
            if listed.is_empty() {
                return Err(Error::schema("response has neither a JSON object nor a list"));
            }
            listed
        }
    };

    let suggestions: Vec<String> = items
        .iter()
        .map(|item| strip_numbering(item))
        .filter(|item| !item.is_empty())
        .collect();

    debug!("Parsed {} writing suggestions", suggestions.len());
    Ok(suggestions)
}

fn strip_numbering(item: &str) -> String {
    LIST_ITEM
        .captures(item)
        .and_then(|caps| caps.get(1))
        .map_or(item.trim(), |m| m.as_str())
        .to_string()
}

/// Strip a surrounding code fence if present, then slice out the outermost
/// `{ ... }`.
fn extract_json_object(text: &str) -> Option<&str> {
    let body = CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);

    let open = body.find('{')?;
    let close = body.rfind('}')?;
    (open < close).then(|| &body[open..=close])
}

fn integer_field(value: &Value, index: usize, field: &str) -> Result<i64> {
    let invalid = || Error::schema(format!("errors[{index}].{field} must be an integer, got {value}"));

    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                return Ok(n);
            }
            match number.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}

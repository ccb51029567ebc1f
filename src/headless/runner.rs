//! Headless mode runner - main event loop without TUI
//!
//! Loads the rule files and the document through the engine, submits the
//! document once every file has been read, and exits after one analysis.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

use mechedit_analysis::Analyzer;
use mechedit_app::{Engine, FileTarget, Message};
use mechedit_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI.
///
/// Returns `Ok(true)` when the analysis succeeded.
pub async fn run_headless<A>(
    mut engine: Engine<A>,
    document: PathBuf,
    rules: Vec<PathBuf>,
) -> Result<bool>
where
    A: Analyzer + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("The Mechanical Editor starting in HEADLESS mode");
    info!("Document: {}", document.display());
    info!("═══════════════════════════════════════════════════════");

    let mut stdout = io::stdout();
    let succeeded = headless_event_loop(&mut engine, document, rules, &mut stdout).await;

    engine.shutdown();
    info!("Headless mode exiting (success: {})", succeeded);
    Ok(succeeded)
}

/// Main headless event loop
async fn headless_event_loop<A, W>(
    engine: &mut Engine<A>,
    document: PathBuf,
    rules: Vec<PathBuf>,
    out: &mut W,
) -> bool
where
    A: Analyzer + Sync + 'static,
    W: Write,
{
    let mut pending: HashSet<PathBuf> = rules.iter().cloned().collect();
    pending.insert(document.clone());

    for path in rules {
        engine.load_file(path, FileTarget::Rules);
    }
    engine.load_file(document.clone(), FileTarget::Document);

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            return false;
        }

        let Some(msg) = engine.next_message().await else {
            info!("Message channel closed");
            return false;
        };

        let in_flight = engine.state.in_flight;
        let mut outcome = None;
        let mut file_settled = false;

        match &msg {
            Message::FileLoaded { path, .. } => {
                file_settled = pending.remove(path);
            }
            Message::FileReadFailed { path, error } => {
                HeadlessEvent::file_read_failed(path, error).emit_to(out);
                file_settled = pending.remove(path);
                if *path == document {
                    outcome = Some(false);
                }
            }
            Message::AnalysisFailed { request_id, error } if in_flight == Some(*request_id) => {
                HeadlessEvent::analysis_failed(*request_id, error).emit_to(out);
                outcome = Some(false);
            }
            _ => {}
        }
        let completed = matches!(
            &msg,
            Message::AnalysisCompleted { request_id, .. } if in_flight == Some(*request_id)
        );

        engine.process_message(msg);

        if completed {
            emit_result(engine, in_flight.unwrap_or_default(), out);
            outcome = Some(true);
        }

        // Every file has been read: analyze exactly once
        if outcome.is_none() && file_settled && pending.is_empty() && !submit(engine, out) {
            outcome = Some(false);
        }

        if let Some(succeeded) = outcome {
            return succeeded;
        }
    }
}

/// Submit the loaded document; false if it was rejected
fn submit<A, W>(engine: &mut Engine<A>, out: &mut W) -> bool
where
    A: Analyzer + Sync + 'static,
    W: Write,
{
    engine.process_message(Message::SubmitAnalysis);

    match engine.state.in_flight {
        Some(request_id) => {
            HeadlessEvent::analysis_started(
                request_id,
                engine.state.input.char_count(),
                engine.state.rule_files.len(),
            )
            .emit_to(out);
            true
        }
        None => {
            warn!("Document rejected before analysis");
            HeadlessEvent::validation_failed(Error::EmptyDocument.to_string()).emit_to(out);
            false
        }
    }
}

fn emit_result<A, W: Write>(engine: &Engine<A>, request_id: u64, out: &mut W) {
    let Some(result) = &engine.state.result else {
        return;
    };

    for (id, record) in result.error_ids().iter().zip(&result.errors) {
        HeadlessEvent::issue(id, record).emit_to(out);
    }
    HeadlessEvent::analysis_completed(request_id, result.error_count(), &result.corrected_document)
        .emit_to(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechedit_analysis::test_utils::{teh_cat_result, MockAnalyzer};
    use mechedit_app::Settings;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn events(out: Vec<u8>) -> Vec<Value> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn kinds(events: &[Value]) -> Vec<&str> {
        events.iter().map(|e| e["event"].as_str().unwrap()).collect()
    }

    #[tokio::test]
    async fn test_successful_analysis_emits_issues() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("draft.md");
        fs::write(&doc, "Teh cat sat.\n").unwrap();

        let analyzer = MockAnalyzer::new().with_result(teh_cat_result());
        let mut engine = Engine::new(Settings::default(), analyzer);
        let mut out = Vec::new();

        let ok = headless_event_loop(&mut engine, doc, vec![], &mut out).await;

        assert!(ok);
        let events = events(out);
        assert_eq!(
            kinds(&events),
            vec!["analysis_started", "issue", "analysis_completed"]
        );
        assert_eq!(events[1]["id"], "error-1-0");
        assert_eq!(events[2]["error_count"], 1);
        assert_eq!(events[2]["corrected_document"], "The cat sat.\n");
    }

    #[tokio::test]
    async fn test_rule_files_reach_the_analyzer() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("draft.txt");
        let rules = dir.path().join("house.yml");
        fs::write(&doc, "Some text").unwrap();
        fs::write(&rules, "extends: spelling").unwrap();

        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        let mut out = Vec::new();

        let ok = headless_event_loop(&mut engine, doc, vec![rules], &mut out).await;

        assert!(ok);
        let requests = engine.analyzer().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].document_content, "Some text");
        assert_eq!(requests[0].vale_rules, "extends: spelling");
        assert_eq!(events(out)[0]["rule_files"], 1);
    }

    #[tokio::test]
    async fn test_empty_document_fails_validation() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("blank.md");
        fs::write(&doc, "   \n").unwrap();

        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        let mut out = Vec::new();

        let ok = headless_event_loop(&mut engine, doc, vec![], &mut out).await;

        assert!(!ok);
        assert_eq!(kinds(&events(out)), vec!["validation_failed"]);
        assert_eq!(engine.analyzer().call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_document_fails() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("nope.md");

        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        let mut out = Vec::new();

        let ok = headless_event_loop(&mut engine, doc, vec![], &mut out).await;

        assert!(!ok);
        assert_eq!(kinds(&events(out)), vec!["file_read_failed"]);
    }

    #[tokio::test]
    async fn test_missing_rule_file_still_analyzes() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("draft.md");
        fs::write(&doc, "Text").unwrap();
        let rules = dir.path().join("gone.yml");

        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        let mut out = Vec::new();

        let ok = headless_event_loop(&mut engine, doc, vec![rules], &mut out).await;

        assert!(ok);
        let events = events(out);
        assert_eq!(
            kinds(&events),
            vec!["file_read_failed", "analysis_started", "analysis_completed"]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_reported() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("draft.md");
        fs::write(&doc, "Text").unwrap();

        let analyzer = MockAnalyzer::new().with_failure("rate limited");
        let mut engine = Engine::new(Settings::default(), analyzer);
        let mut out = Vec::new();

        let ok = headless_event_loop(&mut engine, doc, vec![], &mut out).await;

        assert!(!ok);
        let events = events(out);
        assert_eq!(kinds(&events), vec!["analysis_started", "analysis_failed"]);
        assert!(events[1]["error"].as_str().unwrap().contains("rate limited"));
    }
}

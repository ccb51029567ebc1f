//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the unified message channel and the analyzer. Both
//! runners feed messages in and drain the channel; only the way they present
//! state differs.

use std::path::PathBuf;
use std::sync::Arc;

use mechedit_analysis::Analyzer;
use mechedit_core::prelude::*;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, FileTarget};

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for The Mechanical Editor.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, event pollers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// The analysis capability, shared with spawned tasks
    analyzer: Arc<A>,

    /// Loaded settings
    pub settings: Settings,
}

impl<A> Engine<A>
where
    A: Analyzer + Sync + 'static,
{
    /// Create an engine and spawn the signal handler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings, analyzer: A) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        info!(
            "Engine ready (provider {}/{})",
            settings.provider.backend, settings.provider.model
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            analyzer: Arc::new(analyzer),
            settings,
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.analyzer);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from background tasks.
    ///
    /// Returns `None` once every sender is gone (never while the engine
    /// itself holds `msg_tx`).
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Queue a file read, as if the user had entered its path.
    pub fn load_file(&mut self, path: PathBuf, target: FileTarget) {
        self.process_message(Message::LoadFile { path, target });
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn analyzer(&self) -> &Arc<A> {
        &self.analyzer
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Log shutdown; in-flight requests are abandoned (no cancellation path)
    pub fn shutdown(&mut self) {
        if let Some(request_id) = self.state.in_flight {
            info!("Shutting down with analysis {} still in flight", request_id);
        } else {
            info!("Shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AnalysisPhase;
    use mechedit_analysis::test_utils::{teh_cat_result, MockAnalyzer};
    use std::time::Duration;
    use tempfile::tempdir;

    async fn settle<A: Analyzer + Sync + 'static>(engine: &mut Engine<A>) {
        let msg = tokio::time::timeout(Duration::from_secs(2), engine.next_message())
            .await
            .expect("background task answered")
            .expect("channel open");
        engine.process_message(msg);
    }

    fn type_document(engine: &mut Engine<MockAnalyzer>, text: &str) {
        engine.process_message(Message::Paste(text.to_string()));
        engine.process_message(Message::ExitEditMode);
    }

    #[tokio::test]
    async fn test_analysis_round_trip() {
        let mut engine = Engine::new(
            Settings::default(),
            MockAnalyzer::new().with_result(teh_cat_result()),
        );
        type_document(&mut engine, "Teh cat sat.\n");

        engine.process_message(Message::SubmitAnalysis);
        assert_eq!(engine.state.phase, AnalysisPhase::Loading);

        settle(&mut engine).await;
        assert_eq!(engine.state.phase, AnalysisPhase::Succeeded);
        assert_eq!(engine.state.error_count(), 1);
        assert_eq!(engine.state.displayed_text(), Some("The cat sat.\n"));

        let requests = engine.analyzer().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].document_content, "Teh cat sat.\n");
        assert_eq!(requests[0].vale_rules, "");
    }

    #[tokio::test]
    async fn test_empty_document_never_reaches_analyzer() {
        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        type_document(&mut engine, "   \n\t ");

        engine.process_message(Message::SubmitAnalysis);
        tokio::time::sleep(Duration::from_millis(20)).await;
        engine.drain_pending_messages();

        assert_eq!(engine.analyzer().call_count(), 0);
        assert_eq!(engine.state.phase, AnalysisPhase::Idle);
        assert!(engine.state.notifications.latest().unwrap().is_destructive());
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_text() {
        let mut engine = Engine::new(
            Settings::default(),
            MockAnalyzer::new().with_failure("model unavailable"),
        );
        type_document(&mut engine, "Teh cat sat.\n");

        engine.process_message(Message::SubmitAnalysis);
        settle(&mut engine).await;

        assert_eq!(engine.state.phase, AnalysisPhase::Failed);
        assert!(!engine.state.is_loading());
        assert!(engine.state.result.is_none());
        assert_eq!(engine.state.displayed_text(), Some("Teh cat sat.\n"));
        assert_eq!(engine.state.input.text(), "Teh cat sat.\n");
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_loading() {
        let mut engine = Engine::new(
            Settings::default(),
            MockAnalyzer::new()
                .with_delay(Duration::from_millis(50))
                .with_result(teh_cat_result()),
        );
        type_document(&mut engine, "Teh cat sat.\n");

        engine.process_message(Message::SubmitAnalysis);
        engine.process_message(Message::SubmitAnalysis);
        settle(&mut engine).await;

        assert_eq!(engine.analyzer().call_count(), 1);
        assert_eq!(engine.state.phase, AnalysisPhase::Succeeded);
    }

    #[tokio::test]
    async fn test_rule_files_are_joined_into_request() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.yml");
        let second = dir.path().join("b.yaml");
        std::fs::write(&first, "extends: spelling").unwrap();
        std::fs::write(&second, "extends: existence").unwrap();

        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        engine.load_file(first, FileTarget::Rules);
        settle(&mut engine).await;
        engine.load_file(second, FileTarget::Rules);
        settle(&mut engine).await;
        assert_eq!(engine.state.rule_files.len(), 2);

        type_document(&mut engine, "Some text");
        engine.process_message(Message::SubmitAnalysis);
        settle(&mut engine).await;

        let requests = engine.analyzer().requests();
        assert_eq!(
            requests[0].vale_rules,
            "extends: spelling\n\n---\n\nextends: existence"
        );
    }

    #[tokio::test]
    async fn test_load_document_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.md");
        std::fs::write(&path, "# Draft\r\nTeh cat.").unwrap();

        let mut engine = Engine::new(Settings::default(), MockAnalyzer::new());
        engine.load_file(path, FileTarget::Document);
        settle(&mut engine).await;

        assert_eq!(engine.state.input.text(), "# Draft\nTeh cat.");
    }

    #[tokio::test]
    async fn test_unreadable_file_does_not_disturb_analysis() {
        let dir = tempdir().unwrap();
        let mut engine = Engine::new(
            Settings::default(),
            MockAnalyzer::new()
                .with_delay(Duration::from_millis(30))
                .with_result(teh_cat_result()),
        );
        type_document(&mut engine, "Teh cat sat.\n");
        engine.process_message(Message::SubmitAnalysis);
        engine.load_file(dir.path().join("missing.yml"), FileTarget::Rules);

        // File failure arrives first, then the analysis
        settle(&mut engine).await;
        assert!(engine.state.is_loading());
        settle(&mut engine).await;
        assert_eq!(engine.state.phase, AnalysisPhase::Succeeded);
    }
}

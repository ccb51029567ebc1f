//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use mechedit_analysis::{read_text_file, Analyzer};
use mechedit_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// Every task reports back through `msg_tx`; nothing here touches state.
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, analyzer: Arc<A>)
where
    A: Analyzer + Sync + 'static,
{
    match action {
        UpdateAction::RunAnalysis {
            request_id,
            request,
        } => {
            tokio::spawn(async move {
                let msg = match analyzer.analyze(&request).await {
                    Ok(result) => Message::AnalysisCompleted { request_id, result },
                    Err(e) => Message::AnalysisFailed {
                        request_id,
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(msg).await.is_err() {
                    debug!("Analysis {} finished after the engine shut down", request_id);
                }
            });
        }

        UpdateAction::RunSuggestions {
            request_id,
            document,
        } => {
            tokio::spawn(async move {
                let msg = match analyzer.suggest(&document).await {
                    Ok(suggestions) => Message::SuggestionsCompleted {
                        request_id,
                        suggestions,
                    },
                    Err(e) => Message::SuggestionsFailed {
                        request_id,
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(msg).await.is_err() {
                    debug!("Suggestions {} finished after the engine shut down", request_id);
                }
            });
        }

        UpdateAction::ReadFile { path, target } => {
            tokio::spawn(async move {
                let msg = match read_text_file(&path, target.kind()).await {
                    Ok(content) => Message::FileLoaded {
                        path,
                        target,
                        content,
                    },
                    Err(e) => Message::FileReadFailed {
                        path,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

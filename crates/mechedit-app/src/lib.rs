//! # mechedit-app - Application State and Orchestration
//!
//! Implements the TEA (The Elm Architecture) pattern for The Mechanical
//! Editor. Holds the document, the last analysis result, the loading phase
//! and the selected issue, and turns messages into state changes plus
//! background actions.
//!
//! ## Public API
//!
//! ### TEA Core
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible events/actions
//! - [`handler::update()`] - State transition function
//! - [`UpdateAction`] - Side effects the runner performs after update
//!
//! ### Engine
//! - [`Engine`] - Owns state, message channel and analyzer; shared by the
//!   TUI and headless runners
//!
//! ### Selection
//! - [`selection`] - Select issues and resolve "scroll into view" requests
//!
//! ### Configuration
//! - [`config::Settings`] - `.mechedit/config.toml`
//! - [`config::load_settings()`], [`config::init_config_dir()`]

pub mod actions;
pub mod config;
pub mod document_input;
pub mod document_view_state;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;

pub use config::Settings;
pub use document_input::DocumentInput;
pub use document_view_state::DocumentViewState;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifications::{Notifications, Toast, ToastVariant};
pub use state::{AnalysisPhase, AppState, FileTarget, Focus, PathPrompt, RuleFile, UiMode};

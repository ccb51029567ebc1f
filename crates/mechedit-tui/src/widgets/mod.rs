//! Custom widget components

mod document_view;
mod header;
mod input_form;
mod path_prompt;
mod suggestions_panel;
mod toast;

pub use document_view::{DocumentView, ViewMetrics, SPINNER_FRAMES};
pub use header::MainHeader;
pub use input_form::InputForm;
pub use path_prompt::{centered_rect, PathPromptDialog};
pub use suggestions_panel::{location_label, SuggestionsPanel};
pub use toast::ToastStack;

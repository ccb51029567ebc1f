//! # mechedit-core - Core Domain Types
//!
//! Foundation crate for The Mechanical Editor. Provides the analysis domain
//! types, the span reconciliation renderer, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`document`)
//! - [`ErrorRecord`] - One flagged span reported by the analysis collaborator
//! - [`AnalysisResult`] - Corrected document plus ordered error records
//! - [`ErrorId`] - Deterministic `error-{line}-{start}` identifier
//!
//! ### Rendering (`render`)
//! - [`DocumentRendering`] - Lazy, restartable line-by-line span view
//! - [`Segment`], [`Highlight`], [`RenderedLine`] - Painted pieces of a line
//! - [`SpanLocation`] - Row/column of a highlight, used to scroll it into view
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mechedit_core::prelude::*;
//! ```

pub mod document;
pub mod error;
pub mod logging;
pub mod render;

/// Prelude for common imports used throughout all Mechanical Editor crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use document::{assign_error_ids, AnalysisResult, ErrorId, ErrorRecord};
pub use error::{Error, Result, ResultExt};
pub use render::{DocumentRendering, Highlight, RenderedLine, RenderedLines, Segment, SpanLocation};

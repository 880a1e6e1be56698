//! Doc-comment formats per language.
//!
//! # Architecture
//!
//! * [`format`]: The [`CommentFormat`] descriptor and its marker roles
//! * [`catalog`]: Language id to format lookup, with config overrides layered on top
//! * [`scope`]: Recognizing documentation-comment scopes reported by a host
//!
//! Unsupported languages have no catalog entry. Callers treat a missing entry as
//! "doc continuation inactive", never as an error.

pub mod catalog;
pub mod format;
pub mod scope;

pub use catalog::FormatCatalog;
pub use format::{CommentFormat, MarkerRole};
pub use scope::{DOC_SCOPES, is_doc_scope};

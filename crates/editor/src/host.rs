//! Host editing surface.
//!
//! The core never owns document text. It reads one line and the cursor from a
//! [`DocumentHost`], optionally asks it for semantic scopes or declarations, and asks
//! it to apply a single edit.

use async_trait::async_trait;
use quill_primitives::{DocumentId, TextPosition};
use thiserror::Error;

use crate::declaration::Declaration;

/// Errors reported by a host.
///
/// None of these are fatal: advisory query failures select a fallback, and edit
/// failures turn into a plain line break.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
	/// The host does not offer this capability.
	#[error("host does not support {0}")]
	Unsupported(&'static str),
	/// An advisory query failed.
	#[error("host query failed: {0}")]
	Query(String),
	/// The host refused or could not apply an edit.
	#[error("edit rejected: {0}")]
	EditRejected(String),
	/// The document went away during the operation.
	#[error("document closed")]
	DocumentClosed,
}

/// Editing surface the core runs against.
///
/// Scope and declaration queries are optional; the default implementations report
/// [`HostError::Unsupported`] and the core falls back to text matching.
#[async_trait]
pub trait DocumentHost: Send + Sync {
	/// Identity of the current document.
	fn document_id(&self) -> DocumentId;

	/// Language identifier of the current document (e.g. `"typescript"`).
	fn language_id(&self) -> String;

	/// Text of a line without its line terminator, or `None` past the end.
	fn line(&self, index: usize) -> Option<String>;

	/// Current cursor position.
	fn cursor(&self) -> TextPosition;

	/// Scopes active at a position.
	async fn scopes_at(&self, _position: TextPosition) -> Result<Vec<String>, HostError> {
		Err(HostError::Unsupported("scope queries"))
	}

	/// Declarations in the current document.
	async fn declarations(&self) -> Result<Vec<Declaration>, HostError> {
		Err(HostError::Unsupported("declaration queries"))
	}

	/// Inserts `text` at `at`. Either the whole text is inserted or nothing changes.
	async fn apply_edit(&mut self, at: TextPosition, text: &str) -> Result<(), HostError>;

	/// Moves the cursor.
	fn set_cursor(&mut self, position: TextPosition);

	/// Performs the host's default line break at the cursor.
	async fn insert_line_break(&mut self) -> Result<(), HostError>;
}

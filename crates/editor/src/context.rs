//! Per-query doc-block context.

use quill_language::MarkerRole;
use quill_primitives::{TextPosition, TextRange};

use crate::declaration::Declaration;

/// Which marker the current line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineClass {
	/// The line carries the block start marker.
	Leading,
	/// The line carries the interior prefix.
	Content,
	/// The line carries the block end marker.
	Trailing,
	/// No marker matched, or classification came from host scopes.
	#[default]
	None,
}

impl From<MarkerRole> for LineClass {
	fn from(role: MarkerRole) -> Self {
		match role {
			MarkerRole::Leading => LineClass::Leading,
			MarkerRole::Content => LineClass::Content,
			MarkerRole::Trailing => LineClass::Trailing,
		}
	}
}

/// Where the cursor sits relative to a doc block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
	/// Not in a doc block.
	Outside,
	/// On a line opening the block.
	Leading,
	/// On an interior line.
	Content,
	/// On the closing line, before the end marker.
	TrailingBeforeClose,
	/// On the closing line, at or past the end marker.
	TrailingAfterClose,
}

/// Result of resolving the cursor against the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocContext {
	/// Whether a line break here should continue the block.
	pub in_doc_block: bool,
	/// Literal text to reproduce before the prefix on the continuation line.
	pub indentation: String,
	/// Marker matched by text classification.
	pub line_class: LineClass,
	/// Character range of the matched marker on the cursor line.
	pub marker: Option<TextRange>,
	/// Language of the document.
	pub language_id: String,
	/// Cursor position the context was resolved for.
	pub position: TextPosition,
	/// Length of the cursor line in characters.
	pub line_length: usize,
	/// Declaration the block most likely documents. Advisory only.
	pub documentation_target: Option<Declaration>,
}

impl DocContext {
	/// Context for a cursor that is not in a doc block.
	pub fn outside(language_id: &str, position: TextPosition, line_length: usize) -> Self {
		Self {
			in_doc_block: false,
			indentation: String::new(),
			line_class: LineClass::None,
			marker: None,
			language_id: language_id.to_string(),
			position,
			line_length,
			documentation_target: None,
		}
	}

	/// Returns true if the cursor is at (or past) the end of its line.
	pub fn at_line_end(&self) -> bool {
		self.position.character >= self.line_length
	}

	/// Maps the context onto the block state set.
	pub fn state(&self) -> BlockState {
		match (self.in_doc_block, self.line_class) {
			(false, LineClass::Trailing) => BlockState::TrailingAfterClose,
			(false, _) => BlockState::Outside,
			(true, LineClass::Leading) => BlockState::Leading,
			(true, LineClass::Trailing) => BlockState::TrailingBeforeClose,
			(true, LineClass::Content | LineClass::None) => BlockState::Content,
		}
	}
}

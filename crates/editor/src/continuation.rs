//! Continuation text and cursor placement.

use quill_language::CommentFormat;
use quill_primitives::TextPosition;

use crate::context::DocContext;

/// Edit continuing a doc block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
	/// Where the text is inserted (the cursor position at the line break).
	pub insert_at: TextPosition,
	/// Text to insert.
	pub text: String,
	/// Cursor position after the edit: end of the new prefixed line.
	pub cursor: TextPosition,
	/// Whether the text also opens a blank line after the prefixed one.
	pub trailing_line: bool,
}

/// Computes the edit for a line break inside a doc block.
///
/// The inserted text is a newline, the context's indentation, and the format's
/// prefix. When the cursor is at the end of a multi-line block's line, a second
/// newline follows so the next keystroke lands on a fresh line. The cursor goes to
/// the end of the prefixed line, never onto the trailing one.
///
/// `context` must be in a doc block; callers check [`DocContext::in_doc_block`].
pub fn compute_continuation(format: &CommentFormat, context: &DocContext) -> Continuation {
	let trailing_line = format.multi_line && context.at_line_end();

	let mut text = String::with_capacity(2 + context.indentation.len() + format.block_prefix.len());
	text.push('\n');
	text.push_str(&context.indentation);
	text.push_str(&format.block_prefix);
	if trailing_line {
		text.push('\n');
	}

	let column = context.indentation.chars().count() + format.block_prefix.chars().count();

	Continuation {
		insert_at: context.position,
		text,
		cursor: context.position.line_start_below(1).with_character(column),
		trailing_line,
	}
}

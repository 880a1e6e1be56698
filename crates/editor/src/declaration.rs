//! Best-effort lookup of the declaration a doc block documents.

use lsp_types::SymbolKind;
use quill_primitives::{TextPosition, TextRange};

/// A declaration reported by the host's symbol provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
	/// Symbol kind (function, class, ...).
	pub kind: SymbolKind,
	/// Declared name.
	pub name: String,
	/// Extra detail such as a signature.
	pub detail: Option<String>,
	/// Full range of the declaration.
	pub range: TextRange,
}

/// Picks the declaration closest below a doc line.
///
/// Candidates either start on the next line or enclose its start. The one starting
/// nearest to the next line wins; ties keep host order.
///
/// Ranking is by distance, not by start line: a doc block inside a method documents
/// the method, never the outermost class that also encloses it.
pub fn nearest_declaration(declarations: &[Declaration], position: TextPosition) -> Option<&Declaration> {
	let next_line = position.line_start_below(1);

	declarations
		.iter()
		.filter(|decl| decl.range.contains(next_line) || decl.range.start.line == next_line.line)
		.min_by_key(|decl| decl.range.start.line.abs_diff(next_line.line))
}

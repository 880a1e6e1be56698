use async_trait::async_trait;
use quill_language::{CommentFormat, MarkerRole};
use quill_primitives::TextRange;

use super::{ContextStrategy, Resolution, ResolveInput};
use crate::context::DocContext;
use crate::host::DocumentHost;

/// Classifies the cursor line by the comment markers it contains.
///
/// Always definitive, so it belongs at the end of a chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMatchStrategy;

#[async_trait]
impl ContextStrategy for TextMatchStrategy {
	fn name(&self) -> &'static str {
		"text"
	}

	async fn resolve(&self, _host: &dyn DocumentHost, input: &ResolveInput<'_>) -> Resolution {
		Resolution::Definitive(TextMatchStrategy::classify(input))
	}
}

/// A marker located in the line text.
struct MarkerMatch<'a> {
	role: MarkerRole,
	marker: &'a str,
	/// Byte offset of the marker.
	offset: usize,
}

impl TextMatchStrategy {
	/// Classifies `input` without consulting the host.
	///
	/// The first marker found in precedence order (leading, content, trailing)
	/// classifies the line. In multi-line formats the cursor is outside once it
	/// reaches the end of the first end marker on the line, wherever that marker
	/// sits relative to the classifying one. In single-marker formats the cursor is
	/// inside once the marker lies before it.
	pub fn classify(input: &ResolveInput<'_>) -> DocContext {
		let line = input.line_text;
		let Some(found) = find_marker(input.format, line) else {
			return input.outside();
		};

		let start_char = char_count(&line[..found.offset]);
		let marker_end_char = start_char + char_count(found.marker);
		let cursor = input.position.character;

		let in_doc_block = if input.format.multi_line {
			!closing_end(input.format, line).is_some_and(|close| cursor >= close)
		} else {
			cursor >= marker_end_char
		};

		DocContext {
			in_doc_block,
			indentation: line[..found.offset].to_string(),
			line_class: found.role.into(),
			marker: Some(TextRange::on_line(input.position.line, start_char, marker_end_char)),
			..input.outside()
		}
	}
}

fn find_marker<'a>(format: &'a CommentFormat, line: &str) -> Option<MarkerMatch<'a>> {
	MarkerRole::PRECEDENCE.into_iter().find_map(|role| {
		let marker = format.marker(role)?;
		let offset = line.find(marker)?;
		Some(MarkerMatch { role, marker, offset })
	})
}

/// Character offset just past the first end marker on the line.
///
/// When start and end markers are identical, as in triple-quoted docs, the start
/// marker itself is that first end marker.
fn closing_end(format: &CommentFormat, line: &str) -> Option<usize> {
	let end = format.marker(MarkerRole::Trailing)?;
	let offset = line.find(end)?;
	Some(char_count(&line[..offset + end.len()]))
}

fn char_count(s: &str) -> usize {
	s.chars().count()
}

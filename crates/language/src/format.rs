//! Comment format descriptors.
//!
//! A [`CommentFormat`] names the literal markers a language uses for documentation
//! comments. Symmetric block dialects (`/** ... */`) have all three markers and are
//! multi-line. Asymmetric line dialects (`///`) repeat one marker on every line and
//! have no terminator.

use quill_config::FormatOverride;

/// Which marker of a doc block a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
	/// The block start marker, e.g. `/**`.
	Leading,
	/// The interior line prefix, e.g. ` * `.
	Content,
	/// The block end marker, e.g. ` */`.
	Trailing,
}

impl MarkerRole {
	/// Roles in classification precedence order.
	pub const PRECEDENCE: [MarkerRole; 3] = [MarkerRole::Leading, MarkerRole::Content, MarkerRole::Trailing];
}

/// Doc-comment markers for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFormat {
	/// Marker opening a doc block.
	pub block_start: String,
	/// Marker prefixed to each interior line.
	pub block_prefix: String,
	/// Marker closing a doc block, absent for dialects with no terminator.
	pub block_end: Option<String>,
	/// Marker for ordinary line comments. Informational only.
	pub inline_prefix: Option<String>,
	/// True when the dialect has separate start/content/end lines.
	pub multi_line: bool,
}

impl CommentFormat {
	/// C-family block docs: `/**`, ` * `, ` */`.
	pub fn c_block() -> Self {
		Self {
			block_start: "/**".into(),
			block_prefix: " * ".into(),
			block_end: Some(" */".into()),
			inline_prefix: Some("//".into()),
			multi_line: true,
		}
	}

	/// Triple-slash line docs with no terminator.
	pub fn triple_slash() -> Self {
		Self {
			block_start: "///".into(),
			block_prefix: "/// ".into(),
			block_end: None,
			inline_prefix: Some("//".into()),
			multi_line: false,
		}
	}

	/// Triple-quoted string docs with an empty interior prefix.
	pub fn triple_quote() -> Self {
		Self {
			block_start: "\"\"\"".into(),
			block_prefix: String::new(),
			block_end: Some("\"\"\"".into()),
			inline_prefix: Some("#".into()),
			multi_line: true,
		}
	}

	/// Returns the marker for a role.
	///
	/// Empty markers are reported as absent: an empty string cannot identify a line.
	pub fn marker(&self, role: MarkerRole) -> Option<&str> {
		let marker = match role {
			MarkerRole::Leading => Some(self.block_start.as_str()),
			MarkerRole::Content => Some(self.block_prefix.as_str()),
			MarkerRole::Trailing => self.block_end.as_deref(),
		};
		marker.filter(|m| !m.is_empty())
	}
}

impl From<&FormatOverride> for CommentFormat {
	fn from(value: &FormatOverride) -> Self {
		Self {
			block_start: value.start.clone(),
			block_prefix: value.prefix.clone(),
			block_end: value.end.clone(),
			inline_prefix: value.inline.clone(),
			multi_line: value.is_multi_line(),
		}
	}
}

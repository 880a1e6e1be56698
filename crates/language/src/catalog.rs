//! Language id to comment format lookup.

use std::collections::HashMap;

use quill_config::QuillConfig;

use crate::format::CommentFormat;

/// Language ids sharing the C-family `/** */` doc format.
const C_BLOCK_LANGUAGES: &[&str] = &["javascript", "typescript", "objective-c", "c", "cpp", "java"];

/// Immutable table of comment formats keyed by language id.
#[derive(Debug, Clone)]
pub struct FormatCatalog {
	formats: HashMap<String, CommentFormat>,
}

impl FormatCatalog {
	/// Catalog with only the built-in formats.
	pub fn builtin() -> Self {
		let mut formats: HashMap<String, CommentFormat> = C_BLOCK_LANGUAGES
			.iter()
			.map(|id| (id.to_string(), CommentFormat::c_block()))
			.collect();
		formats.insert("swift".into(), CommentFormat::triple_slash());
		formats.insert("python".into(), CommentFormat::triple_quote());
		Self { formats }
	}

	/// Built-in catalog with configured overrides layered on top.
	///
	/// An override replaces the whole entry for its language.
	pub fn from_config(config: &QuillConfig) -> Self {
		let mut catalog = Self::builtin();
		for (language, format) in &config.languages {
			let replaced = catalog.formats.insert(language.clone(), CommentFormat::from(format)).is_some();
			tracing::debug!(language = %language, replaced, "applied comment format override");
		}
		catalog
	}

	/// Returns the format for a language, or `None` if the language is unsupported.
	pub fn lookup(&self, language_id: &str) -> Option<&CommentFormat> {
		self.formats.get(language_id)
	}
}

impl Default for FormatCatalog {
	fn default() -> Self {
		Self::builtin()
	}
}

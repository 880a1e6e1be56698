//! Documentation-comment scope recognition.
//!
//! Hosts report scopes as dotted names (`comment.block.documentation.js`), sometimes
//! several per string separated by whitespace. A scope denotes documentation when its
//! leading segments match one of [`DOC_SCOPES`].

/// Scope prefixes that mark documentation comments.
pub const DOC_SCOPES: &[&str] = &["comment.block.documentation", "comment.line.documentation"];

/// Returns true if any scope in `scope` denotes a documentation comment.
pub fn is_doc_scope(scope: &str) -> bool {
	scope
		.split_whitespace()
		.any(|name| DOC_SCOPES.iter().any(|doc| has_segment_prefix(name, doc)))
}

/// Dotted-segment prefix match: `a.b.c` has prefix `a.b` but not `a.bc` or `a.b.c.d`.
fn has_segment_prefix(name: &str, prefix: &str) -> bool {
	let mut name_parts = name.split('.');
	prefix.split('.').all(|part| name_parts.next() == Some(part))
}

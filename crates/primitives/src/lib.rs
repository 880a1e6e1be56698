//! Core coordinate types for doc-comment continuation: positions, ranges, and document ids.

/// Identifier types for host documents.
pub mod ids;
/// Line/character positions and ranges.
pub mod position;

pub use ids::DocumentId;
pub use position::{TextPosition, TextRange};

/// Position in line/character coordinates.
///
/// Characters are Unicode scalar values, not bytes. Positions are plain values: moving a
/// cursor means building a new position, never editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TextPosition {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based character offset in the line.
	pub character: usize,
}

impl TextPosition {
	/// Creates a new position.
	pub const fn new(line: usize, character: usize) -> Self {
		Self { line, character }
	}

	/// Returns a position on the same line at another column.
	pub const fn with_character(self, character: usize) -> Self {
		Self::new(self.line, character)
	}

	/// Returns the start of the line `offset` lines below this one.
	pub const fn line_start_below(self, offset: usize) -> Self {
		Self::new(self.line + offset, 0)
	}
}

impl std::fmt::Display for TextPosition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.line, self.character)
	}
}

/// Range with start and end positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
	/// Start position (inclusive).
	pub start: TextPosition,
	/// End position (exclusive).
	pub end: TextPosition,
}

impl TextRange {
	/// Creates a new range.
	pub const fn new(start: TextPosition, end: TextPosition) -> Self {
		Self { start, end }
	}

	/// Creates a range covering `start..end` characters of a single line.
	pub const fn on_line(line: usize, start: usize, end: usize) -> Self {
		Self::new(TextPosition::new(line, start), TextPosition::new(line, end))
	}

	/// Returns true if `pos` lies within the range.
	///
	/// Both ends are inclusive, matching how editors report symbol ranges.
	pub fn contains(&self, pos: TextPosition) -> bool {
		self.start <= pos && pos <= self.end
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_positions_order_by_line_then_character() {
		assert!(TextPosition::new(1, 9) < TextPosition::new(2, 0));
		assert!(TextPosition::new(2, 1) > TextPosition::new(2, 0));
	}

	#[test]
	fn test_derived_positions_are_new_values() {
		let pos = TextPosition::new(4, 7);
		let moved = pos.with_character(2);
		assert_eq!(pos, TextPosition::new(4, 7));
		assert_eq!(moved, TextPosition::new(4, 2));
		assert_eq!(pos.line_start_below(1), TextPosition::new(5, 0));
	}

	#[test]
	fn test_range_contains_is_inclusive() {
		let range = TextRange::new(TextPosition::new(3, 0), TextPosition::new(8, 1));
		assert!(range.contains(TextPosition::new(3, 0)));
		assert!(range.contains(TextPosition::new(5, 40)));
		assert!(range.contains(TextPosition::new(8, 1)));
		assert!(!range.contains(TextPosition::new(8, 2)));
		assert!(!range.contains(TextPosition::new(2, 99)));
	}

	#[test]
	fn test_single_line_range() {
		let range = TextRange::on_line(2, 3, 6);
		assert_eq!(range.start, TextPosition::new(2, 3));
		assert_eq!(range.end, TextPosition::new(2, 6));
		assert!(range.contains(TextPosition::new(2, 6)));
		assert!(!range.contains(TextPosition::new(3, 0)));
	}
}

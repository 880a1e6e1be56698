//! Line-break handling against an in-memory editor host.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use quill_config::QuillConfig;
use quill_editor::{CountingLineBreakHandler, DocumentHost, FallbackReason, HostError, LineBreakHandler, LineBreakOutcome};
use quill_primitives::{DocumentId, TextPosition};
use rstest::rstest;

/// Editor host holding the document as lines.
struct MemoryHost {
	id: DocumentId,
	language: String,
	lines: Vec<String>,
	cursor: TextPosition,
	scopes: Option<Vec<String>>,
	reject_edits: bool,
	fail_line_break: bool,
	default_line_breaks: usize,
}

impl MemoryHost {
	fn new(language: &str, lines: &[&str], cursor: (usize, usize)) -> Self {
		Self {
			id: DocumentId::next(),
			language: language.to_string(),
			lines: lines.iter().map(|l| l.to_string()).collect(),
			cursor: TextPosition::new(cursor.0, cursor.1),
			scopes: None,
			reject_edits: false,
			fail_line_break: false,
			default_line_breaks: 0,
		}
	}

	/// Cursor at the end of the last line.
	fn at_end(language: &str, lines: &[&str]) -> Self {
		let last = lines.len() - 1;
		Self::new(language, lines, (last, lines[last].chars().count()))
	}

	fn with_scopes(mut self, scopes: &[&str]) -> Self {
		self.scopes = Some(scopes.iter().map(|s| s.to_string()).collect());
		self
	}

	fn insert(&mut self, at: TextPosition, text: &str) {
		let line = &self.lines[at.line];
		let byte = line.char_indices().nth(at.character).map_or(line.len(), |(i, _)| i);
		let combined = format!("{}{}{}", &line[..byte], text, &line[byte..]);
		let replacement: Vec<String> = combined.split('\n').map(str::to_string).collect();
		self.lines.splice(at.line..=at.line, replacement);
	}
}

#[async_trait]
impl DocumentHost for MemoryHost {
	fn document_id(&self) -> DocumentId {
		self.id
	}

	fn language_id(&self) -> String {
		self.language.clone()
	}

	fn line(&self, index: usize) -> Option<String> {
		self.lines.get(index).cloned()
	}

	fn cursor(&self) -> TextPosition {
		self.cursor
	}

	async fn scopes_at(&self, _position: TextPosition) -> Result<Vec<String>, HostError> {
		self.scopes.clone().ok_or(HostError::Unsupported("scope queries"))
	}

	async fn apply_edit(&mut self, at: TextPosition, text: &str) -> Result<(), HostError> {
		if self.reject_edits {
			return Err(HostError::EditRejected("document is read-only".into()));
		}
		self.insert(at, text);
		Ok(())
	}

	fn set_cursor(&mut self, position: TextPosition) {
		self.cursor = position;
	}

	async fn insert_line_break(&mut self) -> Result<(), HostError> {
		if self.fail_line_break {
			return Err(HostError::DocumentClosed);
		}
		self.insert(self.cursor, "\n");
		self.cursor = TextPosition::new(self.cursor.line + 1, 0);
		self.default_line_breaks += 1;
		Ok(())
	}
}

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
		.try_init();
}

#[tokio::test]
async fn test_block_start_at_end_of_line() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::at_end("typescript", &["  /** foo"]);

	let outcome = handler.handle_line_break(&mut host).await;

	let LineBreakOutcome::Continued(continuation) = outcome else {
		panic!("expected continuation");
	};
	assert_eq!(continuation.text, "\n   * \n");
	assert_eq!(host.lines, vec!["  /** foo", "   * ", ""]);
	assert_eq!(host.cursor, TextPosition::new(1, 5));
	assert_eq!(host.default_line_breaks, 0);
}

#[tokio::test]
async fn test_content_line_mid_line() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::new("java", &["   * @param x description"], (0, 13));

	let outcome = handler.handle_line_break(&mut host).await;

	assert!(outcome.is_continued());
	assert_eq!(host.lines, vec!["   * @param x", "   *  description"]);
	assert_eq!(host.cursor, TextPosition::new(1, 5));
}

#[tokio::test]
async fn test_triple_slash_keeps_continuing() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::at_end("swift", &["/// Summary"]);

	let first = handler.handle_line_break(&mut host).await;
	assert!(first.is_continued());
	assert_eq!(host.lines, vec!["/// Summary", "/// "]);
	assert_eq!(host.cursor, TextPosition::new(1, 4));

	let second = handler.handle_line_break(&mut host).await;
	assert!(second.is_continued());
	assert_eq!(host.lines, vec!["/// Summary", "/// ", "/// "]);
	assert_eq!(host.cursor, TextPosition::new(2, 4));
}

#[tokio::test]
async fn test_past_block_end_falls_back() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::new("c", &[" */"], (0, 3));

	let outcome = handler.handle_line_break(&mut host).await;

	assert_eq!(
		outcome,
		LineBreakOutcome::Fallback {
			reason: FallbackReason::NotInDocBlock,
			inserted: true,
		}
	);
	assert_eq!(host.lines, vec![" */", ""]);
	assert_eq!(host.cursor, TextPosition::new(1, 0));
}

#[rstest]
#[case("/// docs")]
#[case("/** docs")]
#[case("plain code")]
#[tokio::test]
async fn test_unsupported_language_always_falls_back(#[case] line: &str) {
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::at_end("cobol", &[line]).with_scopes(&["comment.block.documentation"]);

	let outcome = handler.handle_line_break(&mut host).await;

	assert_eq!(
		outcome,
		LineBreakOutcome::Fallback {
			reason: FallbackReason::UnsupportedLanguage,
			inserted: true,
		}
	);
	assert_eq!(host.default_line_breaks, 1);
}

#[rstest]
#[case("javascript")]
#[case("typescript")]
#[case("objective-c")]
#[case("c")]
#[case("cpp")]
#[case("java")]
#[tokio::test]
async fn test_symmetric_formats_continue_content_lines(#[case] language: &str) {
	let handler = LineBreakHandler::default();

	let mut at_end = MemoryHost::at_end(language, &["/**", "    * text"]);
	let LineBreakOutcome::Continued(continuation) = handler.handle_line_break(&mut at_end).await else {
		panic!("expected continuation");
	};
	assert_eq!(continuation.text, "\n    * \n");

	let mut mid = MemoryHost::new(language, &["/**", "    * text"], (1, 7));
	let LineBreakOutcome::Continued(continuation) = handler.handle_line_break(&mut mid).await else {
		panic!("expected continuation");
	};
	assert_eq!(continuation.text, "\n    * ");
}

#[tokio::test]
async fn test_rejected_edit_falls_back_to_plain_line_break() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::at_end("c", &["/** doc"]);
	host.reject_edits = true;

	let outcome = handler.handle_line_break(&mut host).await;

	assert_eq!(
		outcome,
		LineBreakOutcome::Fallback {
			reason: FallbackReason::EditRejected,
			inserted: true,
		}
	);
	assert_eq!(host.lines, vec!["/** doc", ""]);
}

#[tokio::test]
async fn test_failed_default_line_break_is_reported() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::at_end("c", &["int x;"]);
	host.fail_line_break = true;

	let outcome = handler.handle_line_break(&mut host).await;

	assert_eq!(
		outcome,
		LineBreakOutcome::Fallback {
			reason: FallbackReason::NotInDocBlock,
			inserted: false,
		}
	);
	assert_eq!(host.lines, vec!["int x;"]);
}

#[tokio::test]
async fn test_scopes_decide_when_available() {
	init_tracing();
	let handler = LineBreakHandler::default();

	// A docstring body line has no marker; only the host's scopes reveal it.
	let mut host = MemoryHost::at_end("python", &["def f():", "    \"\"\"Summary.", "    more"])
		.with_scopes(&["source.python string.quoted.docstring comment.block.documentation.python"]);
	let LineBreakOutcome::Continued(continuation) = handler.handle_line_break(&mut host).await else {
		panic!("expected continuation");
	};
	assert_eq!(continuation.text, "\n    \n");
	assert_eq!(host.cursor, TextPosition::new(3, 4));

	// Text matching alone would continue this line.
	let mut outside = MemoryHost::at_end("c", &["  /** foo"]).with_scopes(&["source.c"]);
	let outcome = handler.handle_line_break(&mut outside).await;
	assert!(!outcome.is_continued());

	// An empty answer is still an answer.
	let mut no_scopes = MemoryHost::at_end("c", &["  /** foo"]).with_scopes(&[]);
	let outcome = handler.handle_line_break(&mut no_scopes).await;
	assert_eq!(
		outcome,
		LineBreakOutcome::Fallback {
			reason: FallbackReason::NotInDocBlock,
			inserted: true,
		}
	);
}

#[tokio::test]
async fn test_closing_docstring_line_breaks_normally() {
	init_tracing();
	let handler = LineBreakHandler::default();
	let mut host = MemoryHost::at_end("python", &["def f():", "    \"\"\"Summary.", "    \"\"\""]);

	let outcome = handler.handle_line_break(&mut host).await;

	assert_eq!(
		outcome,
		LineBreakOutcome::Fallback {
			reason: FallbackReason::NotInDocBlock,
			inserted: true,
		}
	);
	assert_eq!(host.default_line_breaks, 1);
	assert_eq!(host.lines.len(), 4);
}

#[tokio::test]
async fn test_configured_language() {
	init_tracing();
	let config = QuillConfig::from_toml_str(
		r#"
		[features]
		scope-detection = false

		[languages.rust]
		start = "///"
		prefix = "/// "
		"#,
	)
	.unwrap();
	let handler = LineBreakHandler::from_config(&config);
	let mut host = MemoryHost::at_end("rust", &["    /// Adds two numbers."]).with_scopes(&["source.rust"]);

	let outcome = handler.handle_line_break(&mut host).await;

	assert!(outcome.is_continued());
	assert_eq!(host.lines, vec!["    /// Adds two numbers.", "    /// "]);
	assert_eq!(host.cursor, TextPosition::new(1, 8));
}

#[tokio::test]
async fn test_counting_handler_tracks_consecutive_continuations() {
	init_tracing();
	let mut handler = CountingLineBreakHandler::default();
	let mut host = MemoryHost::at_end("swift", &["/// Summary"]);
	let id = host.id;
	handler.counter_mut().document_opened(id);

	for expected in 1..=3 {
		assert!(handler.handle_line_break(&mut host).await.is_continued());
		handler.counter_mut().document_changed(id);
		assert_eq!(handler.counter().count(id), expected);
	}

	// The user types something.
	handler.counter_mut().document_changed(id);
	assert_eq!(handler.counter().count(id), 0);

	assert!(handler.handle_line_break(&mut host).await.is_continued());
	assert_eq!(handler.counter().count(id), 1);

	handler.counter_mut().document_closed(id);
	assert_eq!(handler.counter().tracked_documents(), 0);
}

#[tokio::test]
async fn test_counting_handler_resets_on_fallback() {
	let mut handler = CountingLineBreakHandler::new(LineBreakHandler::default());
	let mut host = MemoryHost::at_end("c", &["/** doc"]);
	let id = host.id;

	assert!(handler.handle_line_break(&mut host).await.is_continued());
	assert_eq!(handler.counter().count(id), 1);

	// Close the block and break the line past the end marker.
	host.lines.push(" */".to_string());
	host.cursor = TextPosition::new(host.lines.len() - 1, 3);
	let outcome = handler.handle_line_break(&mut host).await;

	assert!(!outcome.is_continued());
	assert_eq!(handler.counter().count(id), 0);
}

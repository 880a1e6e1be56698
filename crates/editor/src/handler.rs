//! Line-break entry point.

use quill_config::QuillConfig;

use crate::continuation::{Continuation, compute_continuation};
use crate::host::DocumentHost;
use crate::resolver::ContextResolver;

/// Why a line break was not turned into a doc continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
	/// No comment format for the document's language.
	UnsupportedLanguage,
	/// The cursor is not inside a doc block.
	NotInDocBlock,
	/// The host rejected the continuation edit.
	EditRejected,
}

/// What a line break did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineBreakOutcome {
	/// The doc block was continued.
	Continued(Continuation),
	/// The host's default line break was requested instead.
	Fallback {
		/// Why continuation did not apply.
		reason: FallbackReason,
		/// Whether the host performed the default line break.
		inserted: bool,
	},
}

impl LineBreakOutcome {
	/// Returns true if the doc block was continued.
	pub fn is_continued(&self) -> bool {
		matches!(self, LineBreakOutcome::Continued(_))
	}
}

/// Handles line breaks by continuing doc blocks where the cursor is inside one.
#[derive(Default)]
pub struct LineBreakHandler {
	resolver: ContextResolver,
}

impl LineBreakHandler {
	/// Creates a handler around a resolver.
	pub fn new(resolver: ContextResolver) -> Self {
		Self { resolver }
	}

	/// Creates a handler configured from user settings.
	pub fn from_config(config: &QuillConfig) -> Self {
		Self::new(ContextResolver::from_config(config))
	}

	/// The resolver in use.
	pub fn resolver(&self) -> &ContextResolver {
		&self.resolver
	}

	/// Handles one line-break event.
	///
	/// Continues the doc block under the cursor with a single edit and moves the
	/// cursor to the end of the new prefixed line. Whenever that does not apply or
	/// the edit fails, the host's default line break runs instead, so the user
	/// always gets a line break.
	pub async fn handle_line_break<H: DocumentHost>(&self, host: &mut H) -> LineBreakOutcome {
		let language_id = host.language_id();
		let Some(format) = self.resolver.catalog().lookup(&language_id) else {
			return fall_back(host, FallbackReason::UnsupportedLanguage).await;
		};

		let position = host.cursor();
		let context = self.resolver.resolve_context(&*host, &language_id, position).await;
		if !context.in_doc_block {
			return fall_back(host, FallbackReason::NotInDocBlock).await;
		}

		let continuation = compute_continuation(format, &context);
		if let Err(err) = host.apply_edit(continuation.insert_at, &continuation.text).await {
			tracing::debug!(
				error = %err,
				document = %host.document_id(),
				"doc continuation edit rejected"
			);
			return fall_back(host, FallbackReason::EditRejected).await;
		}
		host.set_cursor(continuation.cursor);

		tracing::trace!(
			document = %host.document_id(),
			language = %language_id,
			at = %continuation.insert_at,
			cursor = %continuation.cursor,
			"continued doc block"
		);
		LineBreakOutcome::Continued(continuation)
	}
}

async fn fall_back<H: DocumentHost>(host: &mut H, reason: FallbackReason) -> LineBreakOutcome {
	let inserted = match host.insert_line_break().await {
		Ok(()) => true,
		Err(err) => {
			tracing::warn!(
				error = %err,
				document = %host.document_id(),
				reason = ?reason,
				"default line break failed"
			);
			false
		}
	};
	LineBreakOutcome::Fallback { reason, inserted }
}

//! Per-document continuation counter.
//!
//! Counts consecutive doc continuations per document for UX heuristics. The map is
//! owned by the integration layer and follows document lifecycle notifications.
//! Any edit the user makes resets the count; the edit produced by a continuation
//! itself does not.

use std::collections::HashMap;

use quill_primitives::DocumentId;

use crate::handler::{LineBreakHandler, LineBreakOutcome};
use crate::host::DocumentHost;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CounterEntry {
	count: usize,
	/// A change notification for our own edit is still expected.
	pending_self_edit: bool,
}

/// Consecutive continuation counts keyed by document.
#[derive(Debug, Default)]
pub struct ContinuationCounter {
	entries: HashMap<DocumentId, CounterEntry>,
}

impl ContinuationCounter {
	/// Creates an empty counter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts tracking a document.
	pub fn document_opened(&mut self, id: DocumentId) {
		self.entries.insert(id, CounterEntry::default());
	}

	/// Stops tracking a document.
	pub fn document_closed(&mut self, id: DocumentId) {
		self.entries.remove(&id);
	}

	/// Notes a change to a document's text.
	///
	/// The first change after a continuation is that continuation's own edit and
	/// keeps the count. Any other change resets it.
	pub fn document_changed(&mut self, id: DocumentId) {
		let Some(entry) = self.entries.get_mut(&id) else {
			return;
		};
		if entry.pending_self_edit {
			entry.pending_self_edit = false;
		} else {
			entry.count = 0;
		}
	}

	/// Records a continuation applied to a document.
	///
	/// Documents opened before tracking started are picked up here.
	pub fn record_continuation(&mut self, id: DocumentId) {
		let entry = self.entries.entry(id).or_default();
		entry.count += 1;
		entry.pending_self_edit = true;
	}

	/// Resets a document's count.
	pub fn reset(&mut self, id: DocumentId) {
		if let Some(entry) = self.entries.get_mut(&id) {
			*entry = CounterEntry::default();
		}
	}

	/// Consecutive continuations in a document.
	pub fn count(&self, id: DocumentId) -> usize {
		self.entries.get(&id).map_or(0, |entry| entry.count)
	}

	/// Number of documents being tracked.
	pub fn tracked_documents(&self) -> usize {
		self.entries.len()
	}
}

/// [`LineBreakHandler`] that also maintains a [`ContinuationCounter`].
#[derive(Default)]
pub struct CountingLineBreakHandler {
	inner: LineBreakHandler,
	counter: ContinuationCounter,
}

impl CountingLineBreakHandler {
	/// Wraps a handler with a fresh counter.
	pub fn new(inner: LineBreakHandler) -> Self {
		Self {
			inner,
			counter: ContinuationCounter::new(),
		}
	}

	/// The counter.
	pub fn counter(&self) -> &ContinuationCounter {
		&self.counter
	}

	/// The counter, for lifecycle notifications.
	pub fn counter_mut(&mut self) -> &mut ContinuationCounter {
		&mut self.counter
	}

	/// Handles a line break and updates the document's count.
	pub async fn handle_line_break<H: DocumentHost>(&mut self, host: &mut H) -> LineBreakOutcome {
		let id = host.document_id();
		let outcome = self.inner.handle_line_break(host).await;

		match &outcome {
			LineBreakOutcome::Continued(_) => self.counter.record_continuation(id),
			LineBreakOutcome::Fallback { .. } => self.counter.reset(id),
		}
		tracing::trace!(document = %id, count = self.counter.count(id), "continuation count updated");

		outcome
	}
}

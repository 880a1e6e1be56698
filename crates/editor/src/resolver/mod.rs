//! Doc-block context resolution.
//!
//! Detection runs an ordered chain of [`ContextStrategy`]s. Each strategy either
//! answers definitively or passes. The default chain asks the host for semantic
//! scopes first ([`ScopeStrategy`]) and falls back to matching comment markers in
//! the line text ([`TextMatchStrategy`]), which always answers.

mod scope;
mod text;

use async_trait::async_trait;
use quill_config::QuillConfig;
use quill_language::{CommentFormat, FormatCatalog};
use quill_primitives::TextPosition;
pub use scope::ScopeStrategy;
pub use text::TextMatchStrategy;

use crate::context::DocContext;
use crate::declaration::{Declaration, nearest_declaration};
use crate::host::DocumentHost;

/// Inputs shared by every strategy for one query.
#[derive(Debug, Clone, Copy)]
pub struct ResolveInput<'a> {
	/// Language of the document.
	pub language_id: &'a str,
	/// Format for that language.
	pub format: &'a CommentFormat,
	/// Text of the cursor line.
	pub line_text: &'a str,
	/// Cursor position.
	pub position: TextPosition,
}

impl ResolveInput<'_> {
	/// Length of the cursor line in characters.
	pub fn line_length(&self) -> usize {
		self.line_text.chars().count()
	}

	/// Context for "not in a doc block" at this input.
	pub fn outside(&self) -> DocContext {
		DocContext::outside(self.language_id, self.position, self.line_length())
	}
}

/// Answer from a single strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The strategy decided.
	Definitive(DocContext),
	/// The strategy could not decide; try the next one.
	Inconclusive,
}

/// One way of deciding whether the cursor is in a doc block.
#[async_trait]
pub trait ContextStrategy: Send + Sync {
	/// Short name for diagnostics.
	fn name(&self) -> &'static str;

	/// Resolves the input, or passes with [`Resolution::Inconclusive`].
	async fn resolve(&self, host: &dyn DocumentHost, input: &ResolveInput<'_>) -> Resolution;
}

/// Resolves cursor positions to [`DocContext`]s.
pub struct ContextResolver {
	catalog: FormatCatalog,
	strategies: Vec<Box<dyn ContextStrategy>>,
	declaration_lookup: bool,
}

impl ContextResolver {
	/// Resolver with the default chain and declaration lookup enabled.
	pub fn new(catalog: FormatCatalog) -> Self {
		Self::with_strategies(
			catalog,
			vec![Box::new(ScopeStrategy), Box::new(TextMatchStrategy)],
			true,
		)
	}

	/// Resolver with an explicit strategy chain.
	pub fn with_strategies(catalog: FormatCatalog, strategies: Vec<Box<dyn ContextStrategy>>, declaration_lookup: bool) -> Self {
		Self {
			catalog,
			strategies,
			declaration_lookup,
		}
	}

	/// Resolver configured from user settings.
	///
	/// Disabling scope detection drops [`ScopeStrategy`] from the chain.
	pub fn from_config(config: &QuillConfig) -> Self {
		let mut strategies: Vec<Box<dyn ContextStrategy>> = Vec::with_capacity(2);
		if config.features.scope_detection {
			strategies.push(Box::new(ScopeStrategy));
		}
		strategies.push(Box::new(TextMatchStrategy));

		let resolver = Self::with_strategies(FormatCatalog::from_config(config), strategies, config.features.declaration_lookup);
		tracing::debug!(
			strategies = ?resolver.strategy_names(),
			declaration_lookup = resolver.declaration_lookup,
			"context resolver configured"
		);
		resolver
	}

	/// The format catalog used for lookups.
	pub fn catalog(&self) -> &FormatCatalog {
		&self.catalog
	}

	/// Names of the strategies in chain order.
	pub fn strategy_names(&self) -> Vec<&'static str> {
		self.strategies.iter().map(|s| s.name()).collect()
	}

	/// Resolves the doc-block context at `position`.
	///
	/// Unsupported languages and missing lines resolve to "outside" without
	/// consulting any strategy.
	pub async fn resolve_context(&self, host: &dyn DocumentHost, language_id: &str, position: TextPosition) -> DocContext {
		let Some(format) = self.catalog.lookup(language_id) else {
			return DocContext::outside(language_id, position, 0);
		};
		let Some(line_text) = host.line(position.line) else {
			tracing::debug!(line = position.line, "cursor line not available");
			return DocContext::outside(language_id, position, 0);
		};

		let input = ResolveInput {
			language_id,
			format,
			line_text: &line_text,
			position,
		};

		let mut context = self.run_chain(host, &input).await;
		if context.in_doc_block && self.declaration_lookup {
			context.documentation_target = lookup_declaration(host, position).await;
		}
		context
	}

	async fn run_chain(&self, host: &dyn DocumentHost, input: &ResolveInput<'_>) -> DocContext {
		for strategy in &self.strategies {
			match strategy.resolve(host, input).await {
				Resolution::Definitive(context) => {
					tracing::trace!(
						strategy = strategy.name(),
						in_doc_block = context.in_doc_block,
						position = %input.position,
						"doc context resolved"
					);
					return context;
				}
				Resolution::Inconclusive => {
					tracing::trace!(strategy = strategy.name(), "strategy inconclusive");
				}
			}
		}
		input.outside()
	}
}

impl Default for ContextResolver {
	fn default() -> Self {
		Self::new(FormatCatalog::builtin())
	}
}

async fn lookup_declaration(host: &dyn DocumentHost, position: TextPosition) -> Option<Declaration> {
	match host.declarations().await {
		Ok(declarations) => nearest_declaration(&declarations, position).cloned(),
		Err(err) => {
			tracing::debug!(error = %err, "declaration lookup failed");
			None
		}
	}
}

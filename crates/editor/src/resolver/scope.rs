use async_trait::async_trait;
use quill_language::is_doc_scope;

use super::{ContextStrategy, Resolution, ResolveInput};
use crate::context::{DocContext, LineClass};
use crate::host::{DocumentHost, HostError};

/// Asks the host which scopes are active at the cursor.
///
/// Scope-aware answers are authoritative: a block that closed earlier on the same
/// line reports no documentation scope at the cursor, and an empty answer means no
/// scope at all. Only unsupported or failing scope queries are inconclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeStrategy;

#[async_trait]
impl ContextStrategy for ScopeStrategy {
	fn name(&self) -> &'static str {
		"scope"
	}

	async fn resolve(&self, host: &dyn DocumentHost, input: &ResolveInput<'_>) -> Resolution {
		let scopes = match host.scopes_at(input.position).await {
			Ok(scopes) => scopes,
			Err(HostError::Unsupported(_)) => return Resolution::Inconclusive,
			Err(err) => {
				tracing::debug!(
					error = %err,
					language = input.language_id,
					"scope query failed, falling back to text analysis"
				);
				return Resolution::Inconclusive;
			}
		};
		let in_doc_block = scopes.iter().any(|scope| is_doc_scope(scope));
		Resolution::Definitive(DocContext {
			in_doc_block,
			indentation: leading_whitespace(input.line_text).to_string(),
			line_class: LineClass::None,
			..input.outside()
		})
	}
}

fn leading_whitespace(line: &str) -> &str {
	let end = line.find(|c: char| !c.is_whitespace()).unwrap_or(line.len());
	&line[..end]
}

//! Doc-comment continuation on line break.
//!
//! When the user presses Enter, the [`LineBreakHandler`] decides whether the cursor
//! sits inside a documentation comment and, if so, inserts the next line of the
//! block with the right indentation and marker:
//!
//! ```text
//! line break ─▶ FormatCatalog::lookup ─▶ ContextResolver ─▶ compute_continuation ─▶ host edit
//!                     │ absent                 │ outside                               │ rejected
//!                     ▼                        ▼                                       ▼
//!               plain line break         plain line break                       plain line break
//! ```
//!
//! # Modules
//!
//! * [`host`]: What the core needs from the editing surface ([`DocumentHost`])
//! * [`context`]: The per-query [`DocContext`] and its [`BlockState`]
//! * [`resolver`]: Ordered detection strategies (host scopes, then text markers)
//! * [`continuation`]: Insertion text and cursor placement
//! * [`declaration`]: Best-effort lookup of the declaration being documented
//! * [`handler`]: The line-break entry point
//! * [`counter`]: Per-document continuation counter layered over the handler
//!
//! Every query is computed from scratch. Nothing here keeps state between line
//! breaks except the optional [`ContinuationCounter`], which the integration layer owns.

pub mod context;
pub mod continuation;
pub mod counter;
pub mod declaration;
pub mod handler;
pub mod host;
pub mod resolver;

pub use context::{BlockState, DocContext, LineClass};
pub use continuation::{Continuation, compute_continuation};
pub use counter::{ContinuationCounter, CountingLineBreakHandler};
pub use declaration::{Declaration, nearest_declaration};
pub use handler::{FallbackReason, LineBreakHandler, LineBreakOutcome};
pub use host::{DocumentHost, HostError};
pub use resolver::{ContextResolver, ContextStrategy, Resolution, ResolveInput, ScopeStrategy, TextMatchStrategy};

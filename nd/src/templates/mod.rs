//! Plan Template System
//!
//! Renders per-category plan documents without a remote backend.
//!
//! Template loading chain:
//! 1. `{templates.dir}/{category}.pmt` (override)
//! 2. Embedded template compiled into the binary
//!
//! Templates use Handlebars syntax with escaping disabled, so request text
//! lands in the output exactly as the caller wrote it.

pub mod embedded;
mod fallback;
mod loader;

pub use fallback::{FALLBACK_MARKER, fallback_document, quick_plan};
pub use loader::{TemplateContext, TemplateLoader, synthesize};

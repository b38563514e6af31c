//! Domain types for plan generation
//!
//! - [`Category`] - the fixed category taxonomy and keyword classifier
//! - [`GenerationRequest`] - validated per-call input
//! - [`GeneratedDocument`] - output text tagged with its source

mod category;
mod request;

pub use category::{Category, classify};
pub use request::{DocumentSource, GeneratedDocument, GenerationMode, GenerationRequest, RequestError};

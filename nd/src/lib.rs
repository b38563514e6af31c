//! NeuroDesk - plan and code generation service
//!
//! Turns a free-text goal into a structured markdown plan (or code, for code
//! requests). A configured remote text-generation backend is tried first; when
//! it cannot answer, the caller still gets a usable document.
//!
//! # Core Concepts
//!
//! - **Categories**: seven fixed domains chosen by keyword substring match
//! - **Templates**: per-category plans rendered locally, no network needed
//! - **Bounded Retry**: throttling and transport errors back off 1s, 2s, 4s, 8s
//! - **Total Availability**: [`PlanService::generate`] always returns a document
//!
//! # Modules
//!
//! - [`domain`] - categories, requests and documents
//! - [`templates`] - template loading and offline synthesis
//! - [`llm`] - remote client, prompt construction and retry policy
//! - [`service`] - the generation facade
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod service;
pub mod templates;

// Re-export commonly used types
pub use config::{Config, LlmConfig, TemplatesConfig};
pub use domain::{
    Category, DocumentSource, GeneratedDocument, GenerationMode, GenerationRequest, RequestError, classify,
};
pub use llm::{
    GeminiClient, Intent, RemoteError, RetryPolicy, RetryState, Sleeper, TextGenerator, TokioSleeper, create_client,
    detect_intent,
};
pub use service::{MetricsSnapshot, OfflinePlan, PlanService, ServiceMetrics, Usage, generate_offline};
pub use templates::{TemplateLoader, fallback_document, synthesize};

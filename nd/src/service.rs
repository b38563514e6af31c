//! Plan service facade
//!
//! The single entry point for generation. A call tries the remote backend and,
//! when that fails for any reason, answers with the fixed-format fallback
//! document instead of an error.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{DocumentSource, GeneratedDocument, GenerationRequest, classify};
use crate::llm::{RemoteError, TextGenerator};
use crate::templates::{TemplateLoader, fallback_document};

/// Counters for generation outcomes (thread-safe)
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    remote_successes: AtomicU64,
    fallbacks: AtomicU64,
    offline: AtomicU64,
    cancelled: AtomicU64,
    /// Fallback count keyed by RemoteError::kind
    fallback_kinds: RwLock<HashMap<&'static str, u64>>,
}

/// Point-in-time copy of [`ServiceMetrics`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub remote_successes: u64,
    pub fallbacks: u64,
    pub offline: u64,
    pub cancelled: u64,
    pub fallback_kinds: HashMap<String, u64>,
}

impl ServiceMetrics {
    fn record_success(&self) {
        self.remote_successes.fetch_add(1, Ordering::Relaxed);
    }

    fn record_fallback(&self, err: &RemoteError) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut kinds) = self.fallback_kinds.write() {
            *kinds.entry(err.kind()).or_default() += 1;
        }
    }

    fn record_offline(&self) {
        self.offline.fetch_add(1, Ordering::Relaxed);
    }

    fn record_cancelled(&self) {
        self.cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let fallback_kinds = self
            .fallback_kinds
            .read()
            .map(|kinds| kinds.iter().map(|(k, v)| (k.to_string(), *v)).collect())
            .unwrap_or_default();
        MetricsSnapshot {
            remote_successes: self.remote_successes.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            offline: self.offline.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
            fallback_kinds,
        }
    }
}

/// Size accounting for an offline plan, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

/// Template-rendered plan plus its usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflinePlan {
    pub document: GeneratedDocument,
    pub usage: Usage,
}

/// Classify when needed, then render the category template
pub fn generate_offline(loader: &TemplateLoader, request: &GenerationRequest) -> OfflinePlan {
    let category = request.category().unwrap_or_else(|| classify(request.raw_text()));
    debug!(%category, explicit = request.category().is_some(), "generate_offline: called");
    let document = loader.synthesize(category, request.raw_text());

    let prompt_tokens = request.raw_text().chars().count();
    let completion_tokens = document.as_str().chars().count();
    OfflinePlan {
        document,
        usage: Usage {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        },
    }
}

/// Generation facade over a remote backend
pub struct PlanService {
    remote: Arc<dyn TextGenerator>,
    templates: TemplateLoader,
    metrics: ServiceMetrics,
}

impl PlanService {
    pub fn new(remote: Arc<dyn TextGenerator>) -> Self {
        Self {
            remote,
            templates: TemplateLoader::embedded_only(),
            metrics: ServiceMetrics::default(),
        }
    }

    /// Use a specific template loader for offline generation
    pub fn with_templates(mut self, templates: TemplateLoader) -> Self {
        self.templates = templates;
        self
    }

    /// Generate a document; never fails
    ///
    /// Remote text is returned as-is. Any remote error is logged, counted, and
    /// replaced by the fallback document for the request.
    pub async fn generate(&self, request: &GenerationRequest) -> GeneratedDocument {
        let category = request.resolved_category();
        debug!(%category, text_len = request.raw_text().len(), "generate: called");

        match self.remote.request_remote(request.raw_text(), category).await {
            Ok(text) => {
                self.metrics.record_success();
                info!(%category, len = text.len(), "generate: remote success");
                GeneratedDocument::new(text, DocumentSource::Remote)
            }
            Err(err) => {
                self.metrics.record_fallback(&err);
                warn!(
                    %category,
                    kind = err.kind(),
                    error = %err,
                    "generate: remote generation failed, returning fallback"
                );
                GeneratedDocument::new(
                    fallback_document(request.raw_text(), category),
                    DocumentSource::Fallback,
                )
            }
        }
    }

    /// Generate unless `cancel` completes first
    ///
    /// Cancelling drops the in-flight request and any pending backoff sleep.
    pub async fn generate_until<F>(&self, request: &GenerationRequest, cancel: F) -> Option<GeneratedDocument>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            doc = self.generate(request) => Some(doc),
            _ = cancel => {
                self.metrics.record_cancelled();
                info!("generate_until: cancelled");
                None
            }
        }
    }

    /// Render from templates without touching the backend
    pub fn generate_offline(&self, request: &GenerationRequest) -> OfflinePlan {
        self.metrics.record_offline();
        generate_offline(&self.templates, request)
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

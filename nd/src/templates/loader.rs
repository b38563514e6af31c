//! Template Loader
//!
//! Loads plan templates from an override directory or falls back to the
//! embedded copies, then renders them with Handlebars.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{embedded, fallback};
use crate::domain::{Category, DocumentSource, GeneratedDocument};

/// Values available to every template
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    /// Request text, verbatim
    pub request: &'a str,
    /// Category display name
    pub category: &'static str,
}

/// Loads and renders plan templates
pub struct TemplateLoader {
    /// Handlebars template engine (escaping disabled, output is markdown)
    hbs: Handlebars<'static>,
    /// Override directory holding `{name}.pmt` files
    override_dir: Option<PathBuf>,
}

impl TemplateLoader {
    /// Create a loader that prefers templates in `dir` when it exists
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "TemplateLoader::new: called");
        Self {
            hbs: Self::engine(),
            override_dir: if dir.is_dir() { Some(dir.to_path_buf()) } else { None },
        }
    }

    /// Create a loader that only uses embedded templates
    pub fn embedded_only() -> Self {
        Self {
            hbs: Self::engine(),
            override_dir: None,
        }
    }

    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. Override: `{override_dir}/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        if let Some(ref dir) = self.override_dir {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading template from override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read template {}: {}", path.display(), e));
            }
        }

        embedded::get_embedded(name)
            .map(str::to_string)
            .ok_or_else(|| eyre!("Template not found: {}", name))
    }

    /// Render the named template
    pub fn render(&self, name: &str, context: &TemplateContext<'_>) -> Result<String> {
        let template = self.load_template(name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", name, e))
    }

    /// Render the plan for a category; never fails
    ///
    /// An override that fails to render, renders blank, or drops the request
    /// text falls back to the embedded template. A failed embedded render
    /// falls back to the quick plan.
    pub fn synthesize(&self, category: Category, raw_text: &str) -> GeneratedDocument {
        debug!(%category, text_len = raw_text.len(), "synthesize: called");
        let context = TemplateContext {
            request: raw_text,
            category: category.display_name(),
        };

        let text = match self
            .render(category.name(), &context)
            .and_then(|text| Self::check_plan(text, raw_text))
        {
            Ok(text) => text,
            Err(e) => {
                warn!(%category, error = %e, "synthesize: template failed, using embedded copy");
                self.render_embedded(category.name(), &context)
                    .and_then(|text| Self::check_plan(text, raw_text))
                    .unwrap_or_else(|e| {
                        warn!(%category, error = %e, "synthesize: embedded template failed, using quick plan");
                        fallback::quick_plan(raw_text)
                    })
            }
        };

        info!(%category, len = text.len(), "synthesize: rendered plan");
        GeneratedDocument::new(text, DocumentSource::Template)
    }

    /// A rendered plan must be non-blank and quote the request verbatim
    fn check_plan(text: String, raw_text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(eyre!("rendered plan is empty"));
        }
        if !text.contains(raw_text) {
            return Err(eyre!("rendered plan does not contain the request"));
        }
        Ok(text)
    }

    fn render_embedded(&self, name: &str, context: &TemplateContext<'_>) -> Result<String> {
        let template = embedded::get_embedded(name).ok_or_else(|| eyre!("Template not found: {}", name))?;
        self.hbs
            .render_template(template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", name, e))
    }
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::embedded_only()
    }
}

/// Render the embedded plan for a category
pub fn synthesize(category: Category, raw_text: &str) -> GeneratedDocument {
    TemplateLoader::embedded_only().synthesize(category, raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_health_plan_example() {
        let text = "Create a beginner-friendly fitness routine for weight loss";
        let doc = synthesize(Category::Health, text);
        assert_eq!(doc.source(), DocumentSource::Template);
        assert!(doc.as_str().starts_with("# 💪 Complete Health & Fitness Plan"));
        assert!(doc.as_str().contains("## 📅 Weekly Schedule"));
        assert!(doc.as_str().contains(text));
    }

    #[test]
    fn test_request_is_not_html_escaped() {
        let text = "<b>Q&A</b> \"launch\" for my startup";
        let doc = synthesize(Category::Business, text);
        assert!(doc.as_str().contains(text));
        assert!(!doc.as_str().contains("&amp;"));
    }

    #[test]
    fn test_request_is_not_reinterpreted() {
        let text = "render {{this}} literally";
        let doc = synthesize(Category::General, text);
        assert!(doc.as_str().contains(text));
    }

    #[test]
    fn test_override_dir_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("travel.pmt"), "# Custom {{category}}\n{{request}}\n").unwrap();

        let loader = TemplateLoader::new(dir.path());
        let doc = loader.synthesize(Category::Travel, "Lisbon weekend");
        assert_eq!(doc.as_str(), "# Custom Travel Planning\nLisbon weekend\n");

        // Categories without an override still use the embedded copy
        let doc = loader.synthesize(Category::Health, "run a 5k");
        assert!(doc.as_str().starts_with("# 💪"));
    }

    #[test]
    fn test_broken_override_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("learning.pmt"), "{{#if}} unclosed").unwrap();

        let loader = TemplateLoader::new(dir.path());
        let doc = loader.synthesize(Category::Learning, "learn rust");
        assert!(doc.as_str().starts_with("# 📚 Comprehensive Learning Plan"));
        assert!(doc.as_str().contains("learn rust"));
    }

    #[test]
    fn test_empty_override_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("health.pmt"), "").unwrap();

        let loader = TemplateLoader::new(dir.path());
        let doc = loader.synthesize(Category::Health, "run a 5k");
        assert!(!doc.is_empty());
        assert!(doc.as_str().starts_with("# 💪 Complete Health & Fitness Plan"));
        assert!(doc.as_str().contains("run a 5k"));
    }

    #[test]
    fn test_override_without_request_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("health.pmt"), "# My plan\n").unwrap();

        let loader = TemplateLoader::new(dir.path());
        let doc = loader.synthesize(Category::Health, "run a 5k");
        assert_ne!(doc.as_str(), "# My plan\n");
        assert!(doc.as_str().starts_with("# 💪 Complete Health & Fitness Plan"));
        assert!(doc.as_str().contains("run a 5k"));
    }

    #[test]
    fn test_check_plan_rejects_blank_output() {
        assert!(TemplateLoader::check_plan("  \n".to_string(), "x").is_err());
        assert!(TemplateLoader::check_plan("# Plan\n".to_string(), "x").is_err());
        assert!(TemplateLoader::check_plan("# Plan\nx\n".to_string(), "x").is_ok());
    }

    #[test]
    fn test_missing_override_dir_is_ignored() {
        let loader = TemplateLoader::new("/nonexistent/neurodesk/templates");
        assert!(loader.override_dir.is_none());
    }

    #[test]
    fn test_unknown_template_errors() {
        let loader = TemplateLoader::embedded_only();
        assert!(loader.load_template("cooking").is_err());
    }

    proptest! {
        #[test]
        fn prop_synthesize_contains_request(text in "[a-zA-Z0-9 ,.!?'&<>{}-]{1,120}", idx in 0usize..7) {
            let category = Category::ALL[idx];
            let doc = synthesize(category, &text);
            prop_assert!(!doc.is_empty());
            prop_assert!(doc.as_str().starts_with("# "));
            prop_assert!(doc.as_str().contains(&text));
        }
    }
}

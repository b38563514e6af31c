//! NeuroDesk - plan and code generator
//!
//! CLI entry point.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use neurodesk::cli::{Cli, Command};
use neurodesk::config::Config;
use neurodesk::domain::{Category, GenerationRequest, classify};
use neurodesk::llm::create_client;
use neurodesk::service::{PlanService, generate_offline};
use neurodesk::templates::TemplateLoader;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("neurodesk")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("neurodesk.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Plan {
            text,
            category,
            mode,
            offline,
        } => {
            let request = GenerationRequest::for_mode(text, mode, category)?;
            let templates = TemplateLoader::new(&config.templates.dir);
            if offline {
                cmd_plan_offline(&templates, &request)
            } else {
                cmd_plan(&config, templates, &request).await
            }
        }
        Command::Classify { text } => cmd_classify(&text),
        Command::Categories => cmd_categories(),
        Command::Config => cmd_config(&config),
    }
}

fn cmd_plan_offline(templates: &TemplateLoader, request: &GenerationRequest) -> Result<()> {
    let plan = generate_offline(templates, request);
    println!("{}", plan.document);
    eprintln!(
        "{}",
        format!(
            "offline plan: {} prompt + {} completion = {} chars",
            plan.usage.prompt_tokens, plan.usage.completion_tokens, plan.usage.total_tokens
        )
        .dimmed()
    );
    Ok(())
}

async fn cmd_plan(config: &Config, templates: TemplateLoader, request: &GenerationRequest) -> Result<()> {
    config.validate().context("Invalid configuration")?;
    let client = create_client(&config.llm).context("Failed to create generation client")?;
    let service = PlanService::new(client).with_templates(templates);

    match service.generate_until(request, cancel_on(tokio::signal::ctrl_c())).await {
        Some(doc) => {
            println!("{}", doc);
            if doc.is_fallback() {
                eprintln!(
                    "{} backend unavailable, showing offline fallback (see log for details)",
                    "!".yellow()
                );
            }
        }
        None => {
            eprintln!("{} cancelled", "✗".red());
        }
    }
    Ok(())
}

/// Resolve when `signal` fires; a listener that fails to install never resolves
async fn cancel_on(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        warn!(error = %e, "cancel_on: failed to listen for signal, cancellation disabled");
        std::future::pending::<()>().await;
    }
}

fn cmd_classify(text: &str) -> Result<()> {
    let category = classify(text);
    println!("{} ({})", category.to_string().cyan(), category.display_name());
    Ok(())
}

fn cmd_categories() -> Result<()> {
    for category in Category::ALL {
        println!("{} - {}", category.to_string().cyan(), category.display_name().bold());
        if !category.keywords().is_empty() {
            println!("  keywords: {}", category.keywords().join(", "));
        }
        if let Some(hint) = category.focus_hint() {
            println!("  focus: {}", hint);
        }
        println!("  try: {}", category.starter_prompt().dimmed());
    }
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    print!("{}", yaml);
    Ok(())
}

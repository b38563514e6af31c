//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Category, GenerationMode};

/// NeuroDesk - plan and code generator
#[derive(Parser, Debug)]
#[command(
    name = "nd",
    about = "Generate step-by-step plans or code from a plain-language goal",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a plan (or code) for a goal
    Plan {
        /// The goal or request, in plain language
        #[arg(required = true)]
        text: String,

        /// Category (business, learning, health, travel, creative, personal, general)
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Output mode (planner, code)
        #[arg(short, long, default_value = "planner")]
        mode: GenerationMode,

        /// Render from local templates without calling the backend
        #[arg(long)]
        offline: bool,
    },

    /// Show which category a request falls into
    Classify {
        /// Text to classify
        #[arg(required = true)]
        text: String,
    },

    /// List categories with their keywords and starter prompts
    Categories,

    /// Print the effective configuration
    Config,
}

//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Interface to bind (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Courses command arguments.
#[derive(Debug, Args)]
pub struct CoursesCommand {
    /// Access mode to tag the courses with
    #[arg(short, long, value_enum, default_value = "ssr")]
    pub mode: ModeArg,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Docs command arguments.
#[derive(Debug, Args)]
pub struct DocsCommand {
    /// Show a single page by slug instead of listing all pages
    pub slug: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Access mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Static generation
    Ssg,
    /// Server-side rendering
    Ssr,
    /// Incremental static regeneration
    Isr,
}

impl From<ModeArg> for crate::catalog::AccessMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Ssg => Self::Ssg,
            ModeArg::Ssr => Self::Ssr,
            ModeArg::Isr => Self::Isr,
        }
    }
}

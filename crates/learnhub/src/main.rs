//! `learnhub` - CLI for the learning showcase backend
//!
//! This binary runs the HTTP API and offers read-only views of the catalog,
//! the docs index and the configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use learnhub::cli::{Cli, Command, ConfigCommand, CoursesCommand, DocsCommand, ServeCommand};
use learnhub::{
    init_logging, server, AccessMode, CatalogService, Config, DocMeta, DocsIndex, Error,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd).await,
        Command::Courses(courses_cmd) => handle_courses(&config, &courses_cmd).await,
        Command::Docs(docs_cmd) => handle_docs(&docs_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    config.validate()?;

    server::serve(&config).await?;
    Ok(())
}

async fn handle_courses(config: &Config, cmd: &CoursesCommand) -> anyhow::Result<()> {
    let catalog = CatalogService::new(config.catalog_latency());
    let courses = catalog.get_courses(cmd.mode.into()).await;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<24} {:<6} {:<5} {:<8} Updated",
        "ID", "Title", "Level", "Type", "Duration"
    );
    for view in &courses {
        let course = &view.course;
        println!(
            "{:<4} {:<24} {:<6} {:<5} {:<8} {}",
            course.id,
            course.title,
            course.level.to_string(),
            course.kind.to_string(),
            course.duration,
            course.updated_at
        );
    }
    println!();
    println!("Mode: {}", AccessMode::from(cmd.mode));
    Ok(())
}

fn handle_docs(cmd: &DocsCommand) -> anyhow::Result<()> {
    let index = DocsIndex::builtin();

    let Some(slug) = &cmd.slug else {
        if cmd.json {
            println!("{}", serde_json::to_string_pretty(index.all())?);
        } else {
            for doc in index.all() {
                println!("{:<16} {}", doc.slug, doc.title);
            }
        }
        return Ok(());
    };

    let doc = index
        .get(slug)
        .ok_or_else(|| Error::not_found("doc", slug.as_str()))?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(doc)?);
    } else {
        print_doc(doc);
    }
    Ok(())
}

fn print_doc(doc: &DocMeta) {
    println!("{}", doc.title);
    println!("  Slug:         {}", doc.slug);
    println!("  Description:  {}", doc.description);
    println!("  File:         {}", doc.file);
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Address:            {}", config.bind_address());
                println!("  CORS max age (s):   {}", config.server.cors_max_age_secs);
                println!();
                println!("[Catalog]");
                println!("  Latency (ms):       {}", config.catalog.latency_ms);
                println!();
                println!("[Feedback]");
                println!("  Anonymous name:     {}", config.feedback.anonymous_name);
                println!();
                println!("[Users]");
                println!("  Seed defaults:      {}", config.users.seed_defaults);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            validate_config_file(path)?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

fn validate_config_file(path: PathBuf) -> anyhow::Result<Config> {
    let display = path.display().to_string();
    Config::load_from(Some(path)).with_context(|| format!("invalid configuration in {display}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "learnhub_main_{name}_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_validate_config_file_accepts_valid() {
        let path = write_temp_config("valid", "[catalog]\nlatency_ms = 10\n");
        let config = validate_config_file(path.clone()).unwrap();
        assert_eq!(config.catalog.latency_ms, 10);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_validate_config_file_fails_on_invalid() {
        let path = write_temp_config("invalid", "[feedback]\nanonymous_name = \"\"\n");
        let err = validate_config_file(path.clone()).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
        assert!(format!("{err:#}").contains("anonymous_name"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_config_validate_command_returns_error() {
        let path = write_temp_config("command", "[catalog]\nlatency_ms = 999999\n");
        let cmd = ConfigCommand::Validate {
            file: Some(path.clone()),
        };
        assert!(handle_config(&Config::default(), cmd).is_err());
        let _ = std::fs::remove_file(&path);
    }
}

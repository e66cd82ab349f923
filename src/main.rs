mod cli;

use sr_core::config::Config;
use sr_core::SceneData;
use sr_stash::StashClient;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "stashrename=trace,sr_stash=trace,sr_core=debug".to_string()
        } else {
            "stashrename=info,sr_stash=warn,sr_core=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Ping => {
            let config = Config::load_or_default(cli.config.as_deref());
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(ping(&config))
        }
        Commands::Scene { id, json } => {
            let config = Config::load_or_default(cli.config.as_deref());
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(show_scene(&config, &id, json))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("stashrename {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn ping(config: &Config) -> Result<()> {
    tracing::debug!(url = %config.stash.url, "Querying Stash version");
    let client = StashClient::from_config(&config.stash);
    let version = client
        .version()
        .await
        .with_context(|| format!("Failed to reach Stash at {}", config.stash.url))?;

    println!("Stash {} at {}", version, config.stash.url);
    Ok(())
}

async fn show_scene(config: &Config, id: &str, json: bool) -> Result<()> {
    tracing::debug!(url = %config.stash.url, id, "Fetching scene");
    let client = StashClient::from_config(&config.stash);
    let scene = client
        .find_scene(id)
        .await
        .with_context(|| format!("Failed to fetch scene {id}"))?;

    let Some(scene) = scene else {
        anyhow::bail!("Scene {id} not found");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    } else {
        print_scene(&scene);
    }
    Ok(())
}

fn print_scene(scene: &SceneData) {
    println!("Scene: {}", scene.id.as_deref().unwrap_or("-"));
    println!("Title: {}", scene.title.as_deref().unwrap_or("-"));
    if let Some(ref date) = scene.date {
        println!("Date: {}", date);
    }
    if let Some(ref studio) = scene.studio {
        println!("Studio: {}", studio);
    }
    if !scene.performers.is_empty() {
        println!("Performers: {}", scene.performers.join(", "));
    }
    if !scene.tags.is_empty() {
        println!("Tags: {}", scene.tags.join(", "));
    }
    if let Some(ref movie) = scene.movie {
        println!("Movie: {}", movie.title.as_deref().unwrap_or("-"));
    }

    println!("\nFiles: {}", scene.original_filenames.len());
    for (i, path) in scene.original_filenames.iter().enumerate() {
        println!("  [{}] {}", i, path);
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            Config::load(p).with_context(|| format!("Invalid config {}", p.display()))?
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("✓ Configuration is valid");
    } else {
        println!("Configuration has {} warning(s):", warnings.len());
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }
    println!("  Stash URL: {}", config.stash.url);
    println!("  API key set: {}", config.stash.api_key.is_some());
    println!("  Timeout: {}s", config.stash.timeout_secs);

    Ok(())
}

//! Config command - manage configuration.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use cvscan_core::CvscanConfig;

use super::default_config_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "extraction.name_rule")
        key: String,
    },

    /// Set a configuration value
    ///
    /// Keyword tables accept a comma-separated list, e.g.
    /// `cvscan config set vocabulary.skills "rust,go,elixir"`.
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Add words to a keyword table without replacing it
    Extend {
        /// Table key (e.g., "vocabulary.location_keywords")
        key: String,
        /// Words to add
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(init_args, &path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => update_config(&path, &key, |current| {
            *current = parse_value(current, &value);
            Ok(())
        }),
        ConfigCommand::Extend { key, words } => update_config(&path, &key, |current| {
            let list = current
                .as_array_mut()
                .ok_or_else(|| anyhow::anyhow!("{} is not a keyword table", key))?;
            for word in words {
                let word = Value::String(word);
                if !list.contains(&word) {
                    list.push(word);
                }
            }
            Ok(())
        }),
        ConfigCommand::Path => show_path(&path),
    }
}

fn load_or_default(path: &Path) -> anyhow::Result<CvscanConfig> {
    if path.exists() {
        Ok(CvscanConfig::from_file(path)?)
    } else {
        Ok(CvscanConfig::default())
    }
}

fn show_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = load_or_default(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, path: &Path) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| path.to_path_buf());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    CvscanConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_or_default(path)?)?;
    let value = lookup(&json, key)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

/// Load, modify one key through `edit`, validate and save.
fn update_config<F>(path: &Path, key: &str, edit: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut Value) -> anyhow::Result<()>,
{
    let mut json = serde_json::to_value(load_or_default(path)?)?;
    let current = lookup_mut(&mut json, key)
        .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
    edit(current)?;
    let new_value = current.clone();

    // Round-trip through the typed config so invalid values are rejected.
    let config: CvscanConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    config.save(path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&new_value)?
    );

    Ok(())
}

fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

fn lookup_mut<'a>(json: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    key.split('.')
        .try_fold(json, |current, part| current.get_mut(part))
}

/// Interpret a command-line value in terms of the value it replaces.
///
/// Arrays take a comma-separated list; everything else is parsed as JSON,
/// falling back to a plain string.
fn parse_value(current: &Value, raw: &str) -> Value {
    if current.is_array() && !raw.trim_start().starts_with('[') {
        return Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| Value::String(s.to_string()))
                .collect(),
        );
    }

    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn show_path(path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'cvscan config init' to create a configuration file.");
    }

    Ok(())
}

//! CLI commands for tldr.
//!
//! The terminal frontend: one-shot `search`, `show` and `list`, dataset
//! validation, config helpers, and an `interactive` mode that re-searches on
//! every line typed.

pub mod interactive;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::core::{CommandEntry, EmptyQuery, Platform, SearchEngine};
use crate::data;
use crate::error::TldrResult;
use crate::ui::{self, LoadState, RenderOptions, ViewState};

#[derive(Parser, Debug)]
#[command(name = "tldr")]
#[command(about = "Simplified command reference for developers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset file to use instead of the configured or bundled one
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search commands by name and description
    Search {
        /// Search query (words are joined with spaces)
        query: Vec<String>,

        /// Show every command when the query is empty
        #[arg(long)]
        all: bool,

        /// Show all examples for every result
        #[arg(long)]
        expand: bool,

        /// Maximum number of results
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Print results as JSON in the dataset format
        #[arg(long)]
        json: bool,
    },

    /// Show one command with all of its examples
    Show {
        /// Command name (case-insensitive)
        name: String,
    },

    /// List commands, optionally filtered
    List {
        /// Only commands available on this platform (linux, mac, windows)
        #[arg(long)]
        platform: Option<Platform>,

        /// Only commands available on the current OS
        #[arg(long, conflicts_with = "platform")]
        current: bool,

        /// Only commands in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Validate a dataset file (the active dataset when omitted)
    Validate {
        path: Option<PathBuf>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Type queries line by line and see results as you go
    Interactive,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse arguments and run. Used by the binary.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, stdin.lock(), &mut stdout.lock())
}

/// Run a parsed command against the given input and output.
pub fn execute<R: io::BufRead, W: Write>(cli: Cli, input: R, out: &mut W) -> Result<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Config commands must work while the file is missing or broken
    if let Commands::Config { action } = &cli.command {
        return run_config(action, &config_path, out);
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            all,
            expand,
            limit,
            json,
        } => {
            let loaded = load_dataset(&config, cli.dataset.as_deref());
            let load = LoadState::from_load(&loaded);
            let Ok(commands) = loaded else {
                let rendered = ui::render(&load, &[], &ViewState::new(), &RenderOptions::default());
                write!(out, "{}", rendered)?;
                return Ok(ExitCode::FAILURE);
            };

            let mut options = config.search.engine_options();
            if all {
                options.empty_query = EmptyQuery::BrowseAll;
            }
            if limit.is_some() {
                options.max_results = limit;
            }
            let engine = SearchEngine::with_options(options);

            let mut view = ViewState::new();
            view.set_query(query.join(" "));
            let results = engine.search(&view.query, &commands);

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
                return Ok(ExitCode::SUCCESS);
            }

            if expand {
                for (index, command) in results.iter().enumerate() {
                    view.toggle_expanded(&command.name, index);
                }
            }
            let render_options = RenderOptions::from(&config.appearance);
            write!(out, "{}", ui::render(&load, &results, &view, &render_options))?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Show { name } => {
            let commands = load_dataset(&config, cli.dataset.as_deref())
                .context("failed to load commands")?;
            let command = data::find(&commands, &name)?;

            let mut rendered = String::new();
            ui::render_entry(&mut rendered, command, true, false, &RenderOptions::default());
            write!(out, "{}", rendered)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::List {
            platform,
            current,
            category,
        } => {
            let commands = load_dataset(&config, cli.dataset.as_deref())
                .context("failed to load commands")?;

            let platform = if current {
                match crate::platform::current() {
                    Some(p) => Some(p),
                    None => bail!("current OS is not one of linux, mac, windows"),
                }
            } else {
                platform
            };

            let listed = filter_commands(&commands, platform, category.as_deref());
            let width = listed.iter().map(|c| c.name.len()).max().unwrap_or(0);
            for command in &listed {
                writeln!(out, "{:<width$}  {}", command.name, command.description, width = width)?;
            }
            writeln!(out, "{} found", listed.len())?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate { path } => {
            let dataset = path.or(cli.dataset);
            let commands = match &dataset {
                Some(path) => data::load_from_path(path),
                None => data::load(&config),
            }
            .context("dataset is invalid")?;

            let source = dataset
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "active dataset".to_string());
            writeln!(out, "OK: {} commands in {}", commands.len(), source)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { action } => run_config(&action, &config_path, out),

        Commands::Interactive => {
            let loaded = load_dataset(&config, cli.dataset.as_deref());
            let load = LoadState::from_load(&loaded);
            let commands = loaded.unwrap_or_default();
            interactive::run_interactive(&commands, &load, &config, input, out)?;
            Ok(if matches!(load, LoadState::Failed(_)) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn run_config<W: Write>(action: &ConfigCommands, config_path: &Path, out: &mut W) -> Result<ExitCode> {
    match action {
        ConfigCommands::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default()
                .save_to(config_path)
                .with_context(|| format!("failed to write {}", config_path.display()))?;
            writeln!(out, "Wrote {}", config_path.display())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Load the config from `--config`, or the default location.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load()),
    }
}

/// `--dataset` wins over the config.
fn load_dataset(config: &Config, dataset: Option<&Path>) -> TldrResult<Vec<CommandEntry>> {
    match dataset {
        Some(path) => data::load_from_path(path),
        None => data::load(config),
    }
}

/// Commands matching the given platform and category, in dataset order.
pub fn filter_commands<'a>(
    commands: &'a [CommandEntry],
    platform: Option<Platform>,
    category: Option<&str>,
) -> Vec<&'a CommandEntry> {
    commands
        .iter()
        .filter(|c| platform.map_or(true, |p| c.supports(p)))
        .filter(|c| {
            category.map_or(true, |cat| {
                c.category
                    .as_deref()
                    .is_some_and(|own| own.eq_ignore_ascii_case(cat))
            })
        })
        .collect()
}

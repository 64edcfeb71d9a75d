//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::list::ListArgs;
use super::output::{Output, OutputFormat};
use super::query::{self, Selection};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Build, query and render todo lists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "TODO_LIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a list
    ///
    /// Examples:
    ///   todo show "Buy milk" "Clean room" --done 0
    ///   todo show -t Chores a b c --all-done --remove 1
    ///   todo show a b c --done 1 --only not-done
    Show {
        /// Which todos to render
        #[arg(long, value_enum, default_value = "all")]
        only: Selection,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show how many todos are done
    Status {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Find the first todo with an exact title
    Find {
        /// Title to look for
        query: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Render a small example list
    Demo,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(
        cli.format.unwrap_or(config.output.format),
        cli.verbose || config.output.verbose,
    );

    output.verbose("Todo CLI starting");
    if output.is_verbose() {
        let source = match cli.config.as_deref() {
            Some(path) => path.display().to_string(),
            None => Config::user_config_path()
                .filter(|path| path.is_file())
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string()),
        };
        output.verbose_ctx("config", &format!("Loaded config from {}", source));
    }
    output.verbose_ctx(
        "config",
        &format!("Default list title: '{}'", config.list.title),
    );

    match cli.command {
        Commands::Show { only, list } => {
            let list = list.build(&config.list.title, &output)?;
            query::show(&output, &list, only)?
        }
        Commands::Status { list } => {
            let list = list.build(&config.list.title, &output)?;
            query::status(&output, &list)?
        }
        Commands::Find { query: title, list } => {
            let list = list.build(&config.list.title, &output)?;
            query::find(&output, &list, &title)?
        }
        Commands::Demo => query::demo(&output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

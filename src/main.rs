#![forbid(unsafe_code)]
//! Funnel Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use funnel::commands::{
    execute_generate, execute_init, execute_interactive, execute_stages, GenerateOptions,
    InitOptions, InteractiveOptions, StagesOptions,
};
use funnel::config::CONFIG_FILE;
use funnel::{Config, Pacing};

#[derive(Parser)]
#[command(name = "funnel")]
#[command(about = "Marketing funnel video prompt generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Simulated generation delay in milliseconds (overrides config)
    #[arg(long, global = true, env = "FUNNEL_DELAY_MS")]
    delay_ms: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form and step through the funnel (default)
    Interactive,

    /// Generate a prompt for one stage
    Generate {
        /// Product name
        #[arg(short, long, default_value = "")]
        product: String,

        /// Industry or niche
        #[arg(short, long, default_value = "")]
        industry: String,

        /// Target audience
        #[arg(short, long, default_value = "")]
        audience: String,

        /// Funnel stage (see `funnel stages`)
        #[arg(short, long)]
        stage: Option<String>,

        /// Continue through every following stage
        #[arg(long)]
        all: bool,

        /// Copy the generated prompt(s) to the clipboard
        #[arg(long)]
        copy: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List funnel stages in order
    Stages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (use defaults)
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl Commands {
    /// `init` writes the config file and never parses the existing one
    fn reads_config(&self) -> bool {
        !matches!(self, Commands::Init { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Interactive);

    // Load config
    let config = if command.reads_config() {
        Config::resolve(&cli.config)?
    } else {
        Config::default()
    };
    let pacing = cli
        .delay_ms
        .map(Pacing::from_millis)
        .unwrap_or_else(|| config.pacing());

    match command {
        Commands::Interactive => {
            let options = InteractiveOptions {
                pacing,
                default_stage: config.default_stage,
            };
            execute_interactive(options).await?;
        }

        Commands::Generate { product, industry, audience, stage, all, copy, json } => {
            let options = GenerateOptions {
                product,
                industry,
                audience,
                stage,
                all,
                copy,
                json,
                pacing,
            };
            execute_generate(options).await?;
        }

        Commands::Stages { json } => {
            execute_stages(StagesOptions { json })?;
        }

        Commands::Init { force, yes } => {
            let options = InitOptions {
                path: cli.config,
                force,
                yes,
            };
            execute_init(options)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(args)
            .unwrap()
            .command
            .unwrap_or(Commands::Interactive)
    }

    #[test]
    fn test_init_skips_config_loading() {
        assert!(!command(&["funnel", "init", "--force"]).reads_config());
        assert!(!command(&["funnel", "--config", "broken.json", "init", "-y"]).reads_config());
    }

    #[test]
    fn test_other_commands_read_config() {
        assert!(command(&["funnel"]).reads_config());
        assert!(command(&["funnel", "stages"]).reads_config());
        assert!(command(&["funnel", "generate", "-p", "Acme", "-s", "awareness"]).reads_config());
    }
}

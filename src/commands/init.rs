//! @acp:module "Init Command"
//! @acp:summary "Write a default funnel config file"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `funnel init`.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::config::Config;
use crate::stage::StageId;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    if !options.yes {
        run_interactive_init(&mut config)?;
    }

    if let Some(parent) = options.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to fill in the form",
        style("funnel").cyan()
    );
    println!(
        "  2. Or {} for a one-shot prompt",
        style("funnel generate --help").cyan()
    );

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    println!("{} Funnel Setup\n", style("→").cyan());

    let simulate_delay = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Show a short generating delay?")
        .default(true)
        .interact()?;
    if !simulate_delay {
        config.generation_delay_ms = 0;
    }

    let items: Vec<&str> = StageId::ALL.iter().map(|s| s.label()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default stage")
        .items(&items)
        .default(0)
        .interact()?;
    config.default_stage = StageId::from_index(index).filter(|&s| s != StageId::Awareness);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_force_replaces_malformed_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::config::CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        execute_init(InitOptions {
            path: path.clone(),
            force: true,
            yes: true,
        })
        .unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}

//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod generate;
pub mod init;
pub mod interactive;
pub mod output;
pub mod stages;

pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use interactive::{execute_interactive, InteractiveOptions};
pub use output::TerminalPresenter;
pub use stages::{execute_stages, stage_entries, StageEntry, StagesOptions};

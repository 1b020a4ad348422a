#![forbid(unsafe_code)]

//! @acp:module "Funnel Library"
//! @acp:summary "Marketing funnel prompt templates, stage sequencing and session control"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Funnel - Marketing Funnel Prompt Generator
//!
//! Builds ready-to-paste prompts for AI writing tools from a product,
//! industry and audience, one fixed template per funnel stage.
//!
//! ## Features
//!
//! - **Template Registry**: one pure template per stage, no fallback
//! - **Stage Sequencer**: step forward through the 11-stage funnel
//! - **Session Controller**: validation, pacing and clipboard feedback
//!   behind a `Presenter` trait
//!
//! ## Example
//!
//! ```rust,no_run
//! use funnel::{Pacing, SessionController, SystemClipboard, TerminalPresenter, UserInputs};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = SessionController::new(TerminalPresenter::new(), SystemClipboard::new())
//!         .with_pacing(Pacing::immediate());
//!
//!     let inputs = UserInputs::new("Acme", "Fitness", "Millennials").with_stage("awareness");
//!     let prompt = session.on_generate(&inputs).await?;
//!     session.on_copy(&prompt.text)?;
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod sequencer;
pub mod session;
pub mod stage;

// Re-exports
pub use commands::TerminalPresenter;
pub use config::Config;
pub use error::{FunnelError, Result};
pub use prompt::{Prompt, TemplateFn, TemplateRegistry, INSTRUCTION_FOOTER};
pub use sequencer::{Advance, StageSequencer};
pub use session::{
    AdvanceOutcome, Clipboard, Pacing, Presenter, SessionController, SessionEvent,
    SystemClipboard, UserInputs, ValidatedInputs,
};
pub use stage::StageId;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

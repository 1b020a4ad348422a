//! @acp:module "Terminal Output"
//! @acp:summary "Renders session events to the terminal"
//! @acp:domain cli
//! @acp:layer output
//!
//! Prompt text goes to stdout; status, spinner and errors go to stderr so the
//! prompt can be piped.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::session::{Presenter, SessionEvent};
use crate::stage::StageId;

/// Presenter for the command-line front end
pub struct TerminalPresenter {
    spinner: Option<ProgressBar>,
    echo_prompt: bool,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            spinner: None,
            echo_prompt: true,
        }
    }

    /// Report status only; the caller prints the prompt itself (JSON mode)
    pub fn quiet() -> Self {
        Self {
            spinner: None,
            echo_prompt: false,
        }
    }

    fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message("Generating...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, event: SessionEvent<'_>) {
        match event {
            SessionEvent::Busy => self.start_spinner(),
            SessionEvent::Idle => self.stop_spinner(),
            SessionEvent::Prompt(prompt) => {
                self.stop_spinner();
                if self.echo_prompt {
                    eprintln!(
                        "\n{} {}\n",
                        style("✓").green(),
                        style(prompt.label).bold()
                    );
                    println!("{}\n", prompt.text);
                }
            }
            SessionEvent::StageSelected { stage, position } => {
                eprintln!(
                    "{} Stage {} of {}: {}",
                    style("→").cyan(),
                    position,
                    StageId::COUNT,
                    style(stage.label()).cyan()
                );
            }
            SessionEvent::Error(err) => {
                self.stop_spinner();
                if err.is_recoverable() {
                    eprintln!("{} {}", style("!").yellow(), err);
                } else {
                    eprintln!("{} {}", style("✗").red(), err);
                }
            }
            SessionEvent::FunnelComplete => {
                eprintln!(
                    "{} You have completed all funnel stages!",
                    style("✓").green()
                );
            }
            SessionEvent::Copied => {
                eprintln!("{} Copied!", style("✓").green());
            }
            SessionEvent::CopyFailed(err) => {
                eprintln!("{} {}", style("✗").red(), err);
            }
        }
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

//! @acp:module "Interactive Command"
//! @acp:summary "Form-driven session: fill in fields, pick a stage, then walk the funnel"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `funnel interactive`, the default when no subcommand is given.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use super::output::TerminalPresenter;
use crate::prompt::Prompt;
use crate::session::{AdvanceOutcome, Pacing, SessionController, SystemClipboard, UserInputs};
use crate::stage::StageId;

/// Options for the interactive command
#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    pub pacing: Pacing,
    /// Stage preselected in the form
    pub default_stage: Option<StageId>,
}

/// Actions offered after a prompt is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Regenerate,
    NextStage,
    Copy,
    EditInputs,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::NextStage,
        Action::Regenerate,
        Action::Copy,
        Action::EditInputs,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Regenerate => "Regenerate",
            Action::NextStage => "Next stage",
            Action::Copy => "Copy to clipboard",
            Action::EditInputs => "Edit inputs",
            Action::Quit => "Quit",
        }
    }
}

/// Execute the interactive command
pub async fn execute_interactive(options: InteractiveOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut session = SessionController::new(TerminalPresenter::new(), SystemClipboard::new())
        .with_pacing(options.pacing)
        .starting_at(options.default_stage.unwrap_or(StageId::Awareness));

    println!("{} Funnel Prompt Generator\n", style("→").cyan());

    let mut inputs = UserInputs::default();
    let mut last: Prompt = loop {
        inputs = prompt_form(&theme, &inputs, session.current_stage())?;
        // Rejections are rendered by the presenter; ask again
        if let Ok(prompt) = session.on_generate(&inputs).await {
            break prompt;
        }
    };

    loop {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(format!(
                "{} (stage {} of {})",
                last.label,
                session.sequencer().position(),
                StageId::COUNT
            ))
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Regenerate => {
                if let Ok(prompt) = session.on_regenerate(&inputs) {
                    last = prompt;
                }
            }
            Action::NextStage => {
                if let Ok(AdvanceOutcome::Prompt(prompt)) = session.on_advance(&inputs) {
                    inputs.stage = Some(prompt.stage.as_str().to_string());
                    last = prompt;
                }
            }
            Action::Copy => {
                let _ = session.on_copy(&last.text);
            }
            Action::EditInputs => {
                inputs = prompt_form(&theme, &inputs, session.current_stage())?;
                if let Ok(prompt) = session.on_generate(&inputs).await {
                    last = prompt;
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn prompt_form(theme: &ColorfulTheme, current: &UserInputs, selected: StageId) -> Result<UserInputs> {
    let product: String = Input::with_theme(theme)
        .with_prompt("Product name")
        .with_initial_text(current.product.clone())
        .allow_empty(true)
        .interact_text()?;

    let industry: String = Input::with_theme(theme)
        .with_prompt("Industry")
        .with_initial_text(current.industry.clone())
        .allow_empty(true)
        .interact_text()?;

    let audience: String = Input::with_theme(theme)
        .with_prompt("Target audience")
        .with_initial_text(current.audience.clone())
        .allow_empty(true)
        .interact_text()?;

    let items: Vec<String> = StageId::ALL
        .iter()
        .map(|stage| format!("{} ({})", stage.label(), stage.as_str()))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Funnel stage")
        .items(&items)
        .default(selected.index())
        .interact()?;

    Ok(UserInputs::new(product, industry, audience).with_stage(StageId::ALL[index].as_str()))
}

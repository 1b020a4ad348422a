//! @acp:module "Generate Command"
//! @acp:summary "One-shot prompt generation for a stage, or the rest of the funnel"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `funnel generate`.

use anyhow::Result;
use console::style;

use super::output::TerminalPresenter;
use crate::prompt::Prompt;
use crate::session::{AdvanceOutcome, Pacing, SessionController, SystemClipboard, UserInputs};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub product: String,
    pub industry: String,
    pub audience: String,
    /// Stage tag; required
    pub stage: Option<String>,
    /// Continue through every following stage
    pub all: bool,
    /// Copy every generated prompt to the clipboard
    pub copy: bool,
    /// Output as JSON
    pub json: bool,
    pub pacing: Pacing,
}

/// Execute the generate command
pub async fn execute_generate(options: GenerateOptions) -> Result<()> {
    let presenter = if options.json {
        TerminalPresenter::quiet()
    } else {
        TerminalPresenter::new()
    };
    let mut session = SessionController::new(presenter, SystemClipboard::one_shot())
        .with_pacing(options.pacing);

    let mut inputs = UserInputs::new(options.product, options.industry, options.audience);
    inputs.stage = options.stage;

    // Errors have already been rendered by the presenter
    let first = match session.on_generate(&inputs).await {
        Ok(prompt) => prompt,
        Err(_) => std::process::exit(1),
    };

    let mut prompts = vec![first];
    if options.all {
        while let AdvanceOutcome::Prompt(prompt) = session.on_advance(&inputs)? {
            prompts.push(prompt);
        }
    }

    if options.json {
        if options.all {
            println!("{}", serde_json::to_string_pretty(&prompts)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&prompts[0])?);
        }
    }

    if options.copy {
        let text = joined_text(&prompts);
        if session.clipboard().holds_until_replaced() {
            eprintln!(
                "{} Keeping the clipboard until something else is copied...",
                style("→").cyan()
            );
        }
        // Failure is reported by the presenter and is not fatal
        let _ = session.on_copy(&text);
    }

    Ok(())
}

fn joined_text(prompts: &[Prompt]) -> String {
    prompts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StageId;

    #[test]
    fn test_joined_text_separates_prompts() {
        let prompts = vec![
            Prompt::new(StageId::Awareness, "one".to_string()),
            Prompt::new(StageId::Interest, "two".to_string()),
        ];
        assert_eq!(joined_text(&prompts), "one\n\n---\n\ntwo");
        assert_eq!(joined_text(&prompts[..1]), "one");
    }
}

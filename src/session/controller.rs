//! @acp:module "Session Controller"
//! @acp:summary "Routes user actions through validation, the registry and the sequencer"
//! @acp:domain cli
//! @acp:layer service
//!
//! Every handler takes `&mut self`, so one action runs to completion before
//! the next can start. Failures are always presented before being returned.

use std::time::Duration;

use super::clipboard::Clipboard;
use super::events::{Presenter, SessionEvent};
use super::inputs::{UserInputs, ValidatedInputs};
use crate::error::{FunnelError, Result};
use crate::prompt::{Prompt, TemplateRegistry};
use crate::sequencer::{Advance, StageSequencer};
use crate::stage::StageId;

/// Artificial latency applied to `on_generate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub generation_delay: Duration,
}

impl Pacing {
    pub const DEFAULT_DELAY_MS: u64 = 1000;

    pub fn from_millis(ms: u64) -> Self {
        Self {
            generation_delay: Duration::from_millis(ms),
        }
    }

    /// No delay
    pub fn immediate() -> Self {
        Self::from_millis(0)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_DELAY_MS)
    }
}

/// Outcome of `on_advance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Prompt(Prompt),
    FunnelComplete,
}

/// One user's funnel session
pub struct SessionController<P, C> {
    registry: TemplateRegistry,
    sequencer: StageSequencer,
    presenter: P,
    clipboard: C,
    pacing: Pacing,
}

impl<P: Presenter, C: Clipboard> SessionController<P, C> {
    pub fn new(presenter: P, clipboard: C) -> Self {
        Self {
            registry: TemplateRegistry::new(),
            sequencer: StageSequencer::new(),
            presenter,
            clipboard,
            pacing: Pacing::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Position the sequencer before the first action
    pub fn starting_at(mut self, stage: StageId) -> Self {
        self.sequencer = StageSequencer::starting_at(stage);
        self
    }

    pub fn current_stage(&self) -> StageId {
        self.sequencer.current_stage()
    }

    pub fn sequencer(&self) -> &StageSequencer {
        &self.sequencer
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Generate for the selected stage and make it current
    pub async fn on_generate(&mut self, inputs: &UserInputs) -> Result<Prompt> {
        let (fields, stage) = match inputs.validate_with_stage() {
            Ok(valid) => valid,
            Err(err) => return Err(self.reject(err)),
        };

        self.presenter.present(SessionEvent::Busy);
        if !self.pacing.generation_delay.is_zero() {
            tokio::time::sleep(self.pacing.generation_delay).await;
        }

        let prompt = self.render(stage, &fields);
        self.sequencer.set_stage(stage);
        tracing::debug!("Generated {} prompt ({} bytes)", stage, prompt.text.len());

        self.presenter.present(SessionEvent::Prompt(&prompt));
        self.presenter.present(SessionEvent::Idle);
        Ok(prompt)
    }

    /// Re-render for the current stage without moving
    pub fn on_regenerate(&mut self, inputs: &UserInputs) -> Result<Prompt> {
        let fields = match inputs.validate_fields() {
            Ok(fields) => fields,
            Err(err) => return Err(self.reject(err)),
        };

        let prompt = self.render(self.sequencer.current_stage(), &fields);
        self.presenter.present(SessionEvent::Prompt(&prompt));
        Ok(prompt)
    }

    /// Step to the next stage and render it
    ///
    /// Fields are validated before the sequencer moves, so a rejected
    /// advance leaves the position untouched.
    pub fn on_advance(&mut self, inputs: &UserInputs) -> Result<AdvanceOutcome> {
        let fields = match inputs.validate_fields() {
            Ok(fields) => fields,
            Err(err) => return Err(self.reject(err)),
        };

        match self.sequencer.advance() {
            Advance::Moved(stage) => {
                tracing::debug!("Advanced to {}", stage);
                self.presenter.present(SessionEvent::StageSelected {
                    stage,
                    position: self.sequencer.position(),
                });
                let prompt = self.render(stage, &fields);
                self.presenter.present(SessionEvent::Prompt(&prompt));
                Ok(AdvanceOutcome::Prompt(prompt))
            }
            Advance::FunnelComplete => {
                tracing::info!("All funnel stages complete");
                self.presenter.present(SessionEvent::FunnelComplete);
                Ok(AdvanceOutcome::FunnelComplete)
            }
        }
    }

    /// Copy text to the clipboard and report the result
    pub fn on_copy(&mut self, text: &str) -> Result<()> {
        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.presenter.present(SessionEvent::Copied);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Failed to copy: {}", err);
                self.presenter.present(SessionEvent::CopyFailed(&err));
                Err(err)
            }
        }
    }

    fn render(&self, stage: StageId, fields: &ValidatedInputs) -> Prompt {
        self.registry
            .prompt(stage, fields.product(), fields.industry(), fields.audience())
    }

    fn reject(&mut self, err: FunnelError) -> FunnelError {
        match &err {
            FunnelError::UnknownStage(tag) => {
                tracing::error!("Stage selector produced unknown stage: {}", tag)
            }
            _ => tracing::debug!("Rejected action: {}", err),
        }
        self.presenter.present(SessionEvent::Error(&err));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Silent;

    impl Presenter for Silent {
        fn present(&mut self, _event: SessionEvent<'_>) {}
    }

    impl Clipboard for Silent {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    fn inputs() -> UserInputs {
        UserInputs::new("Acme", "Fitness", "Millennials")
    }

    #[test]
    fn test_pacing_defaults() {
        assert_eq!(Pacing::default().generation_delay, Duration::from_secs(1));
        assert!(Pacing::immediate().generation_delay.is_zero());
    }

    #[tokio::test]
    async fn test_generate_sets_current_stage() {
        let mut session = SessionController::new(Silent, Silent).with_pacing(Pacing::immediate());
        let prompt = session
            .on_generate(&inputs().with_stage("testimonial"))
            .await
            .unwrap();
        assert_eq!(prompt.stage, StageId::Testimonial);
        assert_eq!(session.current_stage(), StageId::Testimonial);
    }

    #[tokio::test]
    async fn test_unknown_stage_does_not_move_sequencer() {
        let mut session = SessionController::new(Silent, Silent)
            .with_pacing(Pacing::immediate())
            .starting_at(StageId::Desire);
        let err = session
            .on_generate(&inputs().with_stage("nonexistent-stage"))
            .await
            .unwrap_err();
        assert!(matches!(err, FunnelError::UnknownStage(_)));
        assert_eq!(session.current_stage(), StageId::Desire);
    }

    #[test]
    fn test_rejected_advance_keeps_position() {
        let mut session = SessionController::new(Silent, Silent);
        let err = session
            .on_advance(&UserInputs::new("Acme", "", "Millennials"))
            .unwrap_err();
        assert!(matches!(err, FunnelError::Validation { .. }));
        assert_eq!(session.current_stage(), StageId::Awareness);
    }

    #[test]
    fn test_advance_at_last_stage() {
        let mut session = SessionController::new(Silent, Silent).starting_at(StageId::FullFunnel);
        assert_eq!(
            session.on_advance(&inputs()).unwrap(),
            AdvanceOutcome::FunnelComplete
        );
        assert_eq!(session.current_stage(), StageId::FullFunnel);
    }
}

//! @acp:module "Stage Sequencer"
//! @acp:summary "Current-stage index over the fixed funnel order"
//! @acp:domain cli
//! @acp:layer model

use crate::error::Result;
use crate::stage::StageId;

/// Result of stepping the funnel forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next stage
    Moved(StageId),
    /// Already at the last stage; position unchanged
    FunnelComplete,
}

/// Tracks the current funnel stage for one session
///
/// The index always stays within `0..StageId::COUNT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSequencer {
    index: usize,
}

impl StageSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start positioned on `stage`
    pub fn starting_at(stage: StageId) -> Self {
        Self {
            index: stage.index(),
        }
    }

    pub fn current_stage(&self) -> StageId {
        StageId::ALL[self.index]
    }

    pub fn set_stage(&mut self, stage: StageId) {
        self.index = stage.index();
    }

    /// Set the stage from a selector tag
    pub fn set_stage_tag(&mut self, tag: &str) -> Result<StageId> {
        let stage: StageId = tag.parse()?;
        self.set_stage(stage);
        Ok(stage)
    }

    pub fn advance(&mut self) -> Advance {
        if self.index + 1 < StageId::COUNT {
            self.index += 1;
            Advance::Moved(self.current_stage())
        } else {
            Advance::FunnelComplete
        }
    }

    /// 1-based position, for "stage N of M" display
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn is_complete(&self) -> bool {
        self.current_stage().is_last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunnelError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_at_awareness() {
        let seq = StageSequencer::new();
        assert_eq!(seq.current_stage(), StageId::Awareness);
        assert_eq!(seq.position(), 1);
        assert!(!seq.is_complete());
    }

    #[test]
    fn test_advance_visits_stages_in_order() {
        let mut seq = StageSequencer::new();
        let mut visited = vec![seq.current_stage().as_str()];
        for _ in 0..10 {
            match seq.advance() {
                Advance::Moved(stage) => visited.push(stage.as_str()),
                Advance::FunnelComplete => panic!("funnel completed early"),
            }
        }
        assert_eq!(
            visited,
            vec![
                "awareness",
                "interest",
                "desire",
                "action",
                "follow-up",
                "testimonial",
                "storyboard",
                "voice-tone",
                "visual-style",
                "optimization",
                "full-funnel",
            ]
        );

        assert_eq!(seq.advance(), Advance::FunnelComplete);
        assert_eq!(seq.current_stage(), StageId::FullFunnel);
        assert!(seq.is_complete());

        // Stays put, no wrap-around
        assert_eq!(seq.advance(), Advance::FunnelComplete);
        assert_eq!(seq.position(), 11);
    }

    #[test]
    fn test_set_stage_tag() {
        let mut seq = StageSequencer::new();
        assert_eq!(seq.set_stage_tag("desire").unwrap(), StageId::Desire);
        assert_eq!(seq.current_stage().as_str(), "desire");

        let err = seq.set_stage_tag("nonexistent-stage").unwrap_err();
        assert!(matches!(err, FunnelError::UnknownStage(_)));
        assert_eq!(seq.current_stage(), StageId::Desire);
    }

    #[test]
    fn test_set_stage_then_advance() {
        let mut seq = StageSequencer::starting_at(StageId::Optimization);
        assert_eq!(seq.advance(), Advance::Moved(StageId::FullFunnel));

        seq.set_stage(StageId::Awareness);
        assert_eq!(seq.advance(), Advance::Moved(StageId::Interest));
    }
}

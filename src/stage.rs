//! @acp:module "Funnel Stages"
//! @acp:summary "Fixed set of funnel stage identifiers in progression order"
//! @acp:domain cli
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FunnelError;

/// One step of the marketing funnel
///
/// Declaration order is funnel order; `StageId::ALL` and `index()` rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageId {
    Awareness,
    Interest,
    Desire,
    Action,
    FollowUp,
    Testimonial,
    Storyboard,
    VoiceTone,
    VisualStyle,
    Optimization,
    FullFunnel,
}

impl StageId {
    /// Number of stages in the funnel
    pub const COUNT: usize = 11;

    /// All stages in funnel order
    pub const ALL: [StageId; StageId::COUNT] = [
        StageId::Awareness,
        StageId::Interest,
        StageId::Desire,
        StageId::Action,
        StageId::FollowUp,
        StageId::Testimonial,
        StageId::Storyboard,
        StageId::VoiceTone,
        StageId::VisualStyle,
        StageId::Optimization,
        StageId::FullFunnel,
    ];

    /// Position of this stage in the funnel (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stage at a funnel position
    pub fn from_index(index: usize) -> Option<StageId> {
        StageId::ALL.get(index).copied()
    }

    /// Kebab-case tag used by the stage selector
    pub fn as_str(self) -> &'static str {
        match self {
            StageId::Awareness => "awareness",
            StageId::Interest => "interest",
            StageId::Desire => "desire",
            StageId::Action => "action",
            StageId::FollowUp => "follow-up",
            StageId::Testimonial => "testimonial",
            StageId::Storyboard => "storyboard",
            StageId::VoiceTone => "voice-tone",
            StageId::VisualStyle => "visual-style",
            StageId::Optimization => "optimization",
            StageId::FullFunnel => "full-funnel",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            StageId::Awareness => "Awareness Video",
            StageId::Interest => "Interest Video",
            StageId::Desire => "Desire Video",
            StageId::Action => "Action (Sales) Video",
            StageId::FollowUp => "Follow-Up Video",
            StageId::Testimonial => "Testimonial Video",
            StageId::Storyboard => "Full Storyboard",
            StageId::VoiceTone => "Voice & Tone",
            StageId::VisualStyle => "Visual Style",
            StageId::Optimization => "Optimization Tips",
            StageId::FullFunnel => "Full Funnel Campaign",
        }
    }

    pub fn is_last(self) -> bool {
        self.index() == StageId::COUNT - 1
    }
}

impl FromStr for StageId {
    type Err = FunnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageId::ALL
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| FunnelError::UnknownStage(s.to_string()))
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! @acp:module "Session Events"
//! @acp:summary "Notifications sent from the session controller to the front end"
//! @acp:domain cli
//! @acp:layer api

use crate::error::FunnelError;
use crate::prompt::Prompt;
use crate::stage::StageId;

/// Something the front end should render
#[derive(Debug, Clone, Copy)]
pub enum SessionEvent<'a> {
    /// Generation accepted; show the busy indicator and block submission
    Busy,
    /// Generation finished
    Idle,
    Prompt(&'a Prompt),
    /// The stage selector should now show this stage
    StageSelected { stage: StageId, position: usize },
    /// Validation or integration failure
    Error(&'a FunnelError),
    /// Advance was requested at the last stage
    FunnelComplete,
    Copied,
    CopyFailed(&'a FunnelError),
}

/// Front end that renders session events
pub trait Presenter {
    fn present(&mut self, event: SessionEvent<'_>);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, event: SessionEvent<'_>) {
        (**self).present(event)
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, event: SessionEvent<'_>) {
        (**self).present(event)
    }
}

//! @acp:module "Session"
//! @acp:summary "Session controller and its front-end seams"
//! @acp:domain cli
//! @acp:layer feature

pub mod clipboard;
pub mod controller;
pub mod events;
pub mod inputs;

pub use clipboard::{Clipboard, SystemClipboard};
pub use controller::{AdvanceOutcome, Pacing, SessionController};
pub use events::{Presenter, SessionEvent};
pub use inputs::{UserInputs, ValidatedInputs};

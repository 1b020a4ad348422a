//! @acp:module "Clipboard"
//! @acp:summary "Clipboard capability used by the copy action"
//! @acp:domain cli
//! @acp:layer io

use crate::error::{FunnelError, Result};

/// Opaque text clipboard; a write either succeeds or fails
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Operating system clipboard
///
/// The `arboard` handle is opened on the first write and kept for the life of
/// this value. On X11 and Wayland the copied text is served by the process
/// that owns the handle, so dropping it can make the contents unavailable.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    /// Clipboard for a long-running session
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for a process that exits right after copying
    ///
    /// On Linux each write blocks until another application replaces the
    /// clipboard contents. Elsewhere this behaves like [`SystemClipboard::new`].
    pub fn one_shot() -> Self {
        Self {
            handle: None,
            hold_until_replaced: true,
        }
    }

    /// Whether writes block until the contents are replaced
    pub fn holds_until_replaced(&self) -> bool {
        self.hold_until_replaced && cfg!(target_os = "linux")
    }

    /// Whether the underlying handle has been opened
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => {
                tracing::debug!("Opening system clipboard");
                arboard::Clipboard::new().map_err(|e| FunnelError::Clipboard(e.to_string()))?
            }
        };
        Ok(self.handle.insert(clipboard))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.is_open())
            .field("hold_until_replaced", &self.hold_until_replaced)
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let hold = self.holds_until_replaced();
        let clipboard = self.handle()?;
        if let Err(e) = set_text(clipboard, text, hold) {
            // Reopen on the next attempt
            self.handle = None;
            return Err(FunnelError::Clipboard(e.to_string()));
        }
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: bool,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text.to_string())
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: bool,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}

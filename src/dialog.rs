//! Blocking dialog services supplied by the hosting frontend
//!
//! The match core decides *when* to interrupt play and with what message; the
//! frontend decides how to present it. Both calls block until the player
//! responds, so the triggering frame does not complete while a dialog is up.

/// Modal prompts shown to the player
pub trait Dialogs {
    /// Acknowledgement-only notice
    fn notify(&mut self, message: &str);

    /// Yes/no question; `true` means yes
    fn confirm(&mut self, message: &str) -> bool;
}

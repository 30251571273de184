// keygen-core/src/api/clipboard.rs
//
// Clipboard collaborator. The core hands text over and reports the outcome;
// it never retries a failed copy.

use crate::error::ClipboardError;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).copy(text)
    }
}

//! Copying calculator values to the system clipboard.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
    #[error("nothing to copy while the calculator shows an error")]
    ErrorState,
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)
}

/// The raw value worth copying: the current operand, or the pending left
/// operand while the right one is still empty.
///
/// Copies the unformatted number so it pastes back as a valid literal.
pub fn clipboard_text(calc: &super::Calculator) -> Result<&str, ClipboardError> {
    if calc.is_error() {
        return Err(ClipboardError::ErrorState);
    }
    if calc.current().is_empty() {
        Ok(calc.previous())
    } else {
        Ok(calc.current())
    }
}

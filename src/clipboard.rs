//! Clipboard support for Textswap
//!
//! Copies the replaced text to the system clipboard using the arboard crate.

use arboard::Clipboard;
use log::debug;

use crate::error::Result;

/// Copy plain text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    debug!("Copied {} characters to clipboard", text.chars().count());
    Ok(())
}

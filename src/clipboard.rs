//! Clipboard module
//!
//! Copies record fields to the clipboard through the OS clipboard or an
//! OSC 52 escape sequence, per the `[clipboard]` config section.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};

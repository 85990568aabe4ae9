//! Terminal client for looking up characters by Japanese glyph
//!
//! The [`app`] module drives the TUI: a kana chart and a text input feed
//! searches to the [`lookup`] worker, and the results pane shows each match
//! with its romanized reading.

pub mod app;
pub mod character;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod notification;
pub mod picker;
pub mod results;
pub mod scroll;
pub mod widgets;


pub use error::CharLearnerError;

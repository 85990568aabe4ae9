//! Kana picker module
//!
//! A clickable gojūon chart. Choosing a cell emits its kana as the new search
//! target.

mod chart;
pub mod picker_events;
pub mod picker_render;
mod picker_state;

pub use chart::{CHART_COLUMNS, CHART_ROWS, kana_at};
pub use picker_state::PickerState;

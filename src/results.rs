//! Results module
//!
//! Holds the enriched records from the most recent completed lookup and
//! draws them as one block per character under a heading.

mod auto_scroll;
pub mod results_events;
pub mod results_render;
mod results_state;

pub use auto_scroll::AutoScroll;
pub use results_state::{HEADING_LINES, RECORD_LINES, ResultsState};

//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where each pane was drawn in the last frame so
//! mouse clicks can be routed to the pane under the pointer.

mod layout_regions;

pub use layout_regions::{LayoutRegions, Region, region_at};

use ratatui::layout::Rect;

/// Clickable panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Picker,
    ResultsPane,
}

/// Where each pane was drawn in the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub picker: Option<Rect>,
    /// Picker area inside its borders, for cell hit-testing
    pub picker_inner: Option<Rect>,
    pub results_pane: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pane under a screen position
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    let contains = |rect: Option<Rect>| {
        rect.is_some_and(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
    };

    if contains(regions.input_field) {
        Some(Region::InputField)
    } else if contains(regions.picker) {
        Some(Region::Picker)
    } else if contains(regions.results_pane) {
        Some(Region::ResultsPane)
    } else {
        None
    }
}

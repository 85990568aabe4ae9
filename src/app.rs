mod app_events;
mod app_render;
mod app_search;
mod app_state;
mod mouse_click;

pub use app_state::{App, Focus};

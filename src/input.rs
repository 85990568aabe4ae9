mod input_state;

pub use input_state::{INPUT_TITLE, InputState};

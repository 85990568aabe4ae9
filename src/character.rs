//! Character records returned by the search service
//!
//! Records arrive read-only from the service and are enriched with a
//! romanized reading before they reach the results pane.

pub mod record;
pub mod romaji;

pub use record::{CharacterRecord, EnrichedCharacter, ServiceMessage};
pub use romaji::to_romaji;

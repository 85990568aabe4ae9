//! Lookup module
//!
//! Talks to the character search service. Searches run on a background
//! worker so a slow or hung request never blocks the UI; the app side keeps
//! only the outcome of the most recently issued search.

pub mod client;
mod error;
mod lookup_state;
pub mod worker;

pub use client::SearchClient;
pub use error::LookupError;
pub use lookup_state::{Lookup, LookupFailure, LookupOutcome, LookupState};
pub use worker::{LookupRequest, LookupResponse};

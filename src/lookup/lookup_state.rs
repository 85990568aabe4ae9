use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::LookupError;
use super::worker::{LookupRequest, LookupResponse};
use crate::character::EnrichedCharacter;

/// A completed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub target: String,
    pub characters: Vec<EnrichedCharacter>,
}

/// A failed lookup, with the target it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub target: String,
    pub error: LookupError,
}

pub type LookupOutcome = Result<Lookup, LookupFailure>;

/// App-side bookkeeping for searches sent to the worker
///
/// The latest issued search wins: issuing a new search cancels the one in
/// flight, and any response tagged with an older id is dropped on poll.
pub struct LookupState {
    request_tx: Option<Sender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
    request_id: u64,
    in_flight: Option<(u64, String)>,
}

impl LookupState {
    pub fn new() -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Issue a search for `target`
    ///
    /// Returns the request id, or None if there is no worker to send to.
    pub fn issue(&mut self, target: &str) -> Option<u64> {
        self.cancel_in_flight();

        let tx = self.request_tx.as_ref()?;
        let request_id = self.request_id.wrapping_add(1);
        let request = LookupRequest::Search {
            target: target.to_string(),
            request_id,
        };

        if tx.send(request).is_err() {
            log::warn!("Lookup worker is gone; dropping search for {:?}", target);
            return None;
        }

        self.request_id = request_id;
        self.in_flight = Some((request_id, target.to_string()));
        Some(request_id)
    }

    /// Cancel the in-flight search, if any
    pub fn cancel_in_flight(&mut self) -> bool {
        if let Some((request_id, _)) = self.in_flight.take()
            && let Some(ref tx) = self.request_tx
            && tx.send(LookupRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for lookup {}", request_id);
            return true;
        }
        false
    }

    /// Drain worker responses and return the latest search's outcome
    ///
    /// Responses for superseded searches are dropped.
    pub fn poll(&mut self) -> Option<LookupOutcome> {
        let rx = self.response_rx.as_ref()?;
        let mut outcome = None;

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    if response.request_id() != self.request_id {
                        log::debug!(
                            "Dropping stale lookup response {} (latest: {})",
                            response.request_id(),
                            self.request_id
                        );
                        continue;
                    }
                    match response {
                        LookupResponse::Completed {
                            target, characters, ..
                        } => {
                            self.in_flight = None;
                            outcome = Some(Ok(Lookup { target, characters }));
                        }
                        LookupResponse::Failed { target, error, .. } => {
                            self.in_flight = None;
                            outcome = Some(Err(LookupFailure { target, error }));
                        }
                        LookupResponse::Cancelled { .. } => {
                            self.in_flight = None;
                        }
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.in_flight.take().is_some() {
                        log::warn!("Lookup worker disconnected with a search in flight");
                    }
                    break;
                }
            }
        }

        outcome
    }

    #[cfg(test)]
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Target of the search currently in flight
    pub fn pending_target(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|(_, target)| target.as_str())
    }
}

impl Default for LookupState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lookup_state_tests.rs"]
mod lookup_state_tests;

//! Lookup Worker Thread
//!
//! Runs searches on a background tokio runtime so the UI thread never waits
//! on the network. Each search runs as its own task and can be cancelled by
//! request id; responses are tagged with the id they answer.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use super::{LookupError, SearchClient};
use crate::character::EnrichedCharacter;

/// Requests sent from the UI thread to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Search { target: String, request_id: u64 },
    Cancel { request_id: u64 },
}

/// Responses sent from the worker back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Completed {
        request_id: u64,
        target: String,
        characters: Vec<EnrichedCharacter>,
    },
    Failed {
        request_id: u64,
        target: String,
        error: LookupError,
    },
    Cancelled {
        request_id: u64,
    },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Completed { request_id, .. }
            | LookupResponse::Failed { request_id, .. }
            | LookupResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Spawn the lookup worker thread
///
/// Returns an error if the tokio runtime cannot be created.
pub fn spawn_worker(
    client: SearchClient,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("lookup-worker")
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("lookup-dispatch".to_string())
        .spawn(move || {
            worker_loop(runtime, Arc::new(client), request_rx, response_tx);
        })?;

    Ok(())
}

/// Dispatch requests until the request channel is closed
fn worker_loop(
    runtime: Runtime,
    client: Arc<SearchClient>,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let mut tokens: HashMap<u64, CancellationToken> = HashMap::new();

    while let Ok(request) = request_rx.recv() {
        // Finished tasks cancel their own token on drop
        tokens.retain(|_, token| !token.is_cancelled());

        match request {
            LookupRequest::Search { target, request_id } => {
                log::debug!("Starting lookup {} for {:?}", request_id, target);
                let token = CancellationToken::new();
                tokens.insert(request_id, token.clone());
                runtime.spawn(run_lookup(
                    Arc::clone(&client),
                    target,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            LookupRequest::Cancel { request_id } => match tokens.remove(&request_id) {
                Some(token) => {
                    log::debug!("Cancelling lookup {}", request_id);
                    token.cancel();
                }
                None => {
                    // Already finished or never started
                    let _ = response_tx.send(LookupResponse::Cancelled { request_id });
                    log::debug!("Cancelled lookup {} (not in flight)", request_id);
                }
            },
        }
    }

    log::debug!("Lookup worker shutting down");
    runtime.shutdown_background();
}

/// Perform one search, racing it against its cancellation token
async fn run_lookup(
    client: Arc<SearchClient>,
    target: String,
    request_id: u64,
    token: CancellationToken,
    response_tx: Sender<LookupResponse>,
) {
    let _guard = token.clone().drop_guard();

    let result = tokio::select! {
        biased;
        _ = token.cancelled() => None,
        result = client.search_enriched(&target) => Some(result),
    };

    let response = match result {
        None => LookupResponse::Cancelled { request_id },
        Some(Ok(characters)) => LookupResponse::Completed {
            request_id,
            target,
            characters,
        },
        Some(Err(error)) => LookupResponse::Failed {
            request_id,
            target,
            error,
        },
    };

    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

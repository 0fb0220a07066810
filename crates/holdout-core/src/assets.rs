//! The model-loading collaborator contract.
//!
//! The session never touches asset bytes. It files load requests, polls for
//! completions once per tick, and hands the resulting handles back to the
//! renderer through snapshots. Loading is the only asynchronous seam in the
//! game: an enemy exists only once its model has finished loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identifier of a loaded model instance, minted by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelHandle(pub u64);

/// Identifier of an in-flight load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadRequestId(pub u64);

/// Why a model load failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetLoadError {
    #[error("model not found: {0}")]
    NotFound(String),
    #[error("model failed to decode: {0}")]
    Malformed(String),
}

/// Outcome of one finished load request.
pub type LoadResult = (LoadRequestId, Result<ModelHandle, AssetLoadError>);

/// Frontend-implemented model loading service.
///
/// `request` must not block. Completions are reported through `poll`, which
/// the session drains once per tick, so all world mutation stays on the
/// tick thread no matter how the loader is implemented.
pub trait ModelLoader: Send {
    /// Begin loading `model`. Returns the id its completion will carry.
    fn request(&mut self, model: &str) -> LoadRequestId;

    /// Take all completions that finished since the last poll.
    fn poll(&mut self) -> Vec<LoadResult>;
}

/// Loader whose requests complete on the next poll.
///
/// The default for headless runs and tests, and a reasonable choice for
/// frontends with a synchronous asset cache.
#[derive(Debug, Default)]
pub struct InstantLoader {
    next_request: u64,
    next_handle: u64,
    ready: Vec<LoadResult>,
}

impl ModelLoader for InstantLoader {
    fn request(&mut self, _model: &str) -> LoadRequestId {
        let request = LoadRequestId(self.next_request);
        self.next_request += 1;
        let handle = ModelHandle(self.next_handle);
        self.next_handle += 1;
        self.ready.push((request, Ok(handle)));
        request
    }

    fn poll(&mut self) -> Vec<LoadResult> {
        std::mem::take(&mut self.ready)
    }
}

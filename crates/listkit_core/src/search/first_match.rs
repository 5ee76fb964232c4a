//! Eager vs. lazy first-match search over blobs.
//!
//! # Invariants
//! - Both strategies return the same id for the same input.
//! - The eager path visits every blob; the lazy path stops at the first match.

use crate::model::blob::Blob;
use log::debug;

/// Search outcome plus how many input blobs were pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstMatch {
    pub id: Option<u32>,
    pub visited: usize,
}

/// Evaluation strategy for [`find_first_over`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Materialize each stage into a `Vec` before taking the first element.
    Eager,
    /// Pull filter -> map -> first through one iterator chain.
    Lazy,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

/// Id of the first blob whose size exceeds `threshold`, eager pipeline.
pub fn first_id_over_eager(blobs: &[Blob], threshold: u32) -> Option<u32> {
    find_first_over(blobs, threshold, Strategy::Eager).id
}

/// Id of the first blob whose size exceeds `threshold`, lazy pipeline.
pub fn first_id_over_lazy(blobs: &[Blob], threshold: u32) -> Option<u32> {
    find_first_over(blobs, threshold, Strategy::Lazy).id
}

/// Runs the search with `strategy` and reports the traversal length.
pub fn find_first_over(blobs: &[Blob], threshold: u32, strategy: Strategy) -> FirstMatch {
    let mut visited = 0usize;
    let id = match strategy {
        Strategy::Eager => {
            let big = blobs
                .iter()
                .inspect(|_| visited += 1)
                .filter(|blob| blob.size > threshold)
                .collect::<Vec<_>>();
            let ids = big.iter().map(|blob| blob.id).collect::<Vec<_>>();
            ids.first().copied()
        }
        Strategy::Lazy => blobs
            .iter()
            .inspect(|_| visited += 1)
            .filter(|blob| blob.size > threshold)
            .map(|blob| blob.id)
            .next(),
    };

    debug!(
        "op=first_match area=search outcome=ok strategy={} input={} visited={} found={}",
        strategy.as_str(),
        blobs.len(),
        visited,
        id.is_some()
    );
    FirstMatch { id, visited }
}

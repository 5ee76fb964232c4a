//! Synthetic sized record used by the first-match search comparison.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob {
    pub size: u32,
    pub id: u32,
}

impl Blob {
    pub fn new(size: u32, id: u32) -> Self {
        Self { size, id }
    }
}

/// Builds `count` blobs where both `size` and `id` equal the 1-based index.
pub fn synthetic_blobs(count: u32) -> Vec<Blob> {
    (1..=count).map(|index| Blob::new(index, index)).collect()
}

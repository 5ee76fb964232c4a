//! First-match search strategies.
//!
//! # Responsibility
//! - Find the first record over a threshold via eager and lazy pipelines.
//!
//! # See also
//! - `first_match` for the traversal contract.

pub mod first_match;

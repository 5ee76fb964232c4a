//! Map retrieval policies and key/value association helpers.
//!
//! # Responsibility
//! - Offer default-on-miss and strict lookups over one mapping abstraction.
//! - Build maps from sequences with last-write-wins semantics.
//!
//! # Invariants
//! - Strict lookup reports a missing key as `LookupError::KeyNotFound`;
//!   it never substitutes a default.
//! - Builders walk input in order, so later duplicates overwrite earlier ones.

pub mod assoc;
pub mod map_access;

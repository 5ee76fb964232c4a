//! Plain record types shared by the collection utilities.
//!
//! # Responsibility
//! - Define immutable value records (`Todo`, `User`, `Blob`).
//! - Define derived projections (`Section`, `Stats`) built by the service layer.
//!
//! # Invariants
//! - Records carry no behavior beyond construction and display.
//! - Equality is field-wise; nothing is mutated after construction.

pub mod blob;
pub mod todo;
pub mod user;

//! Reusable todo transformations.
//!
//! # Responsibility
//! - Derive filtered, sorted, grouped and summarized views over todo lists.
//! - Keep drivers free of transformation logic.

pub mod todo_service;

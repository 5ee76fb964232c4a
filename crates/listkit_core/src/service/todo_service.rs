//! Todo list transformations.
//!
//! # Responsibility
//! - Filter/sort todos by a free-text query.
//! - Partition todos into completion sections.
//! - Summarize lists as counts and ratios.
//!
//! # Invariants
//! - Every function is pure: input slices are never reordered in place.
//! - Sorts are stable; equal keys keep their input order.
//! - Log events carry counts only, never titles.

use crate::access::assoc::{associate, group_by};
use crate::model::todo::{Section, SectionKind, Stats, Todo};
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Title-length summary produced by [`title_metrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleMetrics {
    pub done: usize,
    /// Sum of title lengths in characters.
    pub chars: usize,
    /// Mean title length, `0.0` for an empty list.
    pub average: f64,
}

/// Returns todos whose title contains `query` (trimmed, case-insensitive),
/// ordered by lowercase title.
///
/// A blank query matches every todo.
pub fn filter_and_sort(todos: &[Todo], query: &str) -> Vec<Todo> {
    let needle = fold_case(query.trim());
    let mut matched = todos
        .iter()
        .filter(|todo| fold_case(&todo.title).contains(&needle))
        .cloned()
        .collect::<Vec<_>>();
    matched.sort_by_cached_key(|todo| todo.title.to_lowercase());

    debug!(
        "op=filter_and_sort area=todo_service outcome=ok input={} output={} blank_query={}",
        todos.len(),
        matched.len(),
        needle.is_empty()
    );
    matched
}

/// Splits todos into `Done` / `To Do` sections.
///
/// # Contract
/// - Sections appear in the order their state is first seen in `todos`.
/// - A state with no todos yields no section.
/// - Items inside a section are sorted by title (case-sensitive).
pub fn as_sections(todos: &[Todo]) -> Vec<Section> {
    let sections = group_by(todos, |todo| SectionKind::of(todo.done))
        .into_iter()
        .map(|(header, mut items)| {
            items.sort_by(|left, right| left.title.cmp(&right.title));
            Section { header, items }
        })
        .collect::<Vec<_>>();

    debug!(
        "op=as_sections area=todo_service outcome=ok input={} sections={}",
        todos.len(),
        sections.len()
    );
    sections
}

// Per-char lowercase fold. Unlike `str::to_lowercase` it ignores word
// position, so a final `Σ` folds to `σ` like every other sigma.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Counts todos and the done share.
pub fn stats(todos: &[Todo]) -> Stats {
    let total = todos.len();
    let done = todos.iter().filter(|todo| todo.done).count();
    let ratio = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64
    };
    Stats { total, done, ratio }
}

/// Titles of completed todos in input order.
pub fn done_titles(todos: &[Todo]) -> Vec<String> {
    todos
        .iter()
        .filter(|todo| todo.done)
        .map(|todo| todo.title.clone())
        .collect()
}

/// Done count plus total and mean title length in characters.
///
/// An empty list reports an average of `0.0` rather than `NaN`, so callers
/// can print or compare it without a special case.
pub fn title_metrics(todos: &[Todo]) -> TitleMetrics {
    let lengths = todos
        .iter()
        .map(|todo| todo.title.chars().count())
        .collect::<Vec<_>>();
    let chars = lengths.iter().sum::<usize>();
    let average = if lengths.is_empty() {
        0.0
    } else {
        chars as f64 / lengths.len() as f64
    };
    TitleMetrics {
        done: todos.iter().filter(|todo| todo.done).count(),
        chars,
        average,
    }
}

/// All todos ordered by lowercase title, stable on ties.
pub fn sorted_by_title_ci(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_cached_key(|todo| todo.title.to_lowercase());
    sorted
}

/// Keeps the first todo for every distinct title, in input order.
pub fn distinct_by_title(todos: &[Todo]) -> Vec<Todo> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for todo in todos {
        if seen.insert(todo.title.as_str()) {
            distinct.push(todo.clone());
        }
    }
    distinct
}

/// Title to character length; duplicate titles keep the last entry.
pub fn title_lengths(todos: &[Todo]) -> BTreeMap<String, usize> {
    associate(todos, |todo| (todo.title.clone(), todo.title.chars().count()))
}

//! Todo record and its derived projections.
//!
//! # Responsibility
//! - Define the `Todo` task record.
//! - Define `Section` and `Stats`, which are only ever derived from todos.
//!
//! # Invariants
//! - `Stats::ratio` is `0.0` whenever `Stats::total` is `0`.
//! - A `Section` never holds todos whose `done` flag disagrees with its kind.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier type for todo records.
pub type TodoId = i64;

/// Task record with identifier, title and completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            title: title.into(),
            done,
        }
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Todo(id={}, title={}, done={})",
            self.id, self.title, self.done
        )
    }
}

/// Completion-state key used to group todos into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Todos with `done == true`.
    Done,
    /// Todos with `done == false`.
    ToDo,
}

impl SectionKind {
    /// Maps a completion flag to its section.
    pub fn of(done: bool) -> Self {
        if done {
            Self::Done
        } else {
            Self::ToDo
        }
    }

    /// Header label rendered for this section.
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::ToDo => "To Do",
        }
    }
}

impl Display for SectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Named group of todos sharing one completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub header: SectionKind,
    pub items: Vec<Todo>,
}

impl Section {
    /// Header label, `"Done"` or `"To Do"`.
    pub fn header_label(&self) -> &'static str {
        self.header.label()
    }

    /// Titles of the section items in section order.
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|todo| todo.title.as_str()).collect()
    }
}

/// Aggregate summary over a todo collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub done: usize,
    /// `done / total`, or `0.0` for an empty collection.
    pub ratio: f64,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats(total={}, done={}, ratio={:?})",
            self.total, self.done, self.ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionKind, Stats, Todo};

    #[test]
    fn section_kind_labels_match_headers() {
        assert_eq!(SectionKind::of(true).label(), "Done");
        assert_eq!(SectionKind::of(false).label(), "To Do");
    }

    #[test]
    fn display_uses_named_field_form() {
        let todo = Todo::new(3, "Tests", true);
        assert_eq!(todo.to_string(), "Todo(id=3, title=Tests, done=true)");

        let stats = Stats {
            total: 0,
            done: 0,
            ratio: 0.0,
        };
        assert_eq!(stats.to_string(), "Stats(total=0, done=0, ratio=0.0)");
    }
}

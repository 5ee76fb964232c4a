//! Collection utilities over small in-memory record lists.
//!
//! Covers filtering, sorting, grouping and association of todo lists, safe
//! map retrieval, eager vs. lazy first-match search and string validation.

pub mod access;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod validation;

pub use access::assoc::{associate, associate_by, group_by, to_map};
pub use access::map_access::{LookupError, LookupResult, MapAccess};
pub use logging::{default_log_dir, default_log_level, init_logging, logging_status};
pub use model::blob::{synthetic_blobs, Blob};
pub use model::todo::{Section, SectionKind, Stats, Todo, TodoId};
pub use model::user::{User, UserId};
pub use search::first_match::{
    find_first_over, first_id_over_eager, first_id_over_lazy, FirstMatch, Strategy,
};
pub use service::todo_service::{
    as_sections, distinct_by_title, done_titles, filter_and_sort, sorted_by_title_ci, stats,
    title_lengths, title_metrics, TitleMetrics,
};
pub use validation::{is_email_valid, EmailExt};

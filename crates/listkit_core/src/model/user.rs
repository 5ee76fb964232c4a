//! User record.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type UserId = i64;

/// Identifier + display name.
///
/// Identifiers are not unique across a list; id-keyed maps built from a
/// list keep the last user seen for each id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "User(id={}, name={})", self.id, self.name)
    }
}

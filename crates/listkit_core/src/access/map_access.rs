//! Safe and strict lookup policies for key/value maps.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};

pub type LookupResult<T> = Result<T, LookupError>;

/// Error for strict map retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Requested key is absent. Holds the key's debug rendering.
    KeyNotFound(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound(key) => write!(f, "key not found: {key} is missing in the map"),
        }
    }
}

impl Error for LookupError {}

/// Retrieval policies shared by every map type the crate works with.
///
/// Implementors only provide [`MapAccess::lookup`]; the three policies are
/// derived from it:
/// - [`MapAccess::get_or_else`] computes a default only on a miss.
/// - [`MapAccess::get_or`] falls back to a constant default.
/// - [`MapAccess::get_value`] fails with [`LookupError::KeyNotFound`].
pub trait MapAccess<K, V> {
    fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + ?Sized;

    fn get_or_else<Q, F>(&self, key: &Q, default: F) -> V
    where
        K: Borrow<Q>,
        Q: Ord + Hash + ?Sized,
        V: Clone,
        F: FnOnce() -> V,
    {
        self.lookup(key).cloned().unwrap_or_else(default)
    }

    fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Ord + Hash + ?Sized,
        V: Clone,
    {
        self.lookup(key).cloned().unwrap_or(default)
    }

    fn get_value<Q>(&self, key: &Q) -> LookupResult<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + Debug + ?Sized,
    {
        self.lookup(key)
            .ok_or_else(|| LookupError::KeyNotFound(format!("{key:?}")))
    }
}

impl<K: Ord, V> MapAccess<K, V> for BTreeMap<K, V> {
    fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + ?Sized,
    {
        self.get(key)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MapAccess<K, V> for HashMap<K, V, S> {
    fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + ?Sized,
    {
        self.get(key)
    }
}

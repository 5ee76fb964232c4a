//! Builders turning sequences into keyed collections.
//!
//! Maps are `BTreeMap`s so rendered output is deterministic. Grouping keeps
//! first-encounter key order instead, since callers rely on it.

use std::collections::BTreeMap;

/// Collects key/value pairs into a map; the last value for a key wins.
pub fn to_map<K: Ord, V>(pairs: impl IntoIterator<Item = (K, V)>) -> BTreeMap<K, V> {
    pairs
        .into_iter()
        .fold(BTreeMap::new(), |mut map, (key, value)| {
            map.insert(key, value);
            map
        })
}

/// Maps `key_fn(item)` to the item; the last item for a key wins.
pub fn associate_by<T, K, F>(items: &[T], key_fn: F) -> BTreeMap<K, T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    to_map(items.iter().map(|item| (key_fn(item), item.clone())))
}

/// Maps each item to the pair produced by `pair_fn`; the last pair for a key wins.
pub fn associate<T, K, V, F>(items: &[T], pair_fn: F) -> BTreeMap<K, V>
where
    K: Ord,
    F: Fn(&T) -> (K, V),
{
    to_map(items.iter().map(pair_fn))
}

/// Groups items by key.
///
/// Groups appear in the order their key is first seen, and items keep their
/// input order inside each group. Keys with no items never appear.
pub fn group_by<T, K, F>(items: &[T], key_fn: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(item);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((key, vec![item.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::{associate, group_by, to_map};

    #[test]
    fn to_map_keeps_last_value_for_duplicate_keys() {
        let map = to_map([("a", 1), ("a", 9), ("b", 2)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 9);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn associate_overwrites_in_iteration_order() {
        let words = ["kiwi", "fig", "kiwi!"];
        let map = associate(&words, |word| (word.chars().next(), word.len()));
        assert_eq!(map[&Some('k')], 5);
        assert_eq!(map[&Some('f')], 3);
    }

    #[test]
    fn group_by_uses_first_encounter_order() {
        let numbers = [3, 4, 5, 6, 7];
        let groups = group_by(&numbers, |n| n % 2 == 0);
        assert_eq!(groups, vec![(false, vec![3, 5, 7]), (true, vec![4, 6])]);
    }

    #[test]
    fn group_by_of_empty_input_has_no_groups() {
        let groups = group_by(&[] as &[i32], |n| *n);
        assert!(groups.is_empty());
    }
}

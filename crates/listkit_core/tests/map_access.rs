use listkit_core::{associate_by, to_map, LookupError, LookupResult, MapAccess, User};
use std::collections::{BTreeMap, HashMap};

fn strict_sum<M: MapAccess<String, i32>>(map: &M, keys: &[&str]) -> LookupResult<i32> {
    let mut sum = 0;
    for key in keys {
        sum += *map.get_value(*key)?;
    }
    Ok(sum)
}

#[test]
fn three_access_policies_over_btree_map() {
    let map = BTreeMap::from([("x".to_string(), 1)]);

    assert_eq!(map.get_or_else("y", || 0), 0);
    assert_eq!(map.get_or("y", 0), 0);
    assert_eq!(map.get_value("x"), Ok(&1));
    assert_eq!(
        map.get_value("y"),
        Err(LookupError::KeyNotFound("\"y\"".to_string()))
    );
}

#[test]
fn three_access_policies_over_hash_map() {
    let map = HashMap::from([("x".to_string(), 1)]);

    assert_eq!(map.get_or_else("x", || 0), 1);
    assert_eq!(map.get_or("y", 7), 7);
    assert!(map.get_value("y").is_err());
}

#[test]
fn strict_lookup_failure_propagates_to_caller() {
    let map = BTreeMap::from([("x".to_string(), 1), ("z".to_string(), 2)]);

    assert_eq!(strict_sum(&map, &["x", "z"]), Ok(3));
    let err = strict_sum(&map, &["x", "y", "z"]).unwrap_err();
    assert!(err.to_string().contains("\"y\""), "unexpected error: {err}");
}

#[test]
fn to_map_keeps_last_value() {
    let map = to_map([("a", 1), ("a", 9), ("b", 2)]);
    assert_eq!(map, BTreeMap::from([("a", 9), ("b", 2)]));
}

#[test]
fn associate_by_id_keeps_last_user() {
    let users = vec![
        User::new(1, "Ali"),
        User::new(2, "Sara"),
        User::new(1, "Ali dup"),
    ];
    let by_id = associate_by(&users, |user| user.id);

    assert_eq!(by_id.len(), 2);
    assert_eq!(by_id[&1].name, "Ali dup");
    assert_eq!(by_id[&2].name, "Sara");
}

use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Groups `items` by `key_of`, keeping first-seen key order and the original order inside
/// every group.
pub fn group_in_order<I, T, K, F>(items: I, mut key_of: F) -> FxIndexMap<K, Vec<T>>
where
  I: IntoIterator<Item = T>,
  K: std::hash::Hash + Eq,
  F: FnMut(&T) -> K,
{
  let mut groups = FxIndexMap::<K, Vec<T>>::default();
  for item in items {
    groups.entry(key_of(&item)).or_default().push(item);
  }
  groups
}

#[test]
fn test_group_in_order() {
  let groups = group_in_order(["b1", "a1", "b2", "c1", "a2"], |item| item.as_bytes()[0]);
  let groups = groups.into_iter().collect::<Vec<_>>();

  assert_eq!(groups, vec![(b'b', vec!["b1", "b2"]), (b'a', vec!["a1", "a2"]), (b'c', vec!["c1"])]);
}

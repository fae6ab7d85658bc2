use std::hash::BuildHasherDefault;

use indexmap::{Equivalent, IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub mod matrix;

pub use matrix::Matrix;

pub type FxBuildHasher = BuildHasherDefault<FxHasher>;
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Borrowed `(origin, destination)` pair that can query maps keyed by owned
/// pairs without cloning the labels.
///
/// Hashes exactly like the tuple `(V, V)`.
#[derive(Debug, Hash)]
pub(crate) struct EdgeKey<'a, V>(pub &'a V, pub &'a V);

impl<V: Eq> Equivalent<(V, V)> for EdgeKey<'_, V> {
    fn equivalent(&self, key: &(V, V)) -> bool {
        *self.0 == key.0 && *self.1 == key.1
    }
}

/// Removes the first occurrence of `value` while keeping the order of the
/// remaining elements. Returns whether anything was removed.
pub(crate) fn remove_first<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(i) => {
            items.remove(i);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_lookup() {
        let mut map = FxIndexMap::default();
        map.insert((String::from("a"), String::from("b")), 3);

        let a = String::from("a");
        let b = String::from("b");

        assert_eq!(map.get(&EdgeKey(&a, &b)), Some(&3));
        assert_eq!(map.get(&EdgeKey(&b, &a)), None);
    }

    #[test]
    fn remove_first_keeps_order() {
        let mut items = vec![1, 2, 3, 2];
        assert!(remove_first(&mut items, &2));
        assert_eq!(items, vec![1, 3, 2]);
        assert!(!remove_first(&mut items, &5));
    }
}

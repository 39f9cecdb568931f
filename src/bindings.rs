use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Variable values supplied to an evaluation.
///
/// Implemented for hash maps (std or `FxHashMap`), btree maps and slices of name/value pairs.
pub trait Bindings {
    fn get(&self, name: &str) -> Option<f64>;
}

impl<K, S> Bindings for HashMap<K, f64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

impl<K: Borrow<str> + Ord> Bindings for BTreeMap<K, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        BTreeMap::get(self, name).copied()
    }
}

impl Bindings for [(&str, f64)] {
    fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Bindings for [(&str, f64); N] {
    fn get(&self, name: &str) -> Option<f64> {
        Bindings::get(self.as_slice(), name)
    }
}

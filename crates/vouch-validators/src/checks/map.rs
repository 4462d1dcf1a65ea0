use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use vouch_core::ErrorKind;

use crate::messages;
use crate::Validator;

/// Read access to an associative container.
///
/// The seam that lets map checks work over `HashMap` and `BTreeMap`
/// without caring which one the caller holds.
pub trait MapLike {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// The number of entries.
    fn size(&self) -> usize;

    /// `true` if the map contains `key`.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// The map's keys, in iteration order.
    fn key_list(&self) -> Vec<&Self::Key>;

    /// The map's values, in iteration order.
    fn value_list(&self) -> Vec<&Self::Value>;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLike for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn key_list(&self) -> Vec<&K> {
        self.keys().collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K: Ord, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn key_list(&self) -> Vec<&K> {
        self.keys().collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }
}

/// Checks for associative containers.
///
/// Equality checks come from [`ObjectCheck`](crate::checks::ObjectCheck)
/// where the map type has a partial order, as `BTreeMap` does.
pub trait MapCheck<K, V>: Sized {
    /// Ensures that the map is empty.
    fn is_empty(self) -> Self;

    /// Ensures that the map is not empty.
    fn is_not_empty(self) -> Self;

    /// Ensures that the map contains an entry for `key`.
    fn contains_key(self, key: &K) -> Self;

    /// Ensures that the map contains no entry for `key`.
    fn does_not_contain_key(self, key: &K) -> Self;

    /// Shifts the validation to the map's keys.
    fn keys(self) -> Validator<Vec<K>>
    where
        K: Clone;

    /// Shifts the validation to the map's values.
    fn values(self) -> Validator<Vec<V>>
    where
        V: Clone;

    /// Shifts the validation to the number of entries.
    fn len(self) -> Validator<usize>;
}

impl<M, K, V> MapCheck<K, V> for Validator<M>
where
    M: MapLike<Key = K, Value = V> + Debug,
    K: Debug,
    V: Debug,
{
    fn is_empty(self) -> Self {
        self.check_property("must be empty", true, |value: &M| value.size() == 0)
    }

    fn is_not_empty(self) -> Self {
        self.check_property("may not be empty", false, |value: &M| value.size() != 0)
    }

    fn contains_key(mut self, key: &K) -> Self {
        let passed = self.target().as_ref().is_none_or(|value| value.has_key(key));
        if !passed {
            let key_repr = self.map_value(key);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must contain the key",
                None,
                &key_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn does_not_contain_key(mut self, key: &K) -> Self {
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| !value.has_key(key));
        if !passed {
            let key_repr = self.map_value(key);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "may not contain the key",
                None,
                &key_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn keys(self) -> Validator<Vec<K>>
    where
        K: Clone,
    {
        self.derive("keys()", |value| {
            value.key_list().into_iter().cloned().collect()
        })
    }

    fn values(self) -> Validator<Vec<V>>
    where
        V: Clone,
    {
        self.derive("values()", |value| {
            value.value_list().into_iter().cloned().collect()
        })
    }

    fn len(self) -> Validator<usize> {
        self.derive("len()", |value| value.size())
    }
}

//! The two directions of a bimap, without any locking.
//!
//! `Pairs` is what a `Read` or `Write` guard dereferences to. Only the lookups are public;
//! mutation goes through the guards so that the immutability flag is always consulted.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{Iter, Keys, Values};
use std::hash::Hash;

/// A forward `HashMap` and its inverse, kept in lockstep.
#[derive(Clone)]
pub struct Pairs<K, V> {
    forward: HashMap<K, V>,
    inverse: HashMap<V, K>,
}

/// Pairings that an `insert` knocked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Displaced<K, V> {
    /// The key's previous value, if it had a different one.
    pub old_val: Option<V>,
    /// The value's previous key, if it had a different one.
    pub old_key: Option<K>,
}
impl<K, V> Displaced<K, V> {
    pub fn count(&self) -> usize {
        self.old_val.is_some() as usize + self.old_key.is_some() as usize
    }
}

impl<K, V> Pairs<K, V> {
    pub fn len(&self) -> usize { self.forward.len() }
    pub fn is_empty(&self) -> bool { self.forward.is_empty() }

    /// The key→value direction.
    pub fn forward(&self) -> &HashMap<K, V> { &self.forward }
    /// The value→key direction.
    pub fn inverse(&self) -> &HashMap<V, K> { &self.inverse }

    pub fn keys(&self) -> Keys<K, V> {
        self.forward.keys()
    }

    pub fn values(&self) -> Values<K, V> {
        self.forward.values()
    }

    /// Iterates the forward pairs in arbitrary order.
    pub fn iter(&self) -> Iter<K, V> {
        self.forward.iter()
    }
}

impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> Pairs<K, V> {
    pub(crate) fn new() -> Self {
        Pairs {
            forward: HashMap::new(),
            inverse: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Pairs {
            forward: HashMap::with_capacity(capacity),
            inverse: HashMap::with_capacity(capacity),
        }
    }

    /// Pairs `key` with `val`. Any pairing either of them was already part of is removed first,
    /// in both directions.
    pub(crate) fn insert(&mut self, key: K, val: V) -> Displaced<K, V> {
        let old_val = self.forward.remove(&key);
        if let Some(ref old) = old_val {
            self.inverse.remove(old);
        }
        let old_key = self.inverse.remove(&val);
        if let Some(ref old) = old_key {
            self.forward.remove(old);
        }
        // Re-inserting an existing pair displaces nothing.
        let displaced = Displaced {
            old_val: old_val.filter(|old| *old != val),
            old_key,
        };
        self.forward.insert(key.clone(), val.clone());
        self.inverse.insert(val, key);
        displaced
    }

    pub(crate) fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        let val = self.forward.remove(key)?;
        self.inverse.remove(&val);
        Some(val)
    }

    pub(crate) fn remove_inverse<R: ?Sized>(&mut self, val: &R) -> Option<K>
        where V: Borrow<R>, R: Hash + Eq
    {
        let key = self.inverse.remove(val)?;
        self.forward.remove(&key);
        Some(key)
    }

    pub(crate) fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }

    pub(crate) fn into_maps(self) -> (HashMap<K, V>, HashMap<V, K>) {
        (self.forward, self.inverse)
    }

    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.forward.get(key)
    }

    pub fn get_inverse<R: ?Sized>(&self, val: &R) -> Option<&K>
        where V: Borrow<R>, R: Hash + Eq
    {
        self.inverse.get(val)
    }

    pub fn exists<Q: ?Sized>(&self, key: &Q) -> bool
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.forward.contains_key(key)
    }

    pub fn exists_inverse<R: ?Sized>(&self, val: &R) -> bool
        where V: Borrow<R>, R: Hash + Eq
    {
        self.inverse.contains_key(val)
    }

    /// Checks that `inverse` is exactly `forward` turned around.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.forward.len() == self.inverse.len()
            && self.forward.iter().all(|(k, v)| self.inverse.get(v) == Some(k))
    }
}
impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> Default for Pairs<K, V> {
    fn default() -> Self {
        Pairs::new()
    }
}
impl<'a, K, V> IntoIterator for &'a Pairs<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

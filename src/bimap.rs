//! The thread-safe `BiMap` itself.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use log::debug;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::guard::{Read, Write};
use crate::pairs::Pairs;

/// Everything the lock protects.
#[derive(Clone)]
pub(crate) struct State<K, V> {
    pub(crate) pairs: Pairs<K, V>,
    /// Only ever goes from `false` to `true`.
    pub(crate) immutable: bool,
}
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for State<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.immutable {
            write!(f, "(immutable) ")?;
        }
        f.debug_map().entries(self.pairs.iter()).finish()
    }
}

/**
 * A bidirectional map that can be shared between threads.
 *
 * Each key maps to exactly one value and each value maps back to exactly one key. Inserting a
 * pair whose key or value is already present replaces the old pairing(s), so the two directions
 * never disagree.
 *
 * A single `RwLock` covers both directions and the immutability flag. Lookups take it shared;
 * mutations take it exclusively, and check the flag under that same acquisition.
 *
 * Once `make_immutable` has been called, `insert`, `delete`, `delete_inverse` and `clear` return
 * `Error::Immutable` and change nothing. There is no way back.
 *
 * ```
 * use syncbimap::{BiMap, Error};
 *
 * let map = BiMap::new();
 * map.insert("a", 1).unwrap();
 * map.insert("b", 2).unwrap();
 * assert_eq!(map.get("a"), Some(1));
 * assert_eq!(map.get_inverse(&2), Some("b"));
 *
 * map.make_immutable();
 * assert_eq!(map.delete("a"), Err(Error::Immutable));
 * assert_eq!(map.len(), 2);
 * ```
 * */
pub struct BiMap<K, V> {
    state: RwLock<State<K, V>>,
}

impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> BiMap<K, V> {
    /// Create an empty, mutable map.
    pub fn new() -> Self {
        Self::from_pairs(Pairs::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_pairs(Pairs::with_capacity(capacity))
    }

    fn from_pairs(pairs: Pairs<K, V>) -> Self {
        BiMap {
            state: RwLock::new(State {
                pairs,
                immutable: false,
            }),
        }
    }

    /**
     * Seeds a map from `map`, inserting each entry as `insert` would.
     *
     * If two keys share a value, whichever is visited last wins, and `HashMap` doesn't promise
     * an order. Use `try_from_pairs` to reject such input instead.
     * */
    pub fn from_map(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }

    /**
     * Seeds a map from a sequence of pairs, failing if any key or any value appears twice.
     *
     * The error holds the position of the first offending pair. No map is returned in that case.
     * */
    pub fn try_from_pairs<I>(seed: I) -> Result<Self>
    where I: IntoIterator<Item=(K, V)>
    {
        let mut pairs = Pairs::new();
        for (i, (key, val)) in seed.into_iter().enumerate() {
            if pairs.exists(&key) {
                return Err(Error::DuplicateKey(i));
            }
            if pairs.exists_inverse(&val) {
                return Err(Error::DuplicateValue(i));
            }
            pairs.insert(key, val);
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Lock the map for reading. See the `guard` module.
    pub fn read(&self) -> Read<K, V> {
        Read { state: self.state.read() }
    }

    /// Lock the map for writing. See the `guard` module.
    pub fn write(&self) -> Write<K, V> {
        Write { state: self.state.write() }
    }

    /**
     * Runs `f` while holding the write lock, so that other threads see either none or all of
     * what it does.
     *
     * If `f` returns early with an error, whatever it already changed stays changed; there is no
     * rollback. The lock is released either way.
     *
     * ```
     * use syncbimap::BiMap;
     *
     * let map: BiMap<&str, i32> = BiMap::new();
     * map.batch(|w| {
     *     w.insert("x", 10)?;
     *     w.insert("y", 20)?;
     *     w.delete("x")?;
     *     Ok::<_, syncbimap::Error>(())
     * }).unwrap();
     * assert_eq!(map.len(), 1);
     * ```
     * */
    pub fn batch<R, E, F>(&self, f: F) -> ::std::result::Result<R, E>
    where F: FnOnce(&mut Write<K, V>) -> ::std::result::Result<R, E>
    {
        let mut write = self.write();
        f(&mut write)
    }

    /// Pairs `key` with `val`, replacing any pairing either of them was part of.
    pub fn insert(&self, key: K, val: V) -> Result<()> {
        self.write().insert(key, val)
    }

    pub fn exists<Q: ?Sized>(&self, key: &Q) -> bool
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.read().exists(key)
    }

    pub fn exists_inverse<R: ?Sized>(&self, val: &R) -> bool
        where V: Borrow<R>, R: Hash + Eq
    {
        self.read().exists_inverse(val)
    }

    /// Returns a copy of the value paired with `key`.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<V>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.read().get(key).cloned()
    }

    /// Returns a copy of the key paired with `val`.
    pub fn get_inverse<R: ?Sized>(&self, val: &R) -> Option<K>
        where V: Borrow<R>, R: Hash + Eq
    {
        self.read().get_inverse(val).cloned()
    }

    /// Removes `key` and its value. A missing key is not an error; it gives `Ok(None)`.
    pub fn delete<Q: ?Sized>(&self, key: &Q) -> Result<Option<V>>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.write().delete(key)
    }

    /// Removes `val` and its key. A missing value is not an error; it gives `Ok(None)`.
    pub fn delete_inverse<R: ?Sized>(&self, val: &R) -> Result<Option<K>>
        where V: Borrow<R>, R: Hash + Eq
    {
        self.write().delete_inverse(val)
    }

    pub fn clear(&self) -> Result<()> {
        self.write().clear()
    }

    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Freeze the map. Calling this more than once is harmless.
    pub fn make_immutable(&self) {
        self.write().make_immutable();
    }

    pub fn is_immutable(&self) -> bool {
        self.read().is_immutable()
    }

    /// A snapshot of the key→value direction. Later changes to the map are not reflected in it.
    pub fn forward_map(&self) -> HashMap<K, V> {
        self.read().forward().clone()
    }

    /// A snapshot of the value→key direction. Later changes to the map are not reflected in it.
    pub fn inverse_map(&self) -> HashMap<V, K> {
        self.read().inverse().clone()
    }

    /// Both directions, taken out of the map without copying.
    pub fn into_maps(self) -> (HashMap<K, V>, HashMap<V, K>) {
        self.state.into_inner().pairs.into_maps()
    }
}

impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> Default for BiMap<K, V> {
    fn default() -> Self {
        BiMap::new()
    }
}

/// Copies the pairs and the immutability flag into an independent map.
impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> Clone for BiMap<K, V> {
    fn clone(&self) -> Self {
        let state = self.state.read().clone();
        BiMap { state: RwLock::new(state) }
    }
}

/// Last write wins, in iteration order.
impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> FromIterator<(K, V)> for BiMap<K, V> {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(iter: I) -> Self {
        let mut pairs = Pairs::new();
        let mut displaced = 0;
        for (key, val) in iter {
            displaced += pairs.insert(key, val).count();
        }
        if displaced > 0 {
            debug!("seed displaced {} pairing(s)", displaced);
        }
        Self::from_pairs(pairs)
    }
}

impl<K: Eq + Clone + Hash, V: Eq + Clone + Hash> From<HashMap<K, V>> for BiMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        BiMap::from_map(map)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Don't block (or dead-lock against a guard held by this thread).
        match self.state.try_read() {
            Some(state) => fmt::Debug::fmt(&*state, f),
            None => write!(f, "BiMap {{ <locked> }}"),
        }
    }
}

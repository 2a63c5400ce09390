//! Scoped locks for doing several things to a `BiMap` at once.
//!
//! Every method on `BiMap` takes the lock for exactly one operation. When a caller needs a
//! consistent view across several lookups, or wants a group of mutations to appear all at once
//! to other threads, it can hold a `Read` or `Write` guard instead. The lock is released when
//! the guard is dropped, on every exit path.
//!
//! Don't call methods on the same `BiMap` while holding one of its guards on the current thread.
//! The locks are not re-entrant, so this will dead-lock.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

use log::{debug, trace, warn};
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};

use crate::bimap::State;
use crate::error::{Error, Result};
use crate::pairs::Pairs;

/// Shared access to a `BiMap`. Dereferences to `Pairs` for the lookups.
pub struct Read<'a, K, V> {
    pub(crate) state: RwLockReadGuard<'a, State<K, V>>,
}
impl<'a, K, V> Read<'a, K, V> {
    pub fn is_immutable(&self) -> bool { self.state.immutable }
}
impl<'a, K, V> Deref for Read<'a, K, V> {
    type Target = Pairs<K, V>;
    fn deref(&self) -> &Pairs<K, V> { &self.state.pairs }
}
impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for Read<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&*self.state, f)
    }
}

/**
 * Exclusive access to a `BiMap`.
 *
 * Lookups are available through `Deref`. Mutations are methods on the guard itself, and each
 * one checks the immutability flag under the same lock that it writes with.
 * */
pub struct Write<'a, K, V> {
    pub(crate) state: RwLockWriteGuard<'a, State<K, V>>,
}
impl<'a, K, V> Deref for Write<'a, K, V> {
    type Target = Pairs<K, V>;
    fn deref(&self) -> &Pairs<K, V> { &self.state.pairs }
}
impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for Write<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&*self.state, f)
    }
}
impl<'a, K: Eq + Clone + Hash, V: Eq + Clone + Hash> Write<'a, K, V> {
    pub fn is_immutable(&self) -> bool { self.state.immutable }

    fn check_mutable(&self, op: &'static str) -> Result<()> {
        if self.state.immutable {
            warn!("rejected {} on an immutable bimap", op);
            return Err(Error::Immutable);
        }
        Ok(())
    }

    /// Pairs `key` with `val`. If either was already paired with something else, that pairing is
    /// removed in both directions first.
    pub fn insert(&mut self, key: K, val: V) -> Result<()> {
        self.check_mutable("insert")?;
        let displaced = self.state.pairs.insert(key, val);
        if displaced.count() > 0 {
            debug!("insert displaced {} pairing(s)", displaced.count());
        }
        trace!("insert: {} pairs", self.state.pairs.len());
        Ok(())
    }

    /// Removes `key` and its value. Returns the value, or `None` if `key` wasn't present.
    pub fn delete<Q: ?Sized>(&mut self, key: &Q) -> Result<Option<V>>
        where K: Borrow<Q>, Q: Hash + Eq
    {
        self.check_mutable("delete")?;
        let ret = self.state.pairs.remove(key);
        trace!("delete: {} pairs", self.state.pairs.len());
        Ok(ret)
    }

    /// Removes `val` and its key. Returns the key, or `None` if `val` wasn't present.
    pub fn delete_inverse<R: ?Sized>(&mut self, val: &R) -> Result<Option<K>>
        where V: Borrow<R>, R: Hash + Eq
    {
        self.check_mutable("delete_inverse")?;
        let ret = self.state.pairs.remove_inverse(val);
        trace!("delete_inverse: {} pairs", self.state.pairs.len());
        Ok(ret)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.check_mutable("clear")?;
        self.state.pairs.clear();
        trace!("clear");
        Ok(())
    }

    /// Freezes the map. Later mutations, including ones through this guard, fail with
    /// `Error::Immutable`.
    pub fn make_immutable(&mut self) {
        if !self.state.immutable {
            debug!("bimap frozen with {} pairs", self.state.pairs.len());
        }
        self.state.immutable = true;
    }
}

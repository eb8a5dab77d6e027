// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use log::debug;
use log::trace;
use log::warn;

use crate::error::Error;
use crate::prime::next_prime;
use crate::table::ProbeKey;
use crate::table::ProbingTableBuilder;
use crate::table::Slot;

/// Number of slots requested by [`ProbingTable::default`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 5;

/// Load factor at which an insert grows the table unless configured otherwise.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.8;

/// An open addressing hash set with quadratic probing and prime capacities.
///
/// Every key lives directly in a slot of a prime-sized arena. A key starts at
/// its home slot and, on collision, tries `home + attempt²` for increasing
/// attempts. Before an insert would bring the load factor to the configured
/// threshold, the table grows to the smallest prime at least twice its
/// capacity and re-places every live key.
///
/// Removal leaves a tombstone so that searches for keys further along a probe
/// sequence still find them. Tombstones are reused by inserts and dropped when
/// the table grows or is cleared.
///
/// # Examples
///
/// ```
/// use quadprobe::error::ErrorKind;
/// use quadprobe::table::ProbingTable;
///
/// let mut table = ProbingTable::new(5);
/// table.insert(1).unwrap();
/// table.insert(6).unwrap();
///
/// assert_eq!(table.search(&6), Some(2));
/// assert_eq!(table.insert(6).unwrap_err().kind(), ErrorKind::DuplicateKey);
/// assert_eq!(table.remove(&1).unwrap(), 1);
/// assert!(!table.contains(&1));
/// ```
pub struct ProbingTable<K> {
    slots: Vec<Slot<K>>,
    len: usize,
    num_tombstones: usize,
    load_factor_threshold: f64,
}

impl<K> ProbingTable<K> {
    /// Creates an empty table with the default load factor threshold.
    ///
    /// The capacity is `initial_capacity` rounded up to the next prime.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is 0.
    pub fn new(initial_capacity: usize) -> Self {
        assert!(initial_capacity > 0, "initial_capacity must be at least 1");
        Self::with_config(initial_capacity, DEFAULT_LOAD_FACTOR_THRESHOLD)
    }

    /// Returns a builder for configuring a table.
    pub fn builder() -> ProbingTableBuilder<K> {
        ProbingTableBuilder::default()
    }

    pub(super) fn with_config(initial_capacity: usize, load_factor_threshold: f64) -> Self {
        Self {
            slots: empty_slots(next_prime(initial_capacity)),
            len: 0,
            num_tombstones: 0,
            load_factor_threshold,
        }
    }

    /// Returns the number of slots. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table stores no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots left behind by removals.
    pub fn num_tombstones(&self) -> usize {
        self.num_tombstones
    }

    /// Returns the fraction of slots holding a key.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the load factor that triggers growth.
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Removes every key, keeping the current capacity.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.len = 0;
        self.num_tombstones = 0;
    }

    /// Returns the slot arena.
    pub fn slots(&self) -> &[Slot<K>] {
        &self.slots
    }

    /// Returns the content of every slot in index order, `None` for free slots.
    ///
    /// The returned vector always has [`capacity`](Self::capacity) entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadprobe::table::ProbingTable;
    ///
    /// let mut table = ProbingTable::new(5);
    /// table.insert(7).unwrap();
    /// assert_eq!(table.snapshot(), vec![None, None, Some(&7), None, None]);
    /// ```
    pub fn snapshot(&self) -> Vec<Option<&K>> {
        self.slots.iter().map(Slot::key).collect()
    }

    /// Returns an iterator over the stored keys in slot order.
    ///
    /// The order changes whenever the table grows.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    fn load_factor_after_insert(&self) -> f64 {
        (self.len + 1) as f64 / self.capacity() as f64
    }
}

impl<K: ProbeKey> ProbingTable<K> {
    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Returns the slot index holding `key`, or `None` if it is absent.
    ///
    /// Probing skips tombstones and stops at the first never-used slot, or
    /// after `capacity` attempts.
    pub fn search<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ProbeKey + ?Sized,
    {
        let capacity = self.capacity();
        let home = key.home_slot(capacity);
        for attempt in 0..capacity {
            let index = probe_index(home, attempt, capacity);
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(stored) if Borrow::<Q>::borrow(stored) == key => {
                    return Some(index);
                }
                Slot::Occupied(_) | Slot::Deleted => {}
            }
        }
        None
    }

    /// Returns true if `key` is stored in the table.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ProbeKey + ?Sized,
    {
        self.search(key).is_some()
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Grows the table until one more key keeps the load factor below the
    /// threshold. A single doubling suffices unless the threshold is tiny.
    fn grow_for_insert(&mut self) {
        while self.load_factor_after_insert() >= self.load_factor_threshold {
            self.resize();
        }
    }

    /// Grows the table to the smallest prime at least twice the capacity and
    /// re-places every key.
    fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = next_prime(old_capacity.saturating_mul(2));
        let old_slots = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.len = 0;
        self.num_tombstones = 0;

        for slot in old_slots {
            if let Slot::Occupied(key) = slot {
                // Under half of a prime capacity is taken, so placement cannot fail.
                debug_assert!(2 * (self.len + 1) <= new_capacity);
                if self.place(key).is_err() {
                    unreachable!("a freshly grown table always has room for the old keys");
                }
            }
        }

        debug!(
            "resized probing table from {old_capacity} to {new_capacity} slots, {} keys rehashed",
            self.len
        );
    }

    /// Puts `key` in the first free slot of its probe sequence.
    ///
    /// Gives the key back if no free slot is found within the probing limit.
    fn place(&mut self, key: K) -> Result<usize, K> {
        let capacity = self.capacity();
        let home = key.home_slot(capacity);
        for attempt in 0..probing_limit(capacity) {
            let index = probe_index(home, attempt, capacity);
            let slot = &mut self.slots[index];
            if slot.is_occupied() {
                continue;
            }
            if matches!(slot, Slot::Deleted) {
                self.num_tombstones -= 1;
            }
            *slot = Slot::Occupied(key);
            self.len += 1;
            trace!("placed key at slot {index} after {attempt} collisions");
            return Ok(index);
        }
        Err(key)
    }
}

impl<K: ProbeKey + fmt::Debug> ProbingTable<K> {
    /// Inserts `key` and returns the slot index it was placed in.
    ///
    /// If the insert would bring the load factor to the threshold or above,
    /// the table grows first, so `len / capacity` stays below the threshold.
    /// Slot indices obtained before the call are no longer valid afterwards.
    ///
    /// # Errors
    ///
    /// * [`ErrorKind::DuplicateKey`] if `key` is already stored.
    /// * [`ErrorKind::ProbingLimitExceeded`] if no free slot was found within
    ///   `⌈(capacity + 1) / 2⌉` attempts. This can happen below the threshold
    ///   when colliding keys fill every slot the probe sequence visits. The
    ///   table is left unchanged: a failure never follows a resize, because a
    ///   freshly grown table is less than half full.
    ///
    /// [`ErrorKind::DuplicateKey`]: crate::error::ErrorKind::DuplicateKey
    /// [`ErrorKind::ProbingLimitExceeded`]: crate::error::ErrorKind::ProbingLimitExceeded
    pub fn insert(&mut self, key: K) -> Result<usize, Error> {
        if self.search(&key).is_some() {
            return Err(Error::duplicate_key(&key).with_context("capacity", self.capacity()));
        }

        self.grow_for_insert();

        self.place(key).map_err(|key| {
            let capacity = self.capacity();
            warn!("max probing limit reached for key {key:?} with capacity {capacity}");
            Error::probing_limit_exceeded(&key, probing_limit(capacity))
                .with_context("capacity", capacity)
                .with_context("len", self.len)
        })
    }

    /// Removes `key` and returns the stored key.
    ///
    /// The slot becomes a tombstone.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::KeyNotFound`](crate::error::ErrorKind::KeyNotFound) if `key` is
    /// not stored.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<K, Error>
    where
        K: Borrow<Q>,
        Q: ProbeKey + fmt::Debug + ?Sized,
    {
        let removed = self
            .search(key)
            .and_then(|index| self.slots[index].take());
        match removed {
            Some(stored) => {
                self.len -= 1;
                self.num_tombstones += 1;
                Ok(stored)
            }
            None => Err(Error::key_not_found(key).with_context("capacity", self.capacity())),
        }
    }
}

impl<K> Default for ProbingTable<K> {
    fn default() -> Self {
        Self::with_config(DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR_THRESHOLD)
    }
}

impl<K: fmt::Debug> fmt::Debug for ProbingTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("num_tombstones", &self.num_tombstones)
            .field("load_factor_threshold", &self.load_factor_threshold)
            .field("slots", &self.snapshot())
            .finish()
    }
}

impl<K: ProbeKey> Extend<K> for ProbingTable<K> {
    /// Inserts every key, skipping keys that are already stored.
    ///
    /// Unlike [`insert`](ProbingTable::insert), a key whose probe sequence is
    /// full makes the table grow, after which it always fits.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if self.contains(&key) {
                continue;
            }
            self.grow_for_insert();
            if let Err(key) = self.place(key) {
                debug!("probe sequence full at capacity {}, growing", self.capacity());
                self.resize();
                if self.place(key).is_err() {
                    unreachable!("a freshly grown table always has room for one more key");
                }
            }
        }
    }
}

impl<K: ProbeKey> FromIterator<K> for ProbingTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<'a, K> IntoIterator for &'a ProbingTable<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys of a [`ProbingTable`], in slot order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    slots: std::slice::Iter<'a, Slot<K>>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.slots.by_ref().find_map(Slot::key)?;
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

fn empty_slots<K>(capacity: usize) -> Vec<Slot<K>> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// Slot visited at `attempt` of the quadratic probe sequence.
#[inline]
fn probe_index(home: usize, attempt: usize, capacity: usize) -> usize {
    let capacity = capacity as u128;
    let offset = (attempt as u128 * attempt as u128) % capacity;
    ((home as u128 + offset) % capacity) as usize
}

/// Number of attempts an insert makes before giving up: `⌈(capacity + 1) / 2⌉`.
///
/// For a prime capacity these attempts visit pairwise distinct slots.
#[inline]
fn probing_limit(capacity: usize) -> usize {
    capacity / 2 + 1
}

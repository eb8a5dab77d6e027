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

use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::table::DEFAULT_INITIAL_CAPACITY;
use crate::table::DEFAULT_LOAD_FACTOR_THRESHOLD;
use crate::table::ProbeKey;
use crate::table::ProbingTable;

/// Builder for creating probing tables.
///
/// # Examples
///
/// ```
/// use quadprobe::table::ProbingTable;
///
/// let table: ProbingTable<u64> = ProbingTable::builder()
///     .initial_capacity(100)
///     .load_factor_threshold(0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.capacity(), 101);
/// assert_eq!(table.load_factor_threshold(), 0.5);
/// ```
pub struct ProbingTableBuilder<K> {
    initial_capacity: usize,
    load_factor_threshold: f64,
    _key: PhantomData<fn() -> K>,
}

impl<K> Default for ProbingTableBuilder<K> {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            _key: PhantomData,
        }
    }
}

impl<K> Clone for ProbingTableBuilder<K> {
    fn clone(&self) -> Self {
        Self {
            initial_capacity: self.initial_capacity,
            load_factor_threshold: self.load_factor_threshold,
            _key: PhantomData,
        }
    }
}

impl<K> fmt::Debug for ProbingTableBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingTableBuilder")
            .field("initial_capacity", &self.initial_capacity)
            .field("load_factor_threshold", &self.load_factor_threshold)
            .finish()
    }
}

impl<K: ProbeKey> ProbingTableBuilder<K> {
    /// Sets the requested number of slots.
    ///
    /// The table rounds it up to the next prime. Must be at least 1.
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the load factor at which an insert first grows the table.
    ///
    /// An insert that would bring `len / capacity` to this value or above
    /// resizes before placing the key. Must lie in `(0, 1]`.
    pub fn load_factor_threshold(mut self, load_factor_threshold: f64) -> Self {
        self.load_factor_threshold = load_factor_threshold;
        self
    }

    /// Builds an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid)
    /// if the initial capacity is zero or the threshold is outside `(0, 1]`.
    pub fn build(self) -> Result<ProbingTable<K>, Error> {
        if self.initial_capacity == 0 {
            return Err(Error::config_invalid("initial capacity must be at least 1")
                .with_context("initial_capacity", self.initial_capacity));
        }
        // Written so that NaN fails the check.
        if !(self.load_factor_threshold > 0.0 && self.load_factor_threshold <= 1.0) {
            return Err(
                Error::config_invalid("load factor threshold must be in (0, 1]")
                    .with_context("load_factor_threshold", self.load_factor_threshold),
            );
        }
        Ok(ProbingTable::with_config(
            self.initial_capacity,
            self.load_factor_threshold,
        ))
    }
}

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

/// One position of the slot arena.
///
/// `Deleted` is a tombstone: the slot is free for insertion, but a search must
/// keep probing past it because live keys may sit further along the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    /// Never used since the last resize, clear or rehash.
    Empty,
    /// Holds a live key.
    Occupied(K),
    /// Held a key that has since been removed.
    Deleted,
}

impl<K> Slot<K> {
    /// Returns true if the slot holds a live key.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Returns the live key, if any.
    pub fn key(&self) -> Option<&K> {
        match self {
            Slot::Occupied(key) => Some(key),
            Slot::Empty | Slot::Deleted => None,
        }
    }

    /// Replaces an occupied slot with a tombstone and returns the key.
    pub(crate) fn take(&mut self) -> Option<K> {
        match std::mem::replace(self, Slot::Deleted) {
            Slot::Occupied(key) => Some(key),
            other => {
                *self = other;
                None
            }
        }
    }
}

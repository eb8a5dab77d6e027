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

//! Home slot computation for the key types a probing table can store.

/// Seed for hashing byte-like keys; fixed so that slot layouts are reproducible.
const BYTES_HASH_SEED: u32 = 0;

/// A key that can be stored in a [`ProbingTable`](crate::table::ProbingTable).
///
/// The home slot is attempt 0 of the quadratic probe sequence. It must depend
/// only on the key and the capacity, and equal keys must share a home slot.
///
/// Integer keys use `key mod capacity`, taking the Euclidean remainder so that
/// negative keys also land in `[0, capacity)`. Byte-like keys are hashed with
/// MurmurHash3 first.
///
/// # Examples
///
/// ```
/// use quadprobe::table::ProbeKey;
///
/// assert_eq!(25u32.home_slot(11), 3);
/// assert_eq!((-1i64).home_slot(11), 10);
/// ```
pub trait ProbeKey: Eq {
    /// Returns the home slot of this key in a table of `capacity` slots.
    ///
    /// `capacity` is always non-zero.
    fn home_slot(&self, capacity: usize) -> usize;
}

macro_rules! impl_probe_key_for_int {
    ($($t:ty),*) => {
        $(
            impl ProbeKey for $t {
                #[inline]
                fn home_slot(&self, capacity: usize) -> usize {
                    (*self as i128).rem_euclid(capacity as i128) as usize
                }
            }
        )*
    };
}

impl_probe_key_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[inline]
fn bytes_home_slot(bytes: &[u8], capacity: usize) -> usize {
    let (h1, _) = mur3::murmurhash3_x64_128(bytes, BYTES_HASH_SEED);
    (h1 % capacity as u64) as usize
}

impl ProbeKey for [u8] {
    fn home_slot(&self, capacity: usize) -> usize {
        bytes_home_slot(self, capacity)
    }
}

impl ProbeKey for Vec<u8> {
    fn home_slot(&self, capacity: usize) -> usize {
        bytes_home_slot(self, capacity)
    }
}

impl ProbeKey for str {
    fn home_slot(&self, capacity: usize) -> usize {
        bytes_home_slot(self.as_bytes(), capacity)
    }
}

impl ProbeKey for String {
    fn home_slot(&self, capacity: usize) -> usize {
        bytes_home_slot(self.as_bytes(), capacity)
    }
}

impl<T: ProbeKey + ?Sized> ProbeKey for &T {
    #[inline]
    fn home_slot(&self, capacity: usize) -> usize {
        (**self).home_slot(capacity)
    }
}

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

//! Open addressing hash set with quadratic probing and prime-sized growth.
//!
//! Keys are stored directly in a prime-sized slot arena. A key's home slot is
//! `key mod capacity` for integers (byte-like keys are hashed with MurmurHash3
//! first); on collision the table probes `home + attempt²`.
//!
//! # Usage
//!
//! ```rust
//! use quadprobe::table::ProbingTable;
//!
//! let mut table = ProbingTable::new(5);
//! for key in [1, 6, 15, 25] {
//!     table.insert(key).unwrap();
//! }
//!
//! // The fourth insert reached the 0.8 load factor and grew the table.
//! assert_eq!(table.capacity(), 11);
//! assert_eq!(table.search(&25), Some(3));
//! ```
//!
//! # Notes
//!
//! - Removal leaves a tombstone, so searches never stop early on a hole left
//!   by a removed key.
//! - Slot indices returned by [`ProbingTable::insert`] and
//!   [`ProbingTable::search`] are invalidated by any insert that grows the
//!   table.

mod builder;
mod key;
mod probing_table;
mod slot;

pub use self::builder::ProbingTableBuilder;
pub use self::key::ProbeKey;
pub use self::probing_table::DEFAULT_INITIAL_CAPACITY;
pub use self::probing_table::DEFAULT_LOAD_FACTOR_THRESHOLD;
pub use self::probing_table::Iter;
pub use self::probing_table::ProbingTable;
pub use self::slot::Slot;

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

//! An open addressing hash set with quadratic probing and automatic
//! prime-sized growth.
//!
//! The crate provides a single container, [`table::ProbingTable`], together
//! with the prime helpers that size it and the [`error::Error`] type returned
//! by its fallible operations.
//!
//! ```rust
//! use quadprobe::error::ErrorKind;
//! use quadprobe::table::ProbingTable;
//!
//! let mut table: ProbingTable<i64> = ProbingTable::builder()
//!     .initial_capacity(16)
//!     .load_factor_threshold(0.75)
//!     .build()
//!     .unwrap();
//!
//! table.insert(42).unwrap();
//! assert!(table.contains(&42));
//! assert_eq!(table.remove(&7).unwrap_err().kind(), ErrorKind::KeyNotFound);
//! ```

pub mod error;
pub mod prime;
pub mod table;

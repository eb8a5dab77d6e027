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

use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use googletest::prelude::lt;
use googletest::prelude::none;
use googletest::prelude::some;
use quadprobe::error::ErrorKind;
use quadprobe::prime::is_prime;
use quadprobe::table::ProbingTable;
use quadprobe::table::Slot;

#[test]
fn test_collisions_resize_and_removal_trace() {
    let mut table = ProbingTable::new(5);
    assert_eq!(table.capacity(), 5);

    // 1 and 6 share home slot 1; 6 probes one step further.
    assert_eq!(table.insert(1).unwrap(), 1);
    assert_eq!(table.insert(6).unwrap(), 2);
    assert_eq!(table.insert(15).unwrap(), 0);
    assert_eq!(table.capacity(), 5);
    assert_eq!(
        table.snapshot(),
        vec![Some(&15), Some(&1), Some(&6), None, None]
    );

    // 4 / 5 reaches the threshold, so the table grows to 11 before placing 25.
    assert_eq!(table.insert(25).unwrap(), 3);
    assert_eq!(table.capacity(), 11);
    assert_eq!(table.len(), 4);
    assert_that!(table.search(&15), some(eq(4usize)));
    assert_that!(table.search(&1), some(eq(1usize)));
    assert_that!(table.search(&6), some(eq(6usize)));

    assert_eq!(table.remove(&15).unwrap(), 15);
    assert_that!(table.search(&15), none());
    assert_eq!(table.len(), 3);

    assert_eq!(table.insert(29).unwrap(), 7);
    assert_eq!(table.insert(33).unwrap(), 0);
    assert_eq!(table.capacity(), 11);
    assert_eq!(table.len(), 5);

    // 22 probes 0, 1, the tombstone at 4, then stops at the never-used slot 9.
    assert_that!(table.search(&22), none());
}

#[test]
fn test_capacity_eleven_holds_eight_keys() {
    let mut table = ProbingTable::new(11);
    for key in [1, 6, 25, 29, 33, 2, 3, 5] {
        table.insert(key).unwrap();
    }
    assert_eq!(table.capacity(), 11);
    assert_eq!(table.len(), 8);

    // 9 / 11 would cross 0.8.
    table.insert(8).unwrap();
    assert_eq!(table.capacity(), 23);
    assert_eq!(table.len(), 9);
}

#[test]
fn test_inserted_keys_are_found_through_many_resizes() {
    let mut table = ProbingTable::new(3);
    let keys: Vec<u64> = (0..2_000).map(|i| i * 7 + 3).collect();

    for (n, &key) in keys.iter().enumerate() {
        let capacity_before = table.capacity();
        let index = table.insert(key).unwrap();
        let capacity_after = table.capacity();

        assert_eq!(table.search(&key), Some(index));
        assert_eq!(table.len(), n + 1);
        assert_that!(table.load_factor(), lt(table.load_factor_threshold()));
        assert!(is_prime(capacity_after), "{capacity_after} is not prime");
        if capacity_after != capacity_before {
            assert!(capacity_after >= capacity_before * 2);
        }
    }

    for &key in &keys {
        assert!(table.contains(&key), "lost key {key}");
    }
    assert!(!table.contains(&2));
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut table = ProbingTable::new(5);
    table.insert(6).unwrap();

    let err = table.insert(6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(err.context("key"), Some("6"));
    assert_eq!(
        err.to_string(),
        "DuplicateKey, context: { key: 6, capacity: 5 } => duplicate key insertion is not allowed"
    );
    assert_eq!(table.len(), 1);
}

#[test]
fn test_remove_twice() {
    let mut table = ProbingTable::new(7);
    table.insert(12).unwrap();

    assert_eq!(table.remove(&12).unwrap(), 12);
    let err = table.remove(&12).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_that!(err.message(), contains_substring("not found"));
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
}

#[test]
fn test_tombstone_keeps_probe_chain_searchable() {
    let mut table = ProbingTable::new(11);
    // All three keys start at slot 0.
    assert_eq!(table.insert(0).unwrap(), 0);
    assert_eq!(table.insert(11).unwrap(), 1);
    assert_eq!(table.insert(22).unwrap(), 4);

    table.remove(&11).unwrap();
    assert_eq!(table.slots()[1], Slot::Deleted);
    assert_eq!(table.num_tombstones(), 1);
    assert_that!(table.search(&22), some(eq(4usize)));

    // The next colliding key reuses the tombstone.
    assert_eq!(table.insert(33).unwrap(), 1);
    assert_eq!(table.num_tombstones(), 0);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_resize_drops_tombstones() {
    let mut table = ProbingTable::new(5);
    table.insert(1).unwrap();
    table.insert(2).unwrap();
    table.remove(&1).unwrap();
    table.insert(3).unwrap();
    assert_eq!(table.num_tombstones(), 1);

    table.insert(4).unwrap();
    table.insert(5).unwrap();
    assert_eq!(table.capacity(), 11);
    assert_eq!(table.num_tombstones(), 0);
    assert!(!table.slots().contains(&Slot::Deleted));
}

#[test]
fn test_probing_limit_exceeded_leaves_keys_unchanged() {
    let mut table: ProbingTable<u32> = ProbingTable::builder()
        .initial_capacity(7)
        .load_factor_threshold(1.0)
        .build()
        .unwrap();
    // 0, 1, 4 and 2 are the first four slots probed from home slot 0.
    for key in [0, 1, 4, 2] {
        table.insert(key).unwrap();
    }

    let err = table.insert(7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProbingLimitExceeded);
    assert_eq!(err.context("attempts"), Some("4"));
    assert_eq!(err.context("capacity"), Some("7"));
    assert_eq!(table.len(), 4);
    assert_eq!(table.capacity(), 7);
    assert!(!table.contains(&7));

    // A key with a free home slot still goes in.
    assert_eq!(table.insert(3).unwrap(), 3);
}

#[test]
fn test_probing_limit_exceeded_below_default_threshold() {
    let mut table: ProbingTable<u32> = ProbingTable::new(11);
    // These are exactly the six slots probed from home slot 0 within the limit.
    for key in [0, 1, 4, 9, 5, 3] {
        assert_eq!(table.insert(key).unwrap(), key as usize);
    }
    let before: Vec<Option<u32>> = table.snapshot().into_iter().map(|k| k.copied()).collect();

    // 7 / 11 is well below 0.8, so no resize happens first.
    let err = table.insert(11).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProbingLimitExceeded);
    assert_eq!(err.context("attempts"), Some("6"));
    assert_eq!(table.len(), 6);
    assert_eq!(table.capacity(), 11);
    let after: Vec<Option<u32>> = table.snapshot().into_iter().map(|k| k.copied()).collect();
    assert_eq!(after, before);
    assert!(!table.contains(&11));
}

#[test]
fn test_extend_grows_when_probe_sequence_is_full() {
    let mut table: ProbingTable<u32> = ProbingTable::new(11);
    table.extend([0, 1, 4, 9, 5, 3, 11]);

    assert_eq!(table.len(), 7);
    assert_eq!(table.capacity(), 23);
    for key in [0, 1, 4, 9, 5, 3, 11] {
        assert!(table.contains(&key), "lost key {key}");
    }
}

#[test]
fn test_negative_keys() {
    let mut table = ProbingTable::new(11);
    assert_eq!(table.insert(-1i64).unwrap(), 10);
    assert_eq!(table.insert(-12i64).unwrap(), 0);
    assert_eq!(table.remove(&-1).unwrap(), -1);
    assert_that!(table.search(&-12), some(eq(0usize)));
}

#[test]
fn test_string_keys_with_borrowed_lookup() {
    let mut table: ProbingTable<String> = ProbingTable::new(5);
    for word in ["apple", "banana", "cherry", "date", "elderberry"] {
        table.insert(word.to_string()).unwrap();
    }

    assert_eq!(table.len(), 5);
    assert!(table.contains("banana"));
    assert!(!table.contains("fig"));
    assert_eq!(table.remove("cherry").unwrap(), "cherry");
    assert!(!table.contains("cherry"));

    let err = table.remove("cherry").unwrap_err();
    assert_eq!(err.context("key"), Some("\"cherry\""));
}

#[test]
fn test_iter_clear_and_snapshot() {
    let mut table = ProbingTable::new(13);
    for key in [40u32, 2, 27, 9] {
        table.insert(key).unwrap();
    }
    table.remove(&27).unwrap();

    let iter = table.iter();
    assert_eq!(iter.len(), 3);
    let mut keys: Vec<u32> = iter.copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![2, 9, 40]);
    assert_eq!((&table).into_iter().count(), 3);

    let snapshot = table.snapshot();
    assert_eq!(snapshot.len(), table.capacity());
    assert_eq!(snapshot.iter().flatten().count(), 3);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), 13);
    assert_eq!(table.num_tombstones(), 0);
    assert!(table.snapshot().iter().all(Option::is_none));
    assert_eq!(table.iter().next(), None);
}

#[test]
fn test_collect_and_extend_skip_duplicates() {
    let mut table: ProbingTable<u32> = [3, 1, 3, 2].into_iter().collect();
    assert_eq!(table.len(), 3);
    assert_eq!(table.capacity(), 5);

    table.extend([2, 4, 5, 6]);
    assert_eq!(table.len(), 6);
    for key in 1..=6 {
        assert!(table.contains(&key));
    }
}

#[test]
fn test_default_and_debug() {
    let mut table: ProbingTable<u8> = ProbingTable::default();
    assert_eq!(table.capacity(), 5);
    assert_eq!(table.load_factor_threshold(), 0.8);

    table.insert(7).unwrap();
    let debug = format!("{table:?}");
    assert_that!(debug.as_str(), contains_substring("capacity: 5"));
    assert_that!(
        debug.as_str(),
        contains_substring("slots: [None, None, Some(7), None, None]")
    );
}

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

//! Prime number helpers used to size probing tables.
//!
//! Quadratic probing over a prime capacity `p` visits `(p + 1) / 2` distinct
//! slots before repeating, which is what bounds insertion in the table.

/// Returns true if `n` is prime.
///
/// Uses trial division by odd candidates up to the square root of `n`.
///
/// # Examples
///
/// ```
/// use quadprobe::prime::is_prime;
///
/// assert!(is_prime(11));
/// assert!(!is_prime(15));
/// ```
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3usize;
    // divisor <= n / divisor is divisor * divisor <= n without overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
///
/// # Panics
///
/// Panics if no such prime fits in `usize`.
///
/// # Examples
///
/// ```
/// use quadprobe::prime::next_prime;
///
/// assert_eq!(next_prime(5), 5);
/// assert_eq!(next_prime(10), 11);
/// assert_eq!(next_prime(0), 2);
/// ```
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate = candidate
            .checked_add(1)
            .unwrap_or_else(|| panic!("no prime >= {n} fits in usize"));
    }
    candidate
}

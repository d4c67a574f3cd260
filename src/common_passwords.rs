// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! The common-password denylist.
//!
//! A curated list of common and leaked passwords (sequences, dictionary words,
//! keyboard walks, names, years) compiled into the binary from
//! `data/common_passwords.txt`. Parsed into a hash set on first lookup and
//! never touched again, so concurrent readers need no locking.
//!
//! Lookups are exact and case-sensitive: `password` is listed, `Password` is
//! not.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Raw list, one password per line.
const RAW_LIST: &str = include_str!("../data/common_passwords.txt");

static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let set: HashSet<&'static str> = RAW_LIST
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    tracing::debug!(entries = set.len(), "loaded common-password list");
    set
});

/// Whether `password` appears verbatim in the denylist.
#[inline]
pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(password)
}

/// Number of distinct entries in the denylist.
pub fn common_password_count() -> usize {
    COMMON_PASSWORDS.len()
}

/// Iterate over the denylist in no particular order.
pub fn common_passwords() -> impl Iterator<Item = &'static str> {
    COMMON_PASSWORDS.iter().copied()
}

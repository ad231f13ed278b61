#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A hash set over the chained table.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers, plus the owned
/// `Snapshot` iterator.
pub mod hash_set;

pub mod hash_table;

pub use hash_set::HashSet;
pub use hash_set::Snapshot;
pub use hash_table::CapacityExceeded;
pub use hash_table::Entry;
pub use hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used by [`HashSet`] when none is supplied.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used by [`HashSet`] when none is supplied.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Placeholder hasher builder. With neither `std` nor `foldhash`
        /// enabled there is no default hasher; supply one explicitly via
        /// [`HashSet::with_hasher`].
        pub enum DefaultHashBuilder {}
    }
}

#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A HashMap implementation backed by the linear-probing table.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

pub use hash_map::HashMap;
pub use hash_table::EntryFormatter;
pub use hash_table::HashTable;
pub use hash_table::Stats;
pub use hash_table::TableConfig;
pub use hash_table::TableOps;

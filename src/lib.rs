#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// A hash map implementation using separate chaining.
///
/// This module provides `ChainMap`, which owns an array of lazily allocated
/// collision chains and addresses them through a randomized multiplicative
/// bucket index.
pub mod chain_map;

/// The owned key-value pair stored in a collision chain.
pub mod entry;

/// Error types reported by construction and the value-returning lookup.
pub mod error;

/// The numeric-convertible key bound required by the bucket index.
pub mod key;

pub use chain_map::ChainMap;
pub use entry::Entry;
pub use error::Error;
pub use error::Result;
pub use key::NumericKey;

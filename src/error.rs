use thiserror::Error;

/// Errors that can occur when constructing or querying a map.
///
/// Only two operations can fail: construction with a zero size, and the
/// value-returning lookup on an absent key. Every other miss (the
/// reference-returning lookup, `erase`, the collision-count probe) is a
/// normal, silent outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key not found by the value-returning lookup.
    #[error("key not found")]
    KeyNotFound,

    /// A requested size (initial capacity or random fill count) was zero.
    #[error("size must be greater than zero")]
    ZeroSize,
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

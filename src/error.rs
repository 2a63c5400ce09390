use thiserror::Error;

/// Everything that can go wrong with a `BiMap`.
///
/// A missing key or value is never an error; lookups return `Option`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A mutation was attempted after `make_immutable`. Nothing was changed.
    #[error("cannot modify an immutable bimap")]
    Immutable,

    /// `try_from_pairs` saw a key for the second time. Holds the position of the offending pair.
    #[error("duplicate key in seed at position {0}")]
    DuplicateKey(usize),

    /// `try_from_pairs` saw a value for the second time. Holds the position of the offending pair.
    #[error("duplicate value in seed at position {0}")]
    DuplicateValue(usize),
}

pub type Result<T> = ::std::result::Result<T, Error>;

//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{Iter, KeySet, Keys, RedBlackMap, Values};
pub use self::set::{RedBlackSet, RedBlackSetIter};

use std::error;
use std::fmt;
use std::result;

/// The number of nodes allocated at a time by a map or set unless told otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Errors signalled by the explicit iteration protocol of `Keys`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The next element was requested from an iterator with no remaining elements.
    Exhausted,
    /// Elements cannot be removed through a key view.
    Unsupported,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Exhausted => write!(f, "no elements remain in the iterator"),
            Error::Unsupported => write!(f, "removal through a key view is not supported"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.
//!
//! Every insertion and every successful lookup restructures the tree with a single top-down pass
//! that moves the accessed key to the root, so operations are amortized `O(log n)` and repeated
//! accesses to the same or nearby keys become progressively cheaper.

#[macro_use]
extern crate serde_derive;

mod node;
mod set;
mod tree;

pub use self::set::{SplaySet, SplaySetIntoIter, SplaySetIter};

use std::error;
use std::fmt;
use std::result;

/// The error type for operations that are only defined on a non-empty collection.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyCollection,
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::EmptyCollection => "Collection is empty.",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "Collection is empty."),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

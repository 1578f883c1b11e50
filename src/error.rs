//! Errors surfaced synchronously from generator invocation.
//!
//! Everything else a caller can get wrong (a negative `max_tries`, an empty
//! `member_of` enumerable, a non-positive `frequency` weight) is a
//! programmer error validated eagerly at combinator-construction time via
//! `assert!`/`panic!`, not represented here.

use core::fmt;
use std::error;

/// An error a generator invocation can raise at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A [`crate::filter`] or [`crate::bind_filter`] predicate rejected
    /// `max_consecutive_failures` freshly generated roots in a row.
    FilterTooNarrow { max_consecutive_failures: usize },
    /// [`crate::uniq_list_of`] (or [`crate::map_of`]) could not find a key
    /// that was not already present within `max_tries` consecutive
    /// attempts.
    TooManyDuplicates {
        max_tries: usize,
        /// How many more unique elements were still needed.
        remaining: usize,
        /// How many elements had already been generated.
        generated: usize,
    },
    /// [`crate::member_of`] was given an empty enumerable.
    EmptyEnumerable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FilterTooNarrow {
                max_consecutive_failures,
            } => write!(
                f,
                "filter predicate rejected {max_consecutive_failures} consecutive \
                 candidates; the predicate is too narrow for this generator, \
                 reshape the generator instead of filtering so heavily"
            ),
            Error::TooManyDuplicates {
                max_tries,
                remaining,
                generated,
            } => write!(
                f,
                "could not find a fresh key within {max_tries} consecutive tries; \
                 {remaining} more unique element(s) were needed after {generated} \
                 had already been generated"
            ),
            Error::EmptyEnumerable => {
                write!(f, "member_of was given an empty enumerable to pick from")
            }
        }
    }
}

impl error::Error for Error {}

/// The result type returned by generator operations that can fail.
pub type Result<T> = core::result::Result<T, Error>;

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # fnkit
//!
//! Small pure utility functions: factorial, longest word, Hungarian vowel
//! count, record subset check and record intersection.
//!
//! This library re-exports the workspace core crate for convenience.

pub use fnkit_core;

pub use fnkit_core::{
    BigUint, Error, NEGATIVE_FACTORIAL, Record, Result, common_objects, factorial, is_subset,
    is_vowel, longest_word, vowel_count,
};

//! # fnkit core
//!
//! Small pure functions over numbers, text, and JSON-style records.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` - returns `Result` instead
//! - No unchecked arithmetic on primitives
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! Only [`factorial`] is fallible and returns [`Result`]. Everything else is
//! total over its input.

mod error;
mod factorial;
mod record;
mod result;
mod text;

pub use error::{Error, NEGATIVE_FACTORIAL};
pub use factorial::factorial;
pub use num_bigint::BigUint;
pub use record::{Record, common_objects, is_subset};
pub use result::Result;
pub use text::{is_vowel, longest_word, vowel_count};

//! Composable random string pattern generator.
//!
//! A pattern is a tree of [`Part`]s: literals, bounded repetition, uniform
//! choice, shuffles, probabilistic inclusion and wrapping counters. A
//! [`Generator`] holds a normalized list of parts and, on each invocation,
//! walks them in order appending their output to one growing byte buffer,
//! so producing a string costs a single allocation in the common case.
//!
//! # Example
//!
//! ```rust
//! use patgen::{Generator, Part};
//!
//! // Order ids like "58319-ab-007".
//! let gen = Generator::new(vec![
//!     Part::repeat(5, 5, vec![Part::one_of_bytes(b"0123456789").unwrap()]).unwrap(),
//!     Part::literal("-"),
//!     Part::shuffle(vec![Part::literal("a"), Part::literal("b")]),
//!     Part::literal("-"),
//!     Part::sequence(1, 999, 3).unwrap(),
//! ]);
//!
//! let id = gen.generate();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! # Parts
//!
//! - [`Part::literal`] - fixed text
//! - [`Part::group`] - several parts treated as one unit
//! - [`Part::repeat`] - repetition with a uniformly random count
//! - [`Part::potentially`] - inclusion with a configured probability
//! - [`Part::one_of`], [`Part::one_of_bytes`], [`Part::one_of_chars`],
//!   [`Part::one_of_strings`] - uniform choice from an alphabet
//! - [`Part::shuffle`] - uniformly random permutation
//! - [`Part::sequence`] - thread-safe wrapping counter, zero-padded
//!
//! A [`Generator`] itself converts into a [`Part`], so whole patterns nest
//! inside other patterns.
//!
//! All configuration is validated when a part is constructed; generation
//! itself never fails. The default randomness is fast and
//! non-cryptographic; see [`random`] for the raw source, including the
//! secure byte fill.

pub mod error;
pub mod generator;
pub mod parts;
pub mod random;

mod decimal;

pub use error::PatternError;
pub use generator::{Generator, Samples};
pub use parts::Part;

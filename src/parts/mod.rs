//! Pattern parts and their append dispatch.
//!
//! Every part appends its output to a growing byte buffer. Parts that need
//! randomness pull from [`crate::random`]; the only mutable cross-call
//! state in a pattern tree is the [`Sequence`] counter and the [`Shuffle`]
//! child order.

pub mod choice;
pub mod potentially;
pub mod repeat;
pub mod sequence;
pub mod shuffle;

use crate::generator::Generator;
use crate::random;

pub use choice::{OneOf, OneOfBytes, OneOfChars, OneOfStrings};
pub use potentially::Potentially;
pub use repeat::Repeat;
pub use sequence::Sequence;
pub use shuffle::Shuffle;

/// One node of a pattern tree.
///
/// Parts are built through the associated constructors ([`Part::literal`],
/// [`Part::repeat`], ...), which validate their configuration and collapse
/// trivial cases to cheaper equivalents. Appending never fails.
///
/// Cloning a part clones its children; the one exception is [`Sequence`],
/// whose counter is shared by clones so the numbering continues instead of
/// restarting.
#[derive(Debug, Clone)]
pub enum Part {
    /// Appends nothing. Dropped by [`Generator::new`].
    Null,
    /// Fixed byte output.
    Literal(Vec<u8>),
    /// An ordered run of parts appended as one unit.
    Group(Vec<Part>),
    /// Random-length repetition.
    Repeat(Repeat),
    /// Includes the inner part half of the time, testing one random bit.
    CoinFlip(Box<Part>),
    /// Includes the inner part with a configured chance.
    Potentially(Potentially),
    /// Uniform choice between sub-parts.
    OneOf(OneOf),
    /// Uniform choice from a byte alphabet.
    OneOfBytes(OneOfBytes),
    /// Uniform choice from a character alphabet.
    OneOfChars(OneOfChars),
    /// Uniform choice from a string alphabet.
    OneOfStrings(OneOfStrings),
    /// Random permutation of sub-parts.
    Shuffle(Shuffle),
    /// Wrapping zero-padded counter.
    Sequence(Sequence),
    /// A whole generator embedded as a single part.
    Nested(Generator),
}

impl Part {
    /// Appends this part's output to `out`.
    pub fn append(&self, out: &mut Vec<u8>) {
        match self {
            Part::Null => {}
            Part::Literal(bytes) => out.extend_from_slice(bytes),
            Part::Group(parts) => {
                for part in parts {
                    part.append(out);
                }
            }
            Part::Repeat(repeat) => repeat.append(out),
            Part::CoinFlip(part) => {
                if random::fast_u64() & 1 == 1 {
                    part.append(out);
                }
            }
            Part::Potentially(potentially) => potentially.append(out),
            Part::OneOf(choice) => choice.append(out),
            Part::OneOfBytes(choice) => choice.append(out),
            Part::OneOfChars(choice) => choice.append(out),
            Part::OneOfStrings(choice) => choice.append(out),
            Part::Shuffle(shuffle) => shuffle.append(out),
            Part::Sequence(sequence) => sequence.append(out),
            Part::Nested(generator) => generator.append(out),
        }
    }

    /// Returns a part that always outputs `s`.
    pub fn literal(s: &str) -> Part {
        Part::Literal(s.as_bytes().to_vec())
    }

    /// Wraps `parts` into a single part.
    ///
    /// A group of one is just that part.
    pub fn group(mut parts: Vec<Part>) -> Part {
        if parts.len() == 1 {
            return parts.swap_remove(0);
        }
        Part::Group(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_parts_are_shareable_across_threads() {
        assert_send_sync::<Part>();
        assert_send_sync::<Generator>();
    }

    #[test]
    fn test_literal_appends_exact_bytes() {
        let mut out = Vec::new();
        Part::literal("abc").append(&mut out);
        assert_eq!(out, b"abc");
    }

    #[test]
    fn test_group_of_one_collapses_to_the_part() {
        assert!(matches!(
            Part::group(vec![Part::literal("o")]),
            Part::Literal(_)
        ));
    }

    #[test]
    fn test_null_appends_nothing() {
        let mut out = b"x".to_vec();
        Part::Null.append(&mut out);
        assert_eq!(out, b"x");
    }
}

//! Probabilistic inclusion of a part.

use crate::error::PatternError;
use crate::parts::Part;
use crate::random;

/// Includes the inner part when a fresh uniform draw lands within the
/// configured chance.
#[derive(Debug, Clone)]
pub struct Potentially {
    part: Box<Part>,
    chance: f64,
}

impl Potentially {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        if random::uniform_f64() <= self.chance {
            self.part.append(out);
        }
    }
}

impl Part {
    /// Returns a part that includes `part` with probability `chance`.
    ///
    /// A chance of zero never includes the part and a chance of one or
    /// more always does; both are resolved at construction so they cost
    /// nothing at generation time. A chance of exactly 0.5 tests a single
    /// random bit instead of drawing a float.
    ///
    /// # Errors
    ///
    /// Fails when `chance` is negative.
    pub fn potentially(chance: f64, part: Part) -> Result<Part, PatternError> {
        if chance < 0.0 {
            return Err(PatternError::NegativeChance(chance));
        }
        if chance == 0.0 {
            return Ok(Part::Null);
        }
        if chance >= 1.0 {
            return Ok(part);
        }
        if chance == 0.5 {
            return Ok(Part::CoinFlip(Box::new(part)));
        }

        Ok(Part::Potentially(Potentially {
            part: Box::new(part),
            chance,
        }))
    }
}

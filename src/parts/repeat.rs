//! Bounded random-length repetition.

use crate::error::PatternError;
use crate::parts::Part;
use crate::random;

/// Repeats a run of parts a uniformly random number of times.
#[derive(Debug, Clone)]
pub struct Repeat {
    parts: Vec<Part>,
    min: u32,
    /// Width of the `[min, max]` range, so one draw yields the count.
    span: u32,
}

impl Repeat {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        let n = random::uniform_u32(self.span) + self.min;
        for _ in 0..n {
            for part in &self.parts {
                part.append(out);
            }
        }
    }
}

impl Part {
    /// Returns a part that repeats `parts` as a unit between `min` and
    /// `max` times (both inclusive), each count equally likely.
    ///
    /// With `min == max` the parts are repeated exactly that many times
    /// and no randomness is drawn; `min == 0, max == 1` turns into a
    /// single-bit coin flip over the grouped parts.
    ///
    /// # Errors
    ///
    /// Fails when `max` is zero or less than `min`.
    pub fn repeat(min: u32, max: u32, parts: Vec<Part>) -> Result<Part, PatternError> {
        if max == 0 {
            return Err(PatternError::RepeatMaxZero);
        }
        if max < min {
            return Err(PatternError::RepeatMaxBelowMin { min, max });
        }

        // A constant repeat is a plain group.
        if min == max {
            let mut grouped = Vec::with_capacity(parts.len() * max as usize);
            for _ in 0..max {
                grouped.extend(parts.iter().cloned());
            }
            return Ok(Part::Group(grouped));
        }

        if min == 0 && max == 1 {
            return Ok(Part::CoinFlip(Box::new(Part::group(parts))));
        }

        Ok(Part::Repeat(Repeat {
            parts,
            min,
            span: max - min + 1,
        }))
    }
}

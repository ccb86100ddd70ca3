//! Thread-safe wrapping counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::decimal;
use crate::error::PatternError;
use crate::parts::Part;

/// Appends the next value of a wrapping counter on each append.
///
/// The counter is the one piece of cross-call state in a pattern tree. It
/// is shared: clones of a `Sequence` continue the same numbering instead
/// of restarting at `start`. Updates use a compare-and-swap retry loop, so
/// concurrent appends on one counter each observe a distinct value with no
/// duplicates and no gaps.
#[derive(Debug, Clone)]
pub struct Sequence {
    start: u64,
    max: u64,
    width: usize,
    curr: Arc<AtomicU64>,
}

impl Sequence {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        loop {
            let last = self.curr.load(Ordering::Relaxed);
            let mut curr = last.wrapping_add(1);
            // The second test catches 64-bit wraparound.
            if curr > self.max || curr < self.start {
                curr = self.start;
            }

            if self
                .curr
                .compare_exchange(last, curr, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                decimal::append_padded(out, curr, self.width);
                return;
            }
        }
    }
}

impl Part {
    /// Returns a part that counts from `start` to `max` (both inclusive),
    /// one step per append, wrapping back to `start` past `max`. Values
    /// are zero-padded to at least `width` digits.
    ///
    /// # Errors
    ///
    /// Fails when `max` is less than `start`.
    pub fn sequence(start: u64, max: u64, width: usize) -> Result<Part, PatternError> {
        if max < start {
            return Err(PatternError::SequenceMaxBelowStart { start, max });
        }

        // Initialized one below start so the first append yields start.
        Ok(Part::Sequence(Sequence {
            start,
            max,
            width,
            curr: Arc::new(AtomicU64::new(start.wrapping_sub(1))),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::AtomicU64;
    use std::sync::Arc;
    use std::thread;

    use super::Sequence;
    use crate::{Generator, Part, PatternError};

    #[test]
    fn test_counts_up_and_wraps_past_max() {
        let gen = Generator::new(vec![Part::sequence(0, 100, 4).unwrap()]);

        for want in 0..=100 {
            let v = gen.generate();
            assert_eq!(v.len(), 4);
            assert_eq!(v, format!("{want:04}"));
        }

        // 102nd call wraps back to start.
        assert_eq!(gen.generate(), "0000");
    }

    #[test]
    fn test_max_below_start_fails_construction() {
        assert!(matches!(
            Part::sequence(2, 1, 0),
            Err(PatternError::SequenceMaxBelowStart { start: 2, max: 1 })
        ));
    }

    #[test]
    fn test_u64_overflow_wraps_to_start() {
        // Counter parked at the top of the u64 range; the next increment
        // wraps to 0, which is below start and must reset to start.
        let seq = Sequence {
            start: 1,
            max: u64::MAX,
            width: 0,
            curr: Arc::new(AtomicU64::new(u64::MAX)),
        };
        let gen = Generator::new(vec![Part::Sequence(seq)]);

        assert_eq!(gen.generate(), "1");
    }

    #[test]
    fn test_clones_share_the_counter() {
        let a = Part::sequence(0, 9, 0).unwrap();
        let b = a.clone();

        let mut out = Vec::new();
        a.append(&mut out);
        b.append(&mut out);
        a.append(&mut out);

        assert_eq!(out, b"012");
    }

    #[test]
    fn test_concurrent_appends_never_duplicate() {
        const THREADS: usize = 4;
        const PER_THREAD: usize = 250;

        let seq = Part::sequence(1, 9999, 4).unwrap();

        let mut buffers = Vec::new();
        thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let seq = &seq;
                    s.spawn(move || {
                        let mut out = Vec::new();
                        for _ in 0..PER_THREAD {
                            seq.append(&mut out);
                        }
                        out
                    })
                })
                .collect();
            for handle in handles {
                buffers.push(handle.join().unwrap());
            }
        });

        // Fixed width makes the interleaved outputs splittable.
        let mut seen = HashSet::new();
        for buf in buffers {
            assert_eq!(buf.len(), PER_THREAD * 4);
            for chunk in buf.chunks(4) {
                let value: u64 = std::str::from_utf8(chunk).unwrap().parse().unwrap();
                assert!(seen.insert(value), "value {value} drawn twice");
            }
        }

        // No duplicates and no gaps.
        let total = (THREADS * PER_THREAD) as u64;
        assert_eq!(seen.len() as u64, total);
        assert!((1..=total).all(|v| seen.contains(&v)));
    }
}

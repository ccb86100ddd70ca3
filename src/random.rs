//! Random source for the pattern engine.
//!
//! Two variants back the operations here: a fast non-cryptographic source
//! (a thread-local [`SmallRng`] seeded from OS entropy once per thread)
//! used for all pattern generation, and the OS secure source used only by
//! [`fill_secure`]. Pattern generation is not an adversarial setting, so
//! the fast path favors speed over unpredictability.

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

thread_local! {
    static FAST_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Returns one raw 64-bit value from the fast source.
#[inline]
pub fn fast_u64() -> u64 {
    FAST_RNG.with(|rng| rng.borrow_mut().next_u64())
}

/// Returns a uniformly distributed value in `[0, n)`.
///
/// Scales a fresh raw draw by widening multiplication and keeping the high
/// bits, so no modulo or division is involved and no bias is introduced
/// by truncation. `n` must be greater than zero.
#[inline]
pub fn uniform_u32(n: u32) -> u32 {
    debug_assert!(n > 0);
    ((u128::from(n) * u128::from(fast_u64())) >> 64) as u32
}

const MANTISSA_MASK: u64 = (1 << 53) - 1;
const MANTISSA_SCALE: f64 = 1.0 / ((1u64 << 53) as f64);

/// Returns a uniformly distributed value in `[0.0, 1.0)`.
///
/// Masks a raw draw to the 53 mantissa bits an `f64` can hold exactly and
/// scales it down.
#[inline]
pub fn uniform_f64() -> f64 {
    (fast_u64() & MANTISSA_MASK) as f64 * MANTISSA_SCALE
}

/// Fills `buf` from the fast source and returns the count filled.
///
/// Consumes one raw draw per 8 bytes; any remaining 1-7 trailing bytes
/// come from the low-order bytes of one more draw.
pub fn fill_fast(buf: &mut [u8]) -> usize {
    let mut chunks = buf.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&fast_u64().to_le_bytes());
    }

    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let mut val = fast_u64();
        for byte in tail.iter_mut() {
            *byte = val as u8;
            val >>= 8;
        }
    }

    buf.len()
}

/// Fills `buf` from the OS secure source and returns the count filled.
///
/// Best effort: when the source is unavailable the buffer is left
/// untouched and 0 is returned, never an error.
pub fn fill_secure(buf: &mut [u8]) -> usize {
    match getrandom::fill(buf) {
        Ok(()) => buf.len(),
        Err(err) => {
            tracing::warn!("secure entropy source unavailable: {err}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_u32_stays_in_range() {
        for _ in 0..10000 {
            assert!(uniform_u32(10) < 10);
        }
    }

    #[test]
    fn test_uniform_u32_covers_all_residues() {
        let mut seen = [false; 10];
        for _ in 0..1000 {
            seen[uniform_u32(10) as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "not all values in [0, 10) were drawn");
    }

    #[test]
    fn test_uniform_u32_of_one_is_zero() {
        for _ in 0..100 {
            assert_eq!(uniform_u32(1), 0);
        }
    }

    #[test]
    fn test_uniform_f64_stays_in_unit_interval() {
        for _ in 0..10000 {
            let v = uniform_f64();
            assert!((0.0..1.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn test_fill_fast_fills_every_length() {
        for len in 0..=17 {
            let mut buf = vec![0u8; len];
            assert_eq!(fill_fast(&mut buf), len);
        }
    }

    #[test]
    fn test_fill_fast_produces_nonzero_output() {
        let mut buf = [0u8; 64];
        fill_fast(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_fill_secure_all_or_nothing() {
        let mut buf = [0u8; 64];
        let n = fill_secure(&mut buf);
        assert!(n == 0 || n == buf.len());
        if n == buf.len() {
            assert!(buf.iter().any(|&b| b != 0));
        }
    }
}

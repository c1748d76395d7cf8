// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounded integer sampling

use rand_core::RngCore;

use super::{unit_f64, SampleBounded};

/// Spans at or above this value are sampled by rejection.
const SCALED_LIMIT_32: u32 = i32::MAX as u32;
const SCALED_LIMIT_64: u64 = i64::MAX as u64;

/// Offset in `[0, span]` by scaling a unit float, for `span < i64::MAX`.
///
/// The unit float may be exactly `1.0`, and `(span + 1) as f64` rounds for
/// large spans; both would overshoot by one, hence the clamp.
#[inline]
fn scaled_offset<R: RngCore + ?Sized>(rng: &mut R, span: u64) -> u64 {
    let offset = (unit_f64(rng) * (span + 1) as f64) as u64;
    offset.min(span)
}

macro_rules! bounded_int_impl {
    ($ty:ty, $uty:ty, $limit:expr, $next:ident) => {
        impl SampleBounded for $ty {
            #[inline]
            fn sample_between<R: RngCore + ?Sized>(rng: &mut R, low: $ty, high: $ty) -> $ty {
                // `$ty` and `$uty` have the same width; the casts are
                // reinterpretations.
                let span = high.wrapping_sub(low) as $uty;
                if span < $limit {
                    let offset = scaled_offset(rng, span as u64) as $uty;
                    low.wrapping_add(offset as $ty)
                } else {
                    loop {
                        let v = rng.$next() as $ty;
                        if low <= v && v <= high {
                            return v;
                        }
                    }
                }
            }
        }
    };
}

bounded_int_impl! { i32, u32, SCALED_LIMIT_32, next_u32 }
bounded_int_impl! { u32, u32, SCALED_LIMIT_32, next_u32 }
bounded_int_impl! { i64, u64, SCALED_LIMIT_64, next_u64 }
bounded_int_impl! { u64, u64, SCALED_LIMIT_64, next_u64 }

/// An index in `[low, high]`, given `low <= high`.
///
/// Uses the `i32` sampler whenever `high` fits, so index draws made by the
/// character sampler and the shuffle match `Rng::next_int_in`.
#[inline]
pub(crate) fn index_between<R: RngCore + ?Sized>(rng: &mut R, low: usize, high: usize) -> usize {
    debug_assert!(low <= high);
    if low == high {
        low
    } else if high <= i32::MAX as usize {
        i32::sample_between(rng, low as i32, high as i32) as usize
    } else {
        u64::sample_between(rng, low as u64, high as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distr::sample_inclusive;
    use crate::XorShiftRng;

    #[test]
    fn test_integers() {
        let mut rng = XorShiftRng::new(0x1234);
        macro_rules! t {
            ($ty:ident) => {{
                let v: &[($ty, $ty)] = &[
                    (0, 10),
                    (10, 127),
                    ($ty::MIN, $ty::MAX),
                    ($ty::MIN, $ty::MIN + 1),
                    ($ty::MAX - 1, $ty::MAX),
                    ($ty::MIN / 2, $ty::MAX / 2 + 1),
                    ($ty::MIN + 1, $ty::MAX),
                    ($ty::MIN, $ty::MAX - 1),
                ];
                for &(low, high) in v.iter() {
                    for _ in 0..1000 {
                        let x = sample_inclusive(&mut rng, low, high).unwrap();
                        assert!(low <= x && x <= high);
                    }
                }
            }};
        }
        t!(i32);
        t!(u32);
        t!(i64);
        t!(u64);
    }

    #[test]
    fn test_both_ends_reachable() {
        let mut rng = XorShiftRng::new(77);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let x = sample_inclusive(&mut rng, -2i32, 1).unwrap();
            seen[(x + 2) as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_scaled_path_draws_one_word() {
        let mut a = XorShiftRng::new(3);
        let mut b = a.clone();
        sample_inclusive(&mut a, 0u64, 1 << 40).unwrap();
        b.next_u32();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejection_path_draws_full_words() {
        // The full i32 range accepts the first word.
        let mut a = XorShiftRng::new(3);
        let mut b = a.clone();
        let x = sample_inclusive(&mut a, i32::MIN, i32::MAX).unwrap();
        assert_eq!(x, b.next_u32() as i32);
        assert_eq!(a, b);

        // The full u64 range accepts the first two words.
        let x = sample_inclusive(&mut a, 0, u64::MAX).unwrap();
        assert_eq!(x, b.next_u64());
    }

    #[test]
    fn test_offset_clamped() {
        struct Max;
        impl RngCore for Max {
            fn next_u32(&mut self) -> u32 {
                u32::MAX
            }
            fn next_u64(&mut self) -> u64 {
                u64::MAX
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0xff)
            }
        }
        // The unit float is exactly 1.0 here.
        assert_eq!(sample_inclusive(&mut Max, 0i32, 9), Ok(9));
        assert_eq!(sample_inclusive(&mut Max, 5u64, (1 << 62) + 5), Ok((1 << 62) + 5));
        assert_eq!(index_between(&mut Max, 0, 25), 25);
    }

    #[test]
    fn test_index_between() {
        let mut rng = XorShiftRng::new(8);
        assert_eq!(index_between(&mut rng, 4, 4), 4);
        for _ in 0..100 {
            let i = index_between(&mut rng, 3, 9);
            assert!((3..=9).contains(&i));
        }
    }
}

// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unit and bounded floating-point sampling

use rand_core::RngCore;

use super::SampleBounded;
use crate::Error;

const SCALE_F64: f64 = 1.0 / i32::MAX as f64;
const SCALE_F32: f32 = 1.0 / i32::MAX as f32;

/// A value in `[0, 1]` from the low 31 bits of one word.
#[inline]
pub(crate) fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32() & i32::MAX as u32) * SCALE_F64
}

/// A value in `[0, 1]` from the low 31 bits of one word.
///
/// `f32` cannot hold 31 bits; the word is rounded to 24 bits of precision.
#[inline]
pub(crate) fn unit_f32<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u32() & i32::MAX as u32) as f32 * SCALE_F32
}

macro_rules! bounded_float_impl {
    ($ty:ty, $unit:ident) => {
        impl SampleBounded for $ty {
            fn check_bounds(low: $ty, high: $ty) -> Result<(), Error> {
                if !(low <= high) {
                    return Err(Error::invalid_argument(
                        "bounded draw requires low <= high",
                    ));
                }
                if !(high - low).is_finite() {
                    return Err(Error::invalid_argument(
                        "bounded draw requires a finite range",
                    ));
                }
                Ok(())
            }

            #[inline]
            fn sample_between<R: RngCore + ?Sized>(rng: &mut R, low: $ty, high: $ty) -> $ty {
                let value = low + $unit(rng) * (high - low);
                // rounding may land one ulp past `high`
                if value > high {
                    high
                } else {
                    value
                }
            }
        }
    };
}

bounded_float_impl! { f32, unit_f32 }
bounded_float_impl! { f64, unit_f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distr::sample_inclusive;
    use crate::XorShiftRng;

    #[test]
    fn test_unit_range() {
        let mut rng = XorShiftRng::new(11);
        for _ in 0..10_000 {
            let x = unit_f64(&mut rng);
            assert!((0.0..=1.0).contains(&x));
            let y = unit_f32(&mut rng);
            assert!((0.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn test_unit_extremes() {
        struct Fixed(u32);
        impl RngCore for Fixed {
            fn next_u32(&mut self) -> u32 {
                self.0
            }
            fn next_u64(&mut self) -> u64 {
                u64::from(self.0)
            }
            fn fill_bytes(&mut self, _: &mut [u8]) {
                unimplemented!()
            }
        }
        // The sign bit is ignored.
        assert_eq!(unit_f64(&mut Fixed(0x8000_0000)), 0.0);
        assert_eq!(unit_f64(&mut Fixed(0)), 0.0);
        assert_eq!(unit_f64(&mut Fixed(u32::MAX)), 1.0);
        assert_eq!(unit_f32(&mut Fixed(0x7fff_ffff)), 1.0);
    }

    #[test]
    fn test_floats() {
        let mut rng = XorShiftRng::new(251);
        let v: &[(f64, f64)] = &[
            (0.0, 100.0),
            (-1e35, -1e25),
            (1e-35, 1e-25),
            (-1e35, 1e35),
            (-1.0, 1.0 + f64::EPSILON),
        ];
        for &(low, high) in v.iter() {
            for _ in 0..1000 {
                let x = sample_inclusive(&mut rng, low, high).unwrap();
                assert!(low <= x && x <= high, "{} not in [{}, {}]", x, low, high);
                let y = sample_inclusive(&mut rng, low as f32, high as f32).unwrap();
                assert!(low as f32 <= y && y <= high as f32);
            }
        }
    }
}

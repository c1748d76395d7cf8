// Copyright 2018 Developers of the Rand project.
// Copyright 2013-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Rng`] trait

use core::ops::RangeInclusive;
use rand_core::RngCore;

use crate::distr::{self, unit_f32, unit_f64, CharClass, Chars, SampleBounded};
use crate::{fill, Error};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec};

/// An automatically-implemented extension trait on [`RngCore`] providing
/// typed and bounded draws.
///
/// Every bounded method takes an **inclusive** interval. Bounded methods
/// return [`Error`] when the interval is empty (`min > max`); such a call
/// leaves the generator untouched. A bounded draw with `min == max` returns
/// `min` without consuming any output.
///
/// The generic pattern is `fn foo<R: Rng + ?Sized>(rng: &mut R)`.
///
/// # Example
///
/// ```
/// use rand_tiny::{CharClass, Rng, XorShiftRng};
///
/// let mut rng = XorShiftRng::new(123);
/// let die = rng.next_int_in(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
///
/// let p = rng.next_double();
/// assert!((0.0..=1.0).contains(&p));
///
/// let c = rng.next_char_in(CharClass::UPPER).unwrap();
/// assert!(c.is_ascii_uppercase());
///
/// assert!(rng.next_long_in(10, 9).is_err());
/// ```
pub trait Rng: RngCore {
    /// Any `i32`: one word, reinterpreted.
    #[inline]
    fn next_int(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// An `i32` in `[0, max]`; fails if `max < 0`.
    #[inline]
    fn next_int_to(&mut self, max: i32) -> Result<i32, Error> {
        distr::sample_inclusive(self, 0, max)
    }

    /// An `i32` in `[min, max]`.
    #[inline]
    fn next_int_in(&mut self, min: i32, max: i32) -> Result<i32, Error> {
        distr::sample_inclusive(self, min, max)
    }

    /// Any `u32`: one word.
    #[inline]
    fn next_uint(&mut self) -> u32 {
        self.next_u32()
    }

    /// A `u32` in `[0, max]`.
    #[inline]
    fn next_uint_to(&mut self, max: u32) -> u32 {
        if max == 0 {
            0
        } else {
            u32::sample_between(self, 0, max)
        }
    }

    /// A `u32` in `[min, max]`.
    #[inline]
    fn next_uint_in(&mut self, min: u32, max: u32) -> Result<u32, Error> {
        distr::sample_inclusive(self, min, max)
    }

    /// Any `i64`: two words, the first one in the low half.
    #[inline]
    fn next_long(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// An `i64` in `[0, max]`; fails if `max < 0`.
    #[inline]
    fn next_long_to(&mut self, max: i64) -> Result<i64, Error> {
        distr::sample_inclusive(self, 0, max)
    }

    /// An `i64` in `[min, max]`.
    #[inline]
    fn next_long_in(&mut self, min: i64, max: i64) -> Result<i64, Error> {
        distr::sample_inclusive(self, min, max)
    }

    /// Any `u64`: two words, the first one in the low half.
    #[inline]
    fn next_ulong(&mut self) -> u64 {
        self.next_u64()
    }

    /// A `u64` in `[0, max]`.
    #[inline]
    fn next_ulong_to(&mut self, max: u64) -> u64 {
        if max == 0 {
            0
        } else {
            u64::sample_between(self, 0, max)
        }
    }

    /// A `u64` in `[min, max]`.
    #[inline]
    fn next_ulong_in(&mut self, min: u64, max: u64) -> Result<u64, Error> {
        distr::sample_inclusive(self, min, max)
    }

    /// An `f64` in `[0, 1]` from the low 31 bits of one word.
    ///
    /// `1.0` is reached by one word value in `2^31`.
    #[inline]
    fn next_double(&mut self) -> f64 {
        unit_f64(self)
    }

    /// An `f64` in `[0, max]`; fails if `max < 0` or `max` is not finite.
    #[inline]
    fn next_double_to(&mut self, max: f64) -> Result<f64, Error> {
        distr::sample_inclusive(self, 0.0, max)
    }

    /// An `f64` in `[min, max]`: `min + next_double() * (max - min)`.
    #[inline]
    fn next_double_in(&mut self, min: f64, max: f64) -> Result<f64, Error> {
        distr::sample_inclusive(self, min, max)
    }

    /// An `f32` in `[0, 1]` from the low 31 bits of one word.
    #[inline]
    fn next_float(&mut self) -> f32 {
        unit_f32(self)
    }

    /// An `f32` in `[0, max]`; fails if `max < 0` or `max` is not finite.
    #[inline]
    fn next_float_to(&mut self, max: f32) -> Result<f32, Error> {
        distr::sample_inclusive(self, 0.0, max)
    }

    /// An `f32` in `[min, max]`: `min + next_float() * (max - min)`.
    #[inline]
    fn next_float_in(&mut self, min: f32, max: f32) -> Result<f32, Error> {
        distr::sample_inclusive(self, min, max)
    }

    /// A value of any [`SampleBounded`] type in `[low, high]`.
    ///
    /// ```
    /// use rand_tiny::{Rng, XorShiftRng};
    ///
    /// let mut rng = XorShiftRng::new(5);
    /// let x: u64 = rng.next_in(10, 20).unwrap();
    /// assert!((10..=20).contains(&x));
    /// ```
    #[inline]
    fn next_in<T: SampleBounded>(&mut self, low: T, high: T) -> Result<T, Error> {
        distr::sample_inclusive(self, low, high)
    }

    /// A value in the inclusive `range`.
    ///
    /// ```
    /// use rand_tiny::{Rng, XorShiftRng};
    ///
    /// let mut rng = XorShiftRng::new(5);
    /// let x = rng.next_in_range(-3..=3).unwrap();
    /// assert!((-3..=3).contains(&x));
    /// ```
    #[inline]
    fn next_in_range<T: SampleBounded>(&mut self, range: RangeInclusive<T>) -> Result<T, Error> {
        let (low, high) = range.into_inner();
        distr::sample_inclusive(self, low, high)
    }

    /// `true` or `false` with (nearly) equal probability.
    ///
    /// Equivalent to `next_int_in(0, 1) == Ok(1)`.
    #[inline]
    fn next_bool(&mut self) -> bool {
        i32::sample_between(self, 0, 1) == 1
    }

    /// A value with `count` random low-order bits and all other bits zero,
    /// i.e. a value in `[0, 2^count - 1]`.
    ///
    /// The bits are the top `count` bits of one word. `count == 0` returns
    /// `0` without drawing. Fails if `count > 32`.
    #[inline]
    fn next_bits(&mut self, count: u32) -> Result<u32, Error> {
        match count {
            0 => Ok(0),
            1..=32 => Ok(self.next_u32() >> (32 - count)),
            _ => {
                debug!("next_bits: count {} exceeds 32", count);
                Err(Error::invalid_argument("bit count must be at most 32"))
            }
        }
    }

    /// A letter or digit, see [`Chars`].
    #[inline]
    fn next_char(&mut self) -> char {
        Chars::default().sample(self)
    }

    /// A character of `class`; fails if `class` is empty.
    #[inline]
    fn next_char_in(&mut self, class: CharClass) -> Result<char, Error> {
        Ok(Chars::new(class)?.sample(self))
    }

    /// Fill `dest` with letters and digits.
    fn fill_chars(&mut self, dest: &mut [char]) {
        fill::fill_chars(self, &Chars::default(), dest)
    }

    /// Fill `dest` with characters of `class`.
    ///
    /// The class is checked before anything is written or drawn.
    fn fill_chars_in(&mut self, dest: &mut [char], class: CharClass) -> Result<(), Error> {
        let chars = Chars::new(class)?;
        fill::fill_chars(self, &chars, dest);
        Ok(())
    }

    /// Fill `dest` with the low byte of one word per byte.
    ///
    /// This is the slow counterpart of [`RngCore::fill_bytes`] on
    /// [`XorShiftRng`](crate::XorShiftRng); the two produce different output.
    fn fill_bytes_per_word(&mut self, dest: &mut [u8]) {
        fill::fill_bytes_per_word(self, dest)
    }

    /// A `String` of `len` characters of `class`.
    ///
    /// ```
    /// use rand_tiny::{CharClass, Rng, XorShiftRng};
    ///
    /// let mut rng = XorShiftRng::new(7);
    /// let s = rng.next_string(8, CharClass::LETTER_OR_DIGIT).unwrap();
    /// assert_eq!(s, "geU1PMum");
    /// ```
    #[cfg(feature = "alloc")]
    fn next_string(&mut self, len: usize, class: CharClass) -> Result<String, Error> {
        let mut buf = vec!['\0'; len];
        self.fill_chars_in(&mut buf, class)?;
        Ok(buf.into_iter().collect())
    }
}

impl<R: RngCore + ?Sized> Rng for R {}

// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounded sampling of numbers and characters.
//!
//! The [`SampleBounded`] trait maps raw generator output onto a closed
//! interval `[low, high]` for `i32`, `u32`, `i64`, `u64`, `f32` and `f64`.
//! [`sample_inclusive`] is the checked entry point used by every bounded
//! method of [`Rng`](crate::Rng).
//!
//! # Integers
//!
//! For a span `high - low` below the signed capacity of the type
//! (`i32::MAX` for 32-bit types, `i64::MAX` for 64-bit types) the value is
//! obtained by scaling a unit float: `low + trunc(unit * (span + 1))`. The unit
//! float has 31 bits of resolution, so for spans approaching that resolution
//! (and for all large 64-bit spans) some values are more likely than others.
//! This approximation is accepted in exchange for a single draw per value.
//!
//! Wider spans are sampled by rejection: full-width values are drawn until
//! one falls inside `[low, high]`. The acceptance probability is at least
//! one half, so the expected number of draws is at most two, with no fixed
//! upper bound.
//!
//! # Floats
//!
//! `low + unit * (high - low)` where `unit` lies in `[0, 1]`; the value `1` is
//! reached by exactly one of the `2^31` possible words.
//!
//! # Characters
//!
//! See [`Chars`] and [`CharClass`].

use core::fmt;
use rand_core::RngCore;

use crate::Error;

mod chars;
mod float;
mod int;

pub use self::chars::{CharClass, Chars};
pub(crate) use self::float::{unit_f32, unit_f64};
pub(crate) use self::int::index_between;

/// Types which may be sampled from a closed interval.
///
/// Implemented for `i32`, `u32`, `i64`, `u64`, `f32` and `f64`. Use
/// [`sample_inclusive`] (or the methods of [`Rng`](crate::Rng)) rather than
/// calling [`SampleBounded::sample_between`] directly: only the former
/// validates the bounds and handles `low == high`.
pub trait SampleBounded: Copy + PartialOrd + fmt::Debug {
    /// Check that `[low, high]` is a valid, non-empty interval.
    fn check_bounds(low: Self, high: Self) -> Result<(), Error> {
        if low <= high {
            Ok(())
        } else {
            Err(Error::invalid_argument("bounded draw requires low <= high"))
        }
    }

    /// Sample a value from `[low, high]`, given `low < high`.
    fn sample_between<R: RngCore + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self;
}

/// Sample a value from the closed interval `[low, high]`.
///
/// Returns an [`ErrorKind::InvalidArgument`](crate::ErrorKind) error if
/// `low > high` (or, for floats, if a bound is NaN or `high - low` is not
/// finite); in that case nothing is drawn from `rng`. If `low == high`, `low`
/// is returned without drawing.
///
/// # Example
///
/// ```
/// use rand_tiny::distr::sample_inclusive;
/// use rand_tiny::XorShiftRng;
///
/// let mut rng = XorShiftRng::new(1);
/// let x = sample_inclusive(&mut rng, -5i64, 5).unwrap();
/// assert!((-5..=5).contains(&x));
/// assert!(sample_inclusive(&mut rng, 5u32, 4).is_err());
/// ```
#[inline]
pub fn sample_inclusive<T, R>(rng: &mut R, low: T, high: T) -> Result<T, Error>
where
    T: SampleBounded,
    R: RngCore + ?Sized,
{
    if let Err(e) = T::check_bounds(low, high) {
        debug!("bounded draw over [{:?}, {:?}] rejected: {}", low, high, e.msg());
        return Err(e);
    }
    if low == high {
        return Ok(low);
    }
    Ok(T::sample_between(rng, low, high))
}

// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! [`SliceRandom`] shuffles slices in place using only bounded index draws,
//! so a shuffle made with [`XorShiftRng`](crate::XorShiftRng) is as
//! reproducible as the generator itself.

use rand_core::RngCore;

use crate::distr::index_between;

/// Extension trait on slices, providing random mutation methods.
///
/// This trait is implemented on all `[T]` slice types.
pub trait SliceRandom {
    /// Shuffle a mutable slice in place.
    ///
    /// For each position `i` from the front, the element at `i` is swapped
    /// with the element at a uniformly drawn index in `[i, len - 1]`. Every
    /// position but the last consumes the same draw as
    /// [`Rng::next_int_in(i, len - 1)`](crate::Rng::next_int_in); the last
    /// position consumes nothing.
    ///
    /// Complexity is `O(n)` where `n` is the length of the slice.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_tiny::seq::SliceRandom;
    /// use rand_tiny::XorShiftRng;
    ///
    /// let mut rng = XorShiftRng::new(1);
    /// let mut y = [1, 2, 3, 4, 5];
    /// y.shuffle(&mut rng);
    /// y.sort();
    /// assert_eq!(y, [1, 2, 3, 4, 5]);
    /// ```
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: RngCore + ?Sized;
}

impl<T> SliceRandom for [T] {
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: RngCore + ?Sized,
    {
        let len = self.len();
        if len <= 1 {
            return;
        }
        let last = len - 1;
        for i in 0..len {
            let j = index_between(rng, i, last);
            self.swap(i, j);
        }
    }
}

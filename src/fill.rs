// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Helper functions for filling buffers.
//!
//! Two byte-filling strategies are provided and they are **not**
//! interchangeable: [`fill_bytes_via_u32_le`] consumes one word per four
//! bytes, [`fill_bytes_per_word`] one word per byte. For the same seed they
//! produce different buffers; each is deterministic on its own.
//!
//! Words are split into bytes with `u32::to_le_bytes` over exact four-byte
//! chunks, so the layout is identical on every target and no unchecked
//! writes are needed.

use rand_core::RngCore;

use crate::distr::Chars;

/// Fill `dest` four bytes at a time.
///
/// While at least four bytes remain, one `next_u32` word is written in
/// little-endian order. Each of the remaining 0-3 bytes then takes the low
/// byte of its own word.
///
/// This is the `fill_bytes` implementation of
/// [`XorShiftRng`](crate::XorShiftRng); other [`RngCore`] implementations
/// may use it too.
///
/// ```
/// use rand_tiny::XorShiftRng;
/// use rand_tiny::fill::fill_bytes_via_u32_le;
///
/// let mut rng = XorShiftRng::new(42);
/// let mut buf = [0u8; 6];
/// fill_bytes_via_u32_le(&mut rng, &mut buf);
/// assert_eq!(buf, [55, 3, 203, 233, 118, 252]);
/// ```
pub fn fill_bytes_via_u32_le<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(4);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&rng.next_u32().to_le_bytes());
    }
    for byte in chunks.into_remainder() {
        *byte = rng.next_u32() as u8;
    }
}

/// Fill `dest` with the low byte of one `next_u32` word per byte.
pub fn fill_bytes_per_word<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    for byte in dest {
        *byte = rng.next_u32() as u8;
    }
}

/// Fill `dest` with characters sampled by `chars`.
pub fn fill_chars<R: RngCore + ?Sized>(rng: &mut R, chars: &Chars, dest: &mut [char]) {
    for c in dest {
        *c = chars.sample(rng);
    }
}

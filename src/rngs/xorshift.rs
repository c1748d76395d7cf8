// Copyright 2018 Developers of the Rand project.
// Copyright 2013 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 32-bit xorshift generator

use core::num::Wrapping as w;
use rand_core::{impls, RngCore, SeedableRng};

use crate::fill;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Added to the state before every xorshift step. `0` is a fixed point of
/// the plain xorshift recurrence; an odd increment never rests there.
const INCREMENT: u32 = 23_457_013;

/// XOR-ed into every output word, moving the sign bit of the signed view.
const SIGN_FLIP: u32 = 0x8000_0000;

/// Multiplier applied to the clock reading by [`XorShiftRng::from_clock`].
#[cfg(feature = "std")]
const CLOCK_SEED_MUL: u64 = 12_347;

/// A 32-bit Xorshift[1] random number generator with an additive step.
///
/// Each step adds an odd constant to the single `u32` state word, then applies
/// the `13, 17, 5` shift-xor triple. The output word is the new state with its
/// top bit flipped. Construction mixes the seed with one discarded step, so the
/// first visible output does not mirror the seed's bit pattern.
///
/// The generator is a plain value: cloning forks an independent stream and
/// no state is shared between instances. It has no internal locking; use one
/// instance per thread.
///
/// The Xorshift algorithm is **not suitable for cryptographic purposes** but
/// is very fast. Never use it to produce keys, tokens or passwords.
///
/// Output is deterministic and portable: the same seed yields the same
/// sequence on every platform.
///
/// # Example
///
/// ```
/// use rand_tiny::{Rng, XorShiftRng};
///
/// let mut rng = XorShiftRng::new(123);
/// assert_eq!(rng.next_int(), -835973903);
///
/// let mut fork = rng.clone();
/// assert_eq!(rng.next_int(), fork.next_int());
/// ```
///
/// [1]: Marsaglia, George (July 2003). ["Xorshift
/// RNGs"](https://www.jstatsoft.org/v08/i14/paper). *Journal of
/// Statistical Software*. Vol. 8 (Issue 14).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XorShiftRng {
    state: w<u32>,
}

impl XorShiftRng {
    /// Construct a generator from a 32-bit seed.
    ///
    /// Every seed, `0` included, is valid.
    pub fn new(seed: u32) -> XorShiftRng {
        let mut rng = XorShiftRng { state: w(seed) };
        rng.step();
        rng
    }

    /// Construct a generator seeded from the system clock.
    ///
    /// The seed is the current time in nanoseconds multiplied by a fixed odd
    /// constant. Two generators created in quick succession may therefore
    /// receive related seeds, and the seed is trivially guessable: this is a
    /// convenience for simulations and tests, **never** a source of secrets.
    #[cfg(feature = "std")]
    pub fn from_clock() -> XorShiftRng {
        use std::time::{SystemTime, UNIX_EPOCH};

        let nanos = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_nanos() as u64,
            Err(e) => {
                warn!("XorShiftRng: system clock before UNIX epoch: {}", e);
                e.duration().as_nanos() as u64
            }
        };
        let seed = nanos.wrapping_mul(CLOCK_SEED_MUL) as u32;
        trace!("XorShiftRng: seeding from clock with {:#010x}", seed);
        XorShiftRng::new(seed)
    }

    #[inline(always)]
    fn step(&mut self) -> u32 {
        let mut x = self.state + w(INCREMENT);
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x.0 ^ SIGN_FLIP
    }
}

impl From<u32> for XorShiftRng {
    fn from(seed: u32) -> Self {
        XorShiftRng::new(seed)
    }
}

/// Signed seeds are reinterpreted bit for bit.
impl From<i32> for XorShiftRng {
    fn from(seed: i32) -> Self {
        XorShiftRng::new(seed as u32)
    }
}

#[cfg(feature = "std")]
impl Default for XorShiftRng {
    /// Equivalent to [`XorShiftRng::from_clock`].
    fn default() -> Self {
        XorShiftRng::from_clock()
    }
}

impl RngCore for XorShiftRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    /// Two consecutive words, the first one in the low half.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    /// One word per four bytes, written little-endian; see
    /// [`fill::fill_bytes_via_u32_le`].
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill::fill_bytes_via_u32_le(self, dest)
    }
}

impl SeedableRng for XorShiftRng {
    type Seed = [u8; 4];

    /// The seed is read as a little-endian `u32`, so
    /// `from_seed(s)` equals `new(u32::from_le_bytes(s))`.
    fn from_seed(seed: Self::Seed) -> Self {
        XorShiftRng::new(u32::from_le_bytes(seed))
    }
}

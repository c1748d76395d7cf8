// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random number generators.
//!
//! The crate ships a single generator, [`XorShiftRng`]: one `u32` of state,
//! very cheap to construct and to clone, reproducible from its seed, and
//! **not** cryptographically secure.
//!
//! Any generator implementing [`rand_core::RngCore`] may be used with the
//! [`Rng`](crate::Rng) extension trait; the golden sequences documented in
//! this crate are specific to [`XorShiftRng`].

mod xorshift;

pub use self::xorshift::XorShiftRng;

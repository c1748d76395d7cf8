// Copyright 2018 Developers of the Rand project.
// Copyright 2013-2017 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A tiny seedable generator with bounded draws.
//!
//! `rand_tiny` provides:
//!
//! -   [`XorShiftRng`], a 32-bit xorshift generator with one word of state,
//!     implementing [`RngCore`] and [`SeedableRng`]
//! -   the [`Rng`] extension trait, available on every [`RngCore`], with
//!     full-range and bounded draws of `i32`, `u32`, `i64`, `u64`, `f32`,
//!     `f64`, `bool` and ASCII `char`s
//! -   [`CharClass`] and [`Chars`] for sampling characters from a union of
//!     upper case letters, lower case letters, digits and symbols
//! -   [`fill`] helpers and [`seq::SliceRandom::shuffle`]
//!
//! # Quick start
//!
//! ```
//! use rand_tiny::{CharClass, Rng, XorShiftRng};
//!
//! let mut rng = XorShiftRng::new(123);
//! assert_eq!(rng.next_int(), -835973903);
//!
//! let roll = rng.next_int_in(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let mut buf = [0u8; 16];
//! rand_tiny::RngCore::fill_bytes(&mut rng, &mut buf);
//!
//! let mut word = ['\0'; 5];
//! rng.fill_chars_in(&mut word, CharClass::LOWER).unwrap();
//! ```
//!
//! # Bounds and errors
//!
//! All bounded draws take an inclusive interval `[min, max]`. An empty
//! interval (`min > max`) or an empty [`CharClass`] yields an [`Error`] of
//! kind [`ErrorKind::InvalidArgument`] and leaves the generator untouched.
//! `min == max` returns `min` without drawing.
//!
//! # Reproducibility
//!
//! Given a seed, every method of [`Rng`] and [`XorShiftRng`] produces the same
//! values on every platform and in every patch release of this crate.
//!
//! # Cryptographic security
//!
//! Nothing in this crate is suitable for cryptographic purposes. The
//! generator's state is a single 32-bit word and is easily recovered from its
//! output; [`XorShiftRng::from_clock`] seeds are guessable. Use a CSPRNG for
//! keys, tokens and passwords.
//!
//! # Thread safety
//!
//! [`XorShiftRng`] is `Send` and `Sync` but has no interior mutability: each
//! thread should own its own instance (e.g. a `clone()` or a differently
//! seeded generator).
//!
//! # Crate features
//!
//! -   `std` (default): `std::error::Error` for [`Error`], clock seeding
//! -   `alloc` (implied by `std`): [`Rng::next_string`]
//! -   `serde`: (de)serialization of [`XorShiftRng`] and [`CharClass`]
//! -   `log`: diagnostic logging through the `log` crate
//! -   `os_rng`: `SeedableRng::from_os_rng`

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![no_std]
#![allow(clippy::float_cmp, clippy::neg_cmp_op_on_partial_ord)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod log_macros;

pub mod distr;
mod error;
pub mod fill;
mod rng;
pub mod rngs;
pub mod seq;

pub use rand_core::{self, RngCore, SeedableRng};

pub use crate::distr::{CharClass, Chars};
pub use crate::error::{Error, ErrorKind};
pub use crate::rng::Rng;
pub use crate::rngs::XorShiftRng;

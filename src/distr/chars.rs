// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sampling of ASCII characters from a union of character classes

use bitflags::bitflags;
use rand_core::RngCore;

use super::index_between;
use crate::Error;

bitflags! {
    /// A union of ASCII character classes.
    ///
    /// ```
    /// use rand_tiny::CharClass;
    ///
    /// let class = CharClass::UPPER | CharClass::DIGIT;
    /// assert!(CharClass::LETTER_OR_DIGIT.contains(class));
    /// assert_eq!(CharClass::default(), CharClass::LETTER_OR_DIGIT);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct CharClass: u8 {
        /// `A-Z`
        const UPPER = 0b0001;
        /// `a-z`
        const LOWER = 0b0010;
        /// `0-9`
        const DIGIT = 0b0100;
        /// The 32 printable ASCII punctuation characters,
        /// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
        const SYMBOL = 0b1000;
        /// Upper and lower case letters.
        const LETTER = Self::UPPER.bits() | Self::LOWER.bits();
        /// Letters and digits.
        const LETTER_OR_DIGIT = Self::LETTER.bits() | Self::DIGIT.bits();
        /// Every class.
        const ANY = Self::LETTER_OR_DIGIT.bits() | Self::SYMBOL.bits();
    }
}

impl Default for CharClass {
    fn default() -> Self {
        CharClass::LETTER_OR_DIGIT
    }
}

const DIGITS: &[u8] = b"0123456789";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const NONE: &[u8] = &[];

// Draw order of the classes; part of the value-stability contract.
const CLASSES: [(CharClass, &[u8]); 4] = [
    (CharClass::DIGIT, DIGITS),
    (CharClass::UPPER, UPPER),
    (CharClass::LOWER, LOWER),
    (CharClass::SYMBOL, SYMBOLS),
];

/// Samples an ASCII `char` from a [`CharClass`].
///
/// A class is picked first, uniformly among the classes present in the
/// union, then a character uniformly within that class. Characters of small
/// classes are thus individually more likely: with
/// [`CharClass::LETTER_OR_DIGIT`] each digit has probability `1/30` while each
/// letter has probability `1/78`.
///
/// Constructing a `Chars` validates the class once; sampling cannot fail.
///
/// # Example
///
/// ```
/// use rand_tiny::{CharClass, Chars, XorShiftRng};
///
/// let mut rng = XorShiftRng::new(7);
/// let hex_ish = Chars::new(CharClass::DIGIT | CharClass::UPPER).unwrap();
/// let c = hex_ish.sample(&mut rng);
/// assert!(c.is_ascii_digit() || c.is_ascii_uppercase());
///
/// assert!(Chars::new(CharClass::empty()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chars {
    class: CharClass,
    alphabets: [&'static [u8]; 4],
    len: usize,
}

impl Chars {
    /// Create a sampler over `class`.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind) if `class`
    /// selects none of the four classes.
    pub fn new(class: CharClass) -> Result<Chars, Error> {
        let mut alphabets = [NONE; 4];
        let mut len = 0;
        for &(flag, alphabet) in CLASSES.iter() {
            if class.contains(flag) {
                alphabets[len] = alphabet;
                len += 1;
            }
        }
        if len == 0 {
            debug!("Chars: class {:?} selects no characters", class);
            return Err(Error::invalid_argument("character class selects no characters"));
        }
        Ok(Chars {
            class,
            alphabets,
            len,
        })
    }

    /// The class this sampler draws from.
    pub fn class(&self) -> CharClass {
        self.class
    }

    /// Sample a character.
    ///
    /// Draws one word to pick the class (none if the union holds a single
    /// class) and one word to pick the character.
    #[inline]
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> char {
        let alphabet = self.alphabets[index_between(rng, 0, self.len - 1)];
        char::from(alphabet[index_between(rng, 0, alphabet.len() - 1)])
    }
}

impl Default for Chars {
    /// A sampler over [`CharClass::LETTER_OR_DIGIT`].
    fn default() -> Self {
        Chars {
            class: CharClass::LETTER_OR_DIGIT,
            alphabets: [DIGITS, UPPER, LOWER, NONE],
            len: 3,
        }
    }
}

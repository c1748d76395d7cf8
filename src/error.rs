// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error kind which can be matched over.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A precondition on the arguments of a draw was violated, e.g.
    /// `min > max` for a bounded draw or an empty character class.
    InvalidArgument,
}

impl ErrorKind {
    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
        }
    }
}

/// Error type of the bounded draws.
///
/// This is a relatively simple error type, designed for compatibility with and
/// without the Rust `std` library. It embeds a "kind" code and a message
/// (static string only). A draw which returns an error has not consumed any
/// output of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: &'static str,
}

impl Error {
    /// Create a new instance, with specified kind and a message.
    pub const fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error { kind, msg }
    }

    pub(crate) const fn invalid_argument(msg: &'static str) -> Self {
        Error::new(ErrorKind::InvalidArgument, msg)
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn msg(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RNG error [{}]: {}", self.kind.description(), self.msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_argument("low > high");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.msg(), "low > high");
        #[cfg(feature = "alloc")]
        {
            use alloc::string::ToString;
            assert_eq!(
                err.to_string(),
                "RNG error [invalid argument]: low > high"
            );
        }
    }
}

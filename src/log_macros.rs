#![allow(unused)]

// Diagnostic events go through `log` only when the "log" feature is enabled;
// otherwise the arguments are type-checked and discarded.

macro_rules! trace { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::trace!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

macro_rules! debug { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::debug!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

macro_rules! warn { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::warn!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

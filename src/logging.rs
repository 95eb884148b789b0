//! Logging front-end for the library.
//!
//! Firmware builds log through `defmt`, host builds may opt into the `log`
//! facade. Without either feature the macros expand to nothing.

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, info, trace};

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub(crate) use log::{debug, info, trace};

#[cfg(not(any(feature = "defmt", feature = "log")))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! info {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use debug;
    pub(crate) use info;
    pub(crate) use trace;
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
pub(crate) use noop::{debug, info, trace};

//! Error type for recoverable engine failures.
//!
//! Programming errors (out-of-range history index, table binding outside the
//! grid) panic instead. Degenerate scaling ranges are logged, not returned.

use core::fmt;

/// Recoverable engine errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The overlay already holds its maximum number of components.
    RegistryFull,
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::RegistryFull => f.write_str("component registry is full"),
        }
    }
}

impl core::error::Error for Error {}

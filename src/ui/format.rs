//! Text forms of sizes, without floats.
//!
//! `UsSize(15)` prints `7.5`, `UsSize(14)` prints `7`,
//! `Millimeters(1730)` prints `17.30`. EU sizes are bare integers and need
//! no wrapper.

use core::fmt;

/// US size stored as half-size units (size * 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsSize(pub u8);

impl fmt::Display for UsSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}

/// Length stored in hundredths of a millimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Millimeters(pub u32);

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

//! Firmware error type.
//!
//! The sizing math and state machine cannot fail; only the hardware
//! layer can. We avoid `alloc` - all variants are fieldless.
//! Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;

/// Errors from the display / host-integration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// SSD1306 did not accept the init sequence over I²C.
    DisplayInit,

    /// Sending the frame buffer to the display failed.
    DisplayFlush,

    /// Switching the panel on or off failed.
    DisplayPower,
}

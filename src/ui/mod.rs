//! User interface subsystem - OLED display + six physical buttons.
//!
//! The UI task owns an [`app::App`] state machine that reacts to button
//! events and renders the current view on the SSD1306 OLED.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 6 tactile switches (UP, DOWN, LEFT, RIGHT, OK, BACK)
//!   with debouncing and long-press / auto-repeat detection

pub mod app;
pub mod format;
pub mod input_logic;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;

/// Logical keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    /// Confirm / select.
    Ok,
    Back,
}

/// What happened to the key.
///
/// Only `Short` and `Repeat` drive the screens; the rest exist so the
/// button driver can report the full press lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKind {
    /// Debounced press edge.
    Press,
    /// Released before the long-press threshold.
    Short,
    /// Held past the long-press threshold.
    Long,
    /// Periodic event while still held after `Long`.
    Repeat,
    /// Release edge.
    Release,
}

/// One discrete event from the button driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputKind,
}

impl InputEvent {
    pub const fn new(key: InputKey, kind: InputKind) -> Self {
        Self { key, kind }
    }

    pub const fn short(key: InputKey) -> Self {
        Self::new(key, InputKind::Short)
    }
}

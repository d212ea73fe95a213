//! Ring sizer core.
//!
//! Converts between a circle radius measured on the panel (pixels) and
//! ring sizes: inner diameter, US half sizes and EU circumference, using
//! integer fixed-point math only. A five-screen state machine drives it
//! from button events.
//!
//! Everything here except `ui::buttons`, `ui::display` and `error` is
//! pure logic that builds and tests on the host:
//!
//! Usage: `cargo test`
//!
//! The embedded binary (`--features embedded`) adds the Embassy tasks,
//! the SSD1306 renderer and the button driver on top of the same modules.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod sizing;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod error;

pub use sizing::{Scale, SizeReadout};
pub use ui::app::{App, Outcome, Screen, View};
pub use ui::{InputEvent, InputKey, InputKind};

//! Application-wide constants and compile-time configuration.
//!
//! All scale factors, defaults, clamps, and input timing live here so
//! they can be tuned in one place. Nothing is persisted across runs.

// Sizing

/// Default display scale in micrometers per pixel.
///
/// A 1.4" 128×64 panel has a diagonal of ~35.56 mm, so the width is
/// `35.56 * 2 / sqrt(5) ≈ 31.80 mm` and one pixel is `31.80 / 128 ≈ 0.248 mm`.
pub const UM_PER_PX_DEFAULT: u32 = 248;

/// π scaled by 10^6 (3.141593).
pub const PI_X1000000: u64 = 3_141_593;

// Screen defaults

/// Circle radius (px) shown when Measure is first entered.
pub const DEFAULT_RADIUS_PX: u32 = 22;

/// Smallest radius the measure circle can shrink to (px).
pub const MIN_RADIUS_PX: u32 = 1;

/// Prompt US value on entering Display (half-size units, 14 = size 7).
pub const DEFAULT_PROMPT_US_X2: u8 = 14;

/// Prompt EU value on entering Display (mm circumference).
pub const DEFAULT_PROMPT_EU_MM: u32 = 54;

/// Editable US range on the prompt, inclusive (3.0 ..= 15.0).
pub const PROMPT_US_X2_MIN: u8 = 6;
pub const PROMPT_US_X2_MAX: u8 = 30;

/// Editable EU range on the prompt, inclusive (mm).
pub const PROMPT_EU_MM_MIN: u32 = 40;
pub const PROMPT_EU_MM_MAX: u32 = 80;

/// Number of entries in the main menu.
pub const MENU_ITEM_COUNT: usize = 2;

// Input

/// Depth of the button → UI event channel.
pub const INPUT_QUEUE_DEPTH: usize = 8;

/// Bounded wait on the input channel before an idle tick (ms).
pub const INPUT_WAIT_TIMEOUT_MS: u64 = 100;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// Hold time after which a press becomes Long instead of Short (ms).
pub const LONG_PRESS_MS: u64 = 300;

/// Interval between Repeat events while a button stays held (ms).
pub const REPEAT_INTERVAL_MS: u64 = 150;

// GPIO pin assignments (nRF52840-DK + external buttons)
//
// Pins are selected in `main.rs`; adjust for your board.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button LEFT    → P0.24
//   Button RIGHT   → P0.25
//   Button OK      → P0.02
//   Button BACK    → P0.03
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

// Display geometry (SSD1306 128×64)

/// Horizontal center of the panel (px).
pub const DISPLAY_CENTER_X: i32 = 64;

/// Vertical center of the panel (px).
pub const DISPLAY_CENTER_Y: i32 = 32;

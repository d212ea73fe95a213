//! Screen state machine.
//!
//! ```text
//!            ┌──── OK (Measure) ───→ Measure ── OK ──→ MeasureResult
//!   Menu ────┤                         │                    │
//!    │       └──── OK (Display) ──→ DisplayPrompt ── OK ──→ DisplayCircle
//!   BACK                         BACK / OK on the last screen of each
//!    ↓                           branch returns to Menu
//!   exit
//! ```
//!
//! The renderer never reads the state directly; it asks for a [`View`].

use crate::config::{
    DEFAULT_PROMPT_EU_MM, DEFAULT_PROMPT_US_X2, DEFAULT_RADIUS_PX, MENU_ITEM_COUNT,
    MIN_RADIUS_PX, PROMPT_EU_MM_MAX, PROMPT_EU_MM_MIN, PROMPT_US_X2_MAX, PROMPT_US_X2_MIN,
};
use crate::sizing::{self, Scale, SizeReadout};
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::{InputEvent, InputKey, InputKind};

/// Main menu entries, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Measure,
    Display,
}

impl MenuItem {
    pub const ALL: [MenuItem; MENU_ITEM_COUNT] = [MenuItem::Measure, MenuItem::Display];

    pub fn at(cursor: usize) -> Self {
        match cursor {
            0 => MenuItem::Measure,
            _ => MenuItem::Display,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            MenuItem::Measure => 0,
            MenuItem::Display => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::Measure => "Measure",
            MenuItem::Display => "Display",
        }
    }
}

/// Which unit the Display prompt edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    Us,
    Eu,
}

impl DisplayMode {
    pub const fn toggled(self) -> Self {
        match self {
            DisplayMode::Us => DisplayMode::Eu,
            DisplayMode::Eu => DisplayMode::Us,
        }
    }
}

/// Editable size shared by the Display prompt and circle screens.
///
/// Both values are kept so switching units does not lose the other one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prompt {
    pub mode: DisplayMode,
    /// US size * 2, in `PROMPT_US_X2_MIN ..= PROMPT_US_X2_MAX`.
    pub us_x2: u8,
    /// EU size in mm, in `PROMPT_EU_MM_MIN ..= PROMPT_EU_MM_MAX`.
    pub eu_mm: u32,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Us,
            us_x2: DEFAULT_PROMPT_US_X2,
            eu_mm: DEFAULT_PROMPT_EU_MM,
        }
    }
}

impl Prompt {
    /// Value of the active unit (half-size units for US, mm for EU).
    pub fn value(&self) -> u32 {
        match self.mode {
            DisplayMode::Us => u32::from(self.us_x2),
            DisplayMode::Eu => self.eu_mm,
        }
    }

    pub fn increment(&mut self) {
        match self.mode {
            DisplayMode::Us => {
                if self.us_x2 < PROMPT_US_X2_MAX {
                    self.us_x2 += 1;
                }
            }
            DisplayMode::Eu => {
                if self.eu_mm < PROMPT_EU_MM_MAX {
                    self.eu_mm += 1;
                }
            }
        }
    }

    pub fn decrement(&mut self) {
        match self.mode {
            DisplayMode::Us => {
                if self.us_x2 > PROMPT_US_X2_MIN {
                    self.us_x2 -= 1;
                }
            }
            DisplayMode::Eu => {
                if self.eu_mm > PROMPT_EU_MM_MIN {
                    self.eu_mm -= 1;
                }
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Diameter the active value stands for.
    pub fn diameter(&self) -> u32 {
        match self.mode {
            DisplayMode::Us => sizing::diameter_from_us_size(self.us_x2),
            DisplayMode::Eu => sizing::diameter_from_circumference(self.eu_mm),
        }
    }

    /// Up/Down/Left/Right editing, identical on both Display screens.
    /// Returns `false` for keys that are not edits.
    fn edit(&mut self, key: InputKey) -> bool {
        match key {
            InputKey::Up => self.increment(),
            InputKey::Down => self.decrement(),
            InputKey::Left | InputKey::Right => self.toggle_mode(),
            InputKey::Ok | InputKey::Back => return false,
        }
        true
    }
}

/// Active screen, carrying only the data that screen uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Menu { cursor: usize },
    /// Live circle; the radius lives in [`App`] so it survives re-entry.
    Measure,
    /// Snapshot taken when the measurement was confirmed.
    MeasureResult(SizeReadout),
    DisplayPrompt(Prompt),
    DisplayCircle(Prompt),
}

/// Result of feeding one event to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Event kind is not handled; nothing changed.
    Ignored,
    /// Event was consumed; the screen should be redrawn.
    Redraw,
    /// BACK on the menu: leave the main loop.
    Exit,
}

/// What the renderer needs to draw the current screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Menu {
        cursor: usize,
    },
    Measure {
        radius_px: u32,
        readout: SizeReadout,
    },
    MeasureResult {
        radius_px: u32,
        readout: SizeReadout,
    },
    DisplayPrompt {
        mode: DisplayMode,
        value: u32,
    },
    DisplayCircle {
        mode: DisplayMode,
        value: u32,
        radius_px: u32,
        readout: SizeReadout,
    },
}

/// The whole application state. One instance, owned by the UI loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct App {
    scale: Scale,
    screen: Screen,
    radius_px: u32,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Scale::DEFAULT)
    }
}

impl App {
    pub fn new(scale: Scale) -> Self {
        Self {
            scale,
            screen: Screen::Menu { cursor: 0 },
            radius_px: DEFAULT_RADIUS_PX,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Current measure radius (px).
    pub fn radius_px(&self) -> u32 {
        self.radius_px
    }

    /// Apply one input event.
    pub fn apply_input(&mut self, event: InputEvent) -> Outcome {
        if !matches!(event.kind, InputKind::Short | InputKind::Repeat) {
            return Outcome::Ignored;
        }

        let key = event.key;
        match self.screen {
            Screen::Menu { cursor } => match key {
                InputKey::Up => self.screen = Screen::Menu { cursor: select_prev(cursor) },
                InputKey::Down => {
                    self.screen = Screen::Menu {
                        cursor: select_next(cursor, MENU_ITEM_COUNT),
                    }
                }
                InputKey::Ok => self.enter(MenuItem::at(cursor)),
                InputKey::Back => return Outcome::Exit,
                InputKey::Left | InputKey::Right => {}
            },

            Screen::Measure => match key {
                InputKey::Up => self.radius_px = self.radius_px.saturating_add(1),
                InputKey::Down => {
                    self.radius_px = self.radius_px.saturating_sub(1).max(MIN_RADIUS_PX)
                }
                InputKey::Ok => {
                    let readout = SizeReadout::from_radius(self.scale, self.radius_px);
                    self.screen = Screen::MeasureResult(readout);
                }
                InputKey::Back => self.go_menu(MenuItem::Measure),
                InputKey::Left | InputKey::Right => {}
            },

            Screen::MeasureResult(_) => {
                if matches!(key, InputKey::Ok | InputKey::Back) {
                    self.go_menu(MenuItem::Measure);
                }
            }

            Screen::DisplayPrompt(mut prompt) => {
                if prompt.edit(key) {
                    self.screen = Screen::DisplayPrompt(prompt);
                } else if key == InputKey::Ok {
                    self.screen = Screen::DisplayCircle(prompt);
                } else {
                    self.go_menu(MenuItem::Display);
                }
            }

            Screen::DisplayCircle(mut prompt) => {
                if prompt.edit(key) {
                    self.screen = Screen::DisplayCircle(prompt);
                } else {
                    self.go_menu(MenuItem::Display);
                }
            }
        }

        Outcome::Redraw
    }

    /// Values for the renderer, derived on demand.
    pub fn view(&self) -> View {
        match self.screen {
            Screen::Menu { cursor } => View::Menu { cursor },
            Screen::Measure => View::Measure {
                radius_px: self.radius_px,
                readout: SizeReadout::from_radius(self.scale, self.radius_px),
            },
            Screen::MeasureResult(readout) => View::MeasureResult {
                radius_px: sizing::radius_px_from_diameter(self.scale, readout.dia_x100),
                readout,
            },
            Screen::DisplayPrompt(prompt) => View::DisplayPrompt {
                mode: prompt.mode,
                value: prompt.value(),
            },
            Screen::DisplayCircle(prompt) => {
                let dia_x100 = prompt.diameter();
                View::DisplayCircle {
                    mode: prompt.mode,
                    value: prompt.value(),
                    radius_px: sizing::radius_px_from_diameter(self.scale, dia_x100),
                    readout: SizeReadout::from_diameter(dia_x100),
                }
            }
        }
    }

    fn enter(&mut self, item: MenuItem) {
        self.screen = match item {
            MenuItem::Measure => Screen::Measure,
            // Previous prompt edits are discarded on every entry.
            MenuItem::Display => Screen::DisplayPrompt(Prompt::default()),
        };
    }

    fn go_menu(&mut self, from: MenuItem) {
        self.screen = Screen::Menu { cursor: from.index() };
    }
}

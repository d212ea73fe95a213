//! SSD1306 OLED display wrapper and per-screen rendering.
//!
//! Layout on the 128×64 panel:
//!
//! ```text
//! Menu            title at the top, two items with an inverted box on the cursor
//! Measure/Result  circle at (64, 32), "D 17.30 mm" / "US 7" / "EU 54" stacked
//! DisplayPrompt   "Display", unit label, value in the large font
//! DisplayCircle   circle for the chosen size + the same stacked readout
//! ```

use core::fmt::Write;

use crate::config::{DISPLAY_CENTER_X, DISPLAY_CENTER_Y};
use crate::error::Error;
use crate::sizing::SizeReadout;
use crate::ui::app::{DisplayMode, MenuItem, View};
use crate::ui::format::{Millimeters, UsSize};
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayFlush)?;
    Ok(display)
}

/// Draw `view` into the frame buffer and push it to the panel.
pub fn render<I2C>(display: &mut Display<I2C>, view: &View) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    draw_view(display, view);
    display.flush().map_err(|_| Error::DisplayFlush)
}

/// Blank the panel and switch it off before the UI loop ends.
pub fn shutdown<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayFlush)?;
    display.set_display_on(false).map_err(|_| Error::DisplayPower)
}

fn text_style(
    font: &'static MonoFont<'static>,
    color: BinaryColor,
) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new().font(font).text_color(color).build()
}

fn small() -> MonoTextStyle<'static, BinaryColor> {
    text_style(&FONT_6X10, BinaryColor::On)
}

fn large() -> MonoTextStyle<'static, BinaryColor> {
    text_style(&FONT_9X15_BOLD, BinaryColor::On)
}

/// Centered text; `y` is the baseline.
fn centered<D>(target: &mut D, text: &str, y: i32, style: MonoTextStyle<'static, BinaryColor>)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let _ = Text::with_alignment(text, Point::new(DISPLAY_CENTER_X, y), style, Alignment::Center)
        .draw(target);
}

/// Render a [`View`] onto any monochrome draw target.
pub fn draw_view<D>(target: &mut D, view: &View)
where
    D: DrawTarget<Color = BinaryColor>,
{
    match *view {
        View::Menu { cursor } => draw_menu(target, cursor),
        View::Measure { radius_px, readout } | View::MeasureResult { radius_px, readout } => {
            draw_circle(target, radius_px);
            draw_center_stack(target, &readout);
        }
        View::DisplayPrompt { mode, value } => draw_prompt(target, mode, value),
        View::DisplayCircle { radius_px, readout, .. } => {
            draw_circle(target, radius_px);
            draw_center_stack(target, &readout);
        }
    }
}

fn draw_menu<D>(target: &mut D, cursor: usize)
where
    D: DrawTarget<Color = BinaryColor>,
{
    centered(target, "Ring Sizer", 18, large());

    for item in MenuItem::ALL {
        let y = 32 + item.index() as i32 * 14;
        if item.index() == cursor {
            let _ = Rectangle::new(Point::new(26, y - 10), Size::new(76, 12))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target);
            centered(target, item.label(), y, text_style(&FONT_6X10, BinaryColor::Off));
        } else {
            centered(target, item.label(), y, small());
        }
    }
}

fn draw_circle<D>(target: &mut D, radius_px: u32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = Point::new(DISPLAY_CENTER_X, DISPLAY_CENTER_Y);
    let _ = Circle::with_center(center, radius_px.saturating_mul(2).saturating_add(1))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target);
}

fn draw_center_stack<D>(target: &mut D, readout: &SizeReadout)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: heapless::String<20> = heapless::String::new();

    let _ = write!(line, "D {} mm", Millimeters(readout.dia_x100));
    centered(target, &line, 30, small());

    line.clear();
    let _ = write!(line, "US {}", UsSize(readout.us_x2));
    centered(target, &line, 42, small());

    line.clear();
    let _ = write!(line, "EU {}", readout.eu_mm);
    centered(target, &line, 54, small());
}

fn draw_prompt<D>(target: &mut D, mode: DisplayMode, value: u32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    centered(target, "Display", 18, large());

    let mut text: heapless::String<8> = heapless::String::new();
    let label = match mode {
        DisplayMode::Us => {
            let us_x2 = u8::try_from(value).unwrap_or(u8::MAX);
            let _ = write!(text, "{}", UsSize(us_x2));
            "US Size"
        }
        DisplayMode::Eu => {
            let _ = write!(text, "{value}");
            "EU Size"
        }
    };
    centered(target, label, 34, small());
    centered(target, &text, 52, large());
}

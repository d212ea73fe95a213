//! GPIO button input with async debouncing and hold detection.
//!
//! Six physical buttons (active-low with internal pull-up):
//!   - UP / DOWN    - change the value or move the menu cursor
//!   - LEFT / RIGHT - switch between US and EU on the Display screens
//!   - OK           - confirm
//!   - BACK         - return to the menu, or exit from the menu
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends `InputEvent`s for the whole press lifecycle
//! to the UI channel.

use crate::config::{BUTTON_DEBOUNCE_MS, INPUT_QUEUE_DEPTH};
use crate::ui::input_logic::HoldTracker;
use crate::ui::{InputEvent, InputKey, InputKind};
use defmt::debug;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Sending half of the button → UI channel.
pub type InputSender = Sender<'static, CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, then reports Press,
/// Long/Repeat while held, Short if released early, and finally Release.
pub async fn button_task(pin: AnyPin, key: InputKey, tx: InputSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        send(&tx, key, InputKind::Press).await;

        let mut hold = HoldTracker::new();
        loop {
            let delay = Timer::after(Duration::from_millis(hold.next_hold_delay_ms()));
            match select(btn.wait_for_high(), delay).await {
                Either::First(()) => break,
                Either::Second(()) => {
                    let kind = hold.on_hold_elapsed();
                    send(&tx, key, kind).await;
                }
            }
        }

        if let Some(kind) = hold.on_release() {
            send(&tx, key, kind).await;
        }
        send(&tx, key, InputKind::Release).await;

        // Let the contacts settle before arming the next press.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}

async fn send(tx: &InputSender, key: InputKey, kind: InputKind) {
    let event = InputEvent::new(key, kind);
    debug!("Button: {}", event);
    tx.send(event).await;
}

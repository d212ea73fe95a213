//! Ring sizer firmware for nRF52840 + SSD1306.
//!
//! Task layout:
//!
//! ```text
//! button_task ×6 ──InputEvent──→ INPUT_CHANNEL ──→ ui_task ──→ SSD1306 (I²C)
//! ```
//!
//! `ui_task` is the single consumer: it applies one event at a time to the
//! `App` state machine and redraws after every accepted event.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration};
use ring_sizer::config::{INPUT_QUEUE_DEPTH, INPUT_WAIT_TIMEOUT_MS};
use ring_sizer::ui::{buttons, display};
use ring_sizer::{App, InputEvent, InputKey, Outcome, Scale};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH> =
    Channel::new();

type Oled = display::Display<Twim<'static, peripherals::TWISPI0>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("ring-sizer starting");

    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config);
    let oled = unwrap!(display::init(i2c));

    let buttons: [(AnyPin, InputKey); 6] = [
        (p.P0_11.degrade(), InputKey::Up),
        (p.P0_12.degrade(), InputKey::Down),
        (p.P0_24.degrade(), InputKey::Left),
        (p.P0_25.degrade(), InputKey::Right),
        (p.P0_02.degrade(), InputKey::Ok),
        (p.P0_03.degrade(), InputKey::Back),
    ];
    for (pin, key) in buttons {
        unwrap!(spawner.spawn(button(pin, key)));
    }

    unwrap!(spawner.spawn(ui_task(oled)));
}

#[embassy_executor::task(pool_size = 6)]
async fn button(pin: AnyPin, key: InputKey) -> ! {
    buttons::button_task(pin, key, INPUT_CHANNEL.sender()).await
}

#[embassy_executor::task]
async fn ui_task(mut oled: Oled) {
    let rx = INPUT_CHANNEL.receiver();
    let mut app = App::new(Scale::DEFAULT);
    redraw(&mut oled, &app);

    loop {
        // A timeout is just an idle tick.
        let Ok(event) = with_timeout(Duration::from_millis(INPUT_WAIT_TIMEOUT_MS), rx.receive()).await
        else {
            continue;
        };

        let before = app.screen();
        match app.apply_input(event) {
            Outcome::Ignored => {}
            Outcome::Redraw => {
                let after = app.screen();
                if core::mem::discriminant(&before) != core::mem::discriminant(&after) {
                    info!("UI: {} -> {}", before, after);
                }
                redraw(&mut oled, &app);
            }
            // BACK on the menu ends the UI for good: nothing reads
            // INPUT_CHANNEL afterwards, so the button tasks park on a full
            // queue and the core sleeps in the executor's WFE loop. Leaving
            // that state takes a reset or power cycle.
            Outcome::Exit => break,
        }
    }

    info!("ring-sizer exiting");
    if let Err(e) = display::shutdown(&mut oled) {
        warn!("Display shutdown failed: {}", e);
    }
}

fn redraw(oled: &mut Oled, app: &App) {
    if let Err(e) = display::render(oled, &app.view()) {
        warn!("Render failed: {}", e);
    }
}

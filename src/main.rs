//! Hauswart Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single fixed-period control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter      OledDisplay       LogEventSink         │
//! │  (Sensor+Actuator)    (DisplayPort)     (EventSink)          │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │             AppService (pure logic)                │      │
//! │  │  Door FSM · Triggers · Pages · Tone patterns       │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  MonotonicClock paces the cycle to a fixed 50 ms floor       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
mod config;
mod error;
mod pages;
mod pins;
mod sounds;
mod triggers;

pub mod app;
pub mod fsm;
mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::display::OledDisplay;
use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::MonotonicClock;
use app::service::AppService;
use config::SystemConfig;
use drivers::buzzer::Buzzer;
use drivers::servo::DoorServo;
use sensors::SensorHub;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Hauswart v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    let config = SystemConfig::default();
    let clock = MonotonicClock::new();

    // ── 3. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        sensors::light::LightSensor::new(pins::LIGHT_ADC_GPIO),
        sensors::gas::GasSensor::new(pins::GAS_ADC_GPIO),
        sensors::joystick::Joystick::new(
            pins::JOY_X_ADC_GPIO,
            pins::JOY_Y_ADC_GPIO,
            pins::JOY_SW_GPIO,
        ),
        sensors::climate::ClimateSensor::new(pins::CLIMATE_DATA_GPIO),
        pins::RED_BUTTON_GPIO,
    );

    let mut hw = HardwareAdapter::new(sensor_hub, DoorServo::new(), Buzzer::new());
    let mut log_sink = LogEventSink::new();

    // The OLED sits on I2C0; a dead bus or missing panel downgrades the
    // display to a no-op, never the whole controller.
    #[cfg(target_os = "espidf")]
    let mut display = {
        use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
        use esp_idf_hal::peripherals::Peripherals;
        use esp_idf_hal::units::FromValueType;

        // Pin choice mirrors pins::I2C_SDA_GPIO / pins::I2C_SCL_GPIO.
        match Peripherals::take() {
            Ok(p) => {
                let i2c_cfg = I2cConfig::new().baudrate(400u32.kHz().into());
                match I2cDriver::new(p.i2c0, p.pins.gpio17, p.pins.gpio18, &i2c_cfg) {
                    Ok(i2c) => OledDisplay::new(i2c),
                    Err(e) => {
                        log::warn!("I2C init failed ({e}), running without a display");
                        OledDisplay::disabled()
                    }
                }
            }
            Err(e) => {
                log::warn!("Peripherals::take failed ({e}), running without a display");
                OledDisplay::disabled()
            }
        }
    };
    #[cfg(not(target_os = "espidf"))]
    let mut display = OledDisplay::new();

    // ── 4. Construct app service and run the startup sequence ─
    let mut app = AppService::new(config.clone());
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    //
    // Fixed-shape cycle: read → evaluate → navigate → door → alarm →
    // chime → render, then pace to the cycle floor. A cycle that already
    // overran the floor (a chime, a DHT11 transaction) proceeds immediately.
    let floor_ms = u64::from(config.cycle_interval_ms);

    loop {
        let cycle_start = clock.now_ms();

        app.tick(cycle_start, &mut hw, &mut display, &mut log_sink);

        watchdog.feed();

        let elapsed = clock.now_ms().saturating_sub(cycle_start);
        if elapsed < floor_ms {
            drivers::hw_init::delay_ms((floor_ms - elapsed) as u32);
        }
    }
}

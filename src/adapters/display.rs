//! SSD1306 OLED presenter.
//!
//! Implements [`DisplayPort`] over the 128x64 I²C panel. Three fixed text
//! layouts: status (light/gas/door), environment (temperature/humidity), and
//! a static controls page. Line formatting is pure and host-testable; pixel
//! pushing is espidf-only.
//!
//! If the panel fails to initialise at boot, the adapter degrades to a
//! silent no-op — the control loop keeps running without a display.

use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::app::ports::DisplayPort;
use crate::fsm::context::SensorSnapshot;

#[cfg(target_os = "espidf")]
use crate::pins;
#[cfg(target_os = "espidf")]
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
#[cfg(target_os = "espidf")]
use log::{info, warn};
#[cfg(target_os = "espidf")]
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

// ── Pure line formatting ──────────────────────────────────────

/// Characters per line with FONT_6X10 on a 128px panel.
pub const LINE_CHARS: usize = 21;
/// Lines that fit under the 10px row pitch on a 64px panel.
pub const MAX_LINES: usize = 6;

pub type PageLines = Vec<String<LINE_CHARS>, MAX_LINES>;

/// Render one page's text content. Values are shown exactly as read — an
/// invalid climate reading appears as `NaN` rather than a cached number.
pub fn format_lines(page: u8, snap: &SensorSnapshot, door_open: bool) -> PageLines {
    let mut lines = PageLines::new();
    match page {
        0 => {
            push_line(&mut lines, format_args!("HOUSE STATUS"));
            push_line(&mut lines, format_args!("Light: {}", snap.light_level));
            push_line(&mut lines, format_args!("Gas:   {}", snap.gas_level));
            push_line(
                &mut lines,
                format_args!("Door:  {}", if door_open { "OPEN" } else { "CLOSED" }),
            );
        }
        1 => {
            push_line(&mut lines, format_args!("ENVIRONMENT"));
            push_line(&mut lines, format_args!("Temp: {:.1} C", snap.temperature_c));
            push_line(&mut lines, format_args!("Hum:  {:.1} %", snap.humidity_pct));
        }
        _ => {
            push_line(&mut lines, format_args!("CONTROLS:"));
            push_line(&mut lines, format_args!("Joystick = scroll"));
            push_line(&mut lines, format_args!("Joy btn  = open"));
            push_line(&mut lines, format_args!("Red btn  = chime"));
            push_line(&mut lines, format_args!("Auto-close active"));
        }
    }
    lines
}

fn push_line(lines: &mut PageLines, args: core::fmt::Arguments<'_>) {
    let mut s = String::<LINE_CHARS>::new();
    // A line longer than the panel is wide loses its tail.
    let _ = s.write_fmt(args);
    let _ = lines.push(s);
}

// ── Panel adapter ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
type Panel = Ssd1306<
    I2CInterface<esp_idf_hal::i2c::I2cDriver<'static>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct OledDisplay {
    #[cfg(target_os = "espidf")]
    panel: Option<Panel>,
}

#[cfg(target_os = "espidf")]
impl OledDisplay {
    /// An adapter with no panel — used when the I²C bus itself could not be
    /// brought up. Every `show_page` is a no-op.
    pub fn disabled() -> Self {
        Self { panel: None }
    }

    /// Initialise the panel. A failed init leaves the adapter as a no-op
    /// rather than taking the controller down.
    pub fn new(i2c: esp_idf_hal::i2c::I2cDriver<'static>) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, pins::OLED_I2C_ADDR);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        match panel.init() {
            Ok(()) => {
                info!("OLED initialised at 0x{:02X}", pins::OLED_I2C_ADDR);
                Self { panel: Some(panel) }
            }
            Err(e) => {
                warn!("OLED init failed ({e:?}), running without a display");
                Self { panel: None }
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl OledDisplay {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for OledDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for OledDisplay {
    #[cfg(target_os = "espidf")]
    fn show_page(&mut self, page: u8, snap: &SensorSnapshot, door_open: bool) {
        let Some(panel) = &mut self.panel else {
            return;
        };

        panel.clear_buffer();
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        for (i, line) in format_lines(page, snap, door_open).iter().enumerate() {
            let _ = Text::with_baseline(
                line.as_str(),
                Point::new(0, i as i32 * 10),
                style,
                Baseline::Top,
            )
            .draw(panel);
        }
        if let Err(e) = panel.flush() {
            warn!("OLED flush failed: {e:?}");
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn show_page(&mut self, page: u8, snap: &SensorSnapshot, door_open: bool) {
        for line in format_lines(page, snap, door_open) {
            log::debug!("OLED[{page}] {line}");
        }
    }
}

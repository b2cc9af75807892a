//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! logger (UART / USB-CDC in production). A future network adapter would
//! implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | controller ready, door at rest");
            }
            AppEvent::DoorOpened => {
                info!("DOOR  | opened");
            }
            AppEvent::DoorClosed { open_for_ms } => {
                info!("DOOR  | auto-closed after {}ms open", open_for_ms);
            }
            AppEvent::AlarmRaised { gas_level } => {
                info!("ALARM | gas at {} — beeping until it clears", gas_level);
            }
            AppEvent::AlarmCleared => {
                info!("ALARM | cleared");
            }
            AppEvent::PageChanged { page } => {
                info!("PAGE  | -> {}", page);
            }
            AppEvent::ChimePlayed => {
                info!("CHIME | played");
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | page={} | light={} gas={} | T={:.1}\u{00b0}C H={:.1}% | door={}",
                    t.page,
                    t.light_level,
                    t.gas_level,
                    t.temperature_c,
                    t.humidity_pct,
                    if t.door_open { "OPEN" } else { "CLOSED" },
                );
            }
        }
    }
}

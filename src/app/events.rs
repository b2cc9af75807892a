//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — today that is the serial log.
//!
//! Events are edge-triggered: the gas alarm *sound* repeats every alarm
//! cycle, but `AlarmRaised`/`AlarmCleared` fire once per episode so the log
//! is not flooded at cycle rate.

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller finished startup (door driven to its rest position).
    Started,

    /// The door was commanded open by a button press.
    DoorOpened,

    /// The door auto-closed after darkness outlasted the grace window.
    DoorClosed {
        /// How long the door had been open, in milliseconds.
        open_for_ms: u64,
    },

    /// Gas crossed above the alarm threshold.
    AlarmRaised { gas_level: u16 },

    /// Gas dropped back to the threshold or below.
    AlarmCleared,

    /// The display switched to a different page.
    PageChanged { page: u8 },

    /// The doorbell chime was played.
    ChimePlayed,

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub page: u8,
    pub light_level: u16,
    pub gas_level: u16,
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub door_open: bool,
}

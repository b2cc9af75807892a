//! Shared mutable context threaded through every door state handler.
//!
//! `DoorContext` is the single struct that state handlers read from and
//! write to. It carries the current cycle's trigger conditions, the actuator
//! command outputs, the monotonic clock, configuration, and the door-open
//! timestamp.

use crate::config::SystemConfig;
use crate::sounds::SoundPattern;
use crate::triggers::Triggers;

// ---------------------------------------------------------------------------
// Sensor snapshot (written by the sensor hub once per cycle)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every sensor in the system.
///
/// Analog values are on the 10-bit scale the thresholds are calibrated
/// against. `temperature_c` / `humidity_pct` are `NaN` when the climate
/// sensor failed to answer — the value is displayed as-is, never cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// Ambient light level (0–1023, higher = brighter).
    pub light_level: u16,
    /// Gas concentration (0–1023, higher = more gas).
    pub gas_level: u16,
    /// Joystick X axis (0–1023, ~512 at rest).
    pub joy_x: u16,
    /// Joystick Y axis (0–1023, ~512 at rest).
    pub joy_y: u16,
    /// Joystick centre switch (true = pressed).
    pub joy_pressed: bool,
    /// Red chime button (true = pressed).
    pub red_button_pressed: bool,
    /// Air temperature in °C, `NaN` on a failed read.
    pub temperature_c: f32,
    /// Relative humidity in %, `NaN` on a failed read.
    pub humidity_pct: f32,
}

// ---------------------------------------------------------------------------
// Cycle commands (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

/// Actuator requests accumulated during one cycle's state handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleCommands {
    /// Servo target in degrees, when the door position should change.
    pub door_angle: Option<u8>,
    /// Sound to play for a door transition (open/close confirmation).
    pub tone: Option<SoundPattern>,
}

// ---------------------------------------------------------------------------
// DoorContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct DoorContext {
    /// Monotonic time at the top of the current cycle (ms since boot).
    pub now_ms: u64,
    /// When the door was last commanded open. Meaningful only while Open;
    /// refreshed by a repeated open press.
    pub opened_at_ms: u64,
    /// This cycle's trigger conditions.
    pub triggers: Triggers,
    /// Actuator requests produced by this cycle's handlers.
    pub commands: CycleCommands,
    /// System configuration (read-only for the process lifetime).
    pub config: SystemConfig,
}

impl DoorContext {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            now_ms: 0,
            opened_at_ms: 0,
            triggers: Triggers::default(),
            commands: CycleCommands::default(),
            config,
        }
    }

    /// Milliseconds elapsed since the door was last commanded open.
    pub fn ms_since_open(&self) -> u64 {
        self.now_ms.saturating_sub(self.opened_at_ms)
    }
}

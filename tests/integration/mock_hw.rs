//! Mock hardware adapters for integration tests.
//!
//! Records every actuator, display, and event-sink call so tests can assert
//! on the full command history without touching real GPIO/PWM registers.

use hauswart::app::events::AppEvent;
use hauswart::app::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use hauswart::fsm::context::SensorSnapshot;
use hauswart::sounds::SoundPattern;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorCall {
    SetDoorAngle(u8),
    PlaySound(SoundPattern),
    Silence,
}

// ── MockHardware ──────────────────────────────────────────────

/// Scriptable sensor input plus a recorded actuator history.
pub struct MockHardware {
    /// Snapshot returned by the next `read_all` (copy per cycle).
    pub snapshot: SensorSnapshot,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            // Bright, quiet room with the joystick at rest.
            snapshot: SensorSnapshot {
                light_level: 800,
                gas_level: 0,
                joy_x: 512,
                joy_y: 512,
                joy_pressed: false,
                red_button_pressed: false,
                temperature_c: 21.0,
                humidity_pct: 40.0,
            },
            calls: Vec::new(),
        }
    }

    /// All sound patterns requested, in order.
    pub fn sounds(&self) -> Vec<SoundPattern> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::PlaySound(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// The most recent servo command, if any.
    pub fn last_angle(&self) -> Option<u8> {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetDoorAngle(a) => Some(*a),
                _ => None,
            })
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> SensorSnapshot {
        self.snapshot
    }
}

impl ActuatorPort for MockHardware {
    fn set_door_angle(&mut self, degrees: u8) {
        self.calls.push(ActuatorCall::SetDoorAngle(degrees));
    }

    fn play_sound(&mut self, pattern: SoundPattern) {
        self.calls.push(ActuatorCall::PlaySound(pattern));
    }

    fn silence(&mut self) {
        self.calls.push(ActuatorCall::Silence);
    }
}

// ── MockDisplay ───────────────────────────────────────────────

/// Records every rendered frame.
pub struct MockDisplay {
    pub frames: Vec<(u8, SensorSnapshot, bool)>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn last_frame(&self) -> Option<&(u8, SensorSnapshot, bool)> {
        self.frames.last()
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockDisplay {
    fn show_page(&mut self, page: u8, snap: &SensorSnapshot, door_open: bool) {
        self.frames.push((page, *snap, door_open));
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<String>,
}

impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}

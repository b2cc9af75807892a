//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both actuator drivers, exposing them through
//! [`SensorPort`] and [`ActuatorPort`]. On non-espidf targets the underlying
//! drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::servo::DoorServo;
use crate::fsm::context::SensorSnapshot;
use crate::sensors::SensorHub;
use crate::sounds::SoundPattern;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    servo: DoorServo,
    buzzer: Buzzer,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub, servo: DoorServo, buzzer: Buzzer) -> Self {
        Self {
            sensor_hub,
            servo,
            buzzer,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> SensorSnapshot {
        self.sensor_hub.read_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_door_angle(&mut self, degrees: u8) {
        self.servo.set_angle(degrees);
    }

    fn play_sound(&mut self, pattern: SoundPattern) {
        self.buzzer.play(pattern);
    }

    fn silence(&mut self) {
        self.buzzer.silence();
    }
}

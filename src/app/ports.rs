//! Port traits — the hexagonal boundary between domain logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensor hub, servo, buzzer, display, event sinks)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::fsm::context::SensorSnapshot;
use crate::sounds::SoundPattern;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    ///
    /// Must always return: a failed climate read surfaces as `NaN` in the
    /// snapshot, never as an error that could stall the cycle.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Command the door servo to an absolute angle in degrees.
    /// Open-loop — there is no position feedback.
    fn set_door_angle(&mut self, degrees: u8);

    /// Play a sound pattern **to completion**.
    ///
    /// Blocking by contract: the control loop owns the single buzzer channel
    /// and no cycle work proceeds until the pattern ends. The chime runs on
    /// the order of half a second, during which sensors are not re-read —
    /// this is the system's largest latency source and is accepted.
    fn play_sound(&mut self, pattern: SoundPattern);

    /// Stop any tone immediately.
    fn silence(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → presenter)
// ───────────────────────────────────────────────────────────────

/// The display presenter is an external collaborator: it receives a page
/// index and the cycle's readings and is assumed to always succeed.
pub trait DisplayPort {
    fn show_page(&mut self, page: u8, snap: &SensorSnapshot, door_open: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log today;
/// the trait keeps the core agnostic).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

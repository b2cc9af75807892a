//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the door FSM, the page navigator, and the shared
//! cycle context. It exposes a clean, hardware-agnostic API. All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │         AppService           │
//! ActuatorPort ◀──│  Door FSM · Triggers · Pages │──▶ DisplayPort
//!                 └──────────────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::fsm::context::{CycleCommands, DoorContext};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::pages::PageNavigator;
use crate::sounds::SoundPattern;
use crate::triggers::Triggers;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one full control cycle:
/// read → evaluate → navigate → door → alarm → chime → render.
pub struct AppService {
    fsm: Fsm,
    ctx: DoorContext,
    navigator: PageNavigator,
    /// Cycles between telemetry emissions (0 disables telemetry).
    telemetry_cycles: u64,
    cycle_count: u64,
    /// Whether the gas alarm episode is currently active (for edge events).
    alarm_active: bool,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** drive any hardware — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let navigator = PageNavigator::new(config.total_pages, config.nav_debounce_cycles());
        let telemetry_cycles =
            u64::from(config.telemetry_interval_secs) * 1000 / u64::from(config.cycle_interval_ms);
        let ctx = DoorContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::Closed);

        Self {
            fsm,
            ctx,
            navigator,
            telemetry_cycles,
            cycle_count: 0,
            alarm_active: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run the startup sequence: drive the door to its closed rest position
    /// and play the boot chirp (in place of the close confirmation the
    /// Closed entry handler would otherwise request).
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);

        if let Some(angle) = self.ctx.commands.door_angle {
            hw.set_door_angle(angle);
        }
        hw.play_sound(SoundPattern::Startup);
        self.ctx.commands = CycleCommands::default();

        sink.emit(&AppEvent::Started);
        info!("AppService started, door at rest");
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle.
    ///
    /// `now_ms` is the monotonic time at the top of the cycle. The `hw`
    /// parameter satisfies **both** [`SensorPort`] and [`ActuatorPort`] —
    /// this avoids a double mutable borrow while keeping the port boundary
    /// explicit.
    ///
    /// Every decision in the cycle observes the same snapshot, and the
    /// display renders that same snapshot at the end — even when a blocking
    /// sound pattern consumed most of the cycle in between.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        self.cycle_count += 1;

        // 1. Read sensors via SensorPort.
        let snapshot = hw.read_all();

        // 2. Evaluate thresholds (pure).
        self.ctx.now_ms = now_ms;
        self.ctx.triggers = Triggers::evaluate(&snapshot, &self.ctx.config);

        // 3. Page navigation.
        if let Some(page) = self
            .navigator
            .navigate(self.ctx.triggers.navigate_up, self.ctx.triggers.navigate_down)
        {
            sink.emit(&AppEvent::PageChanged { page });
        }

        // 4. Door FSM tick, then apply its actuator requests.
        let prev_state = self.fsm.current_state();
        self.ctx.commands = CycleCommands::default();
        self.fsm.tick(&mut self.ctx);

        if let Some(angle) = self.ctx.commands.door_angle {
            hw.set_door_angle(angle);
        }
        if let Some(tone) = self.ctx.commands.tone {
            hw.play_sound(tone);
        }

        let state = self.fsm.current_state();
        if state != prev_state {
            match state {
                StateId::Open => sink.emit(&AppEvent::DoorOpened),
                StateId::Closed => sink.emit(&AppEvent::DoorClosed {
                    open_for_ms: self.ctx.ms_since_open(),
                }),
            }
        }

        // 5. Gas alarm: the beep repeats every alarm cycle; the events mark
        //    episode edges only.
        if self.ctx.triggers.gas_alarm {
            hw.play_sound(SoundPattern::GasAlarm);
            if !self.alarm_active {
                self.alarm_active = true;
                sink.emit(&AppEvent::AlarmRaised {
                    gas_level: snapshot.gas_level,
                });
            }
        } else if self.alarm_active {
            self.alarm_active = false;
            sink.emit(&AppEvent::AlarmCleared);
        }

        // 6. Chime on the red button (level-acting: held button replays).
        if self.ctx.triggers.chime_requested {
            hw.play_sound(SoundPattern::Chime);
            sink.emit(&AppEvent::ChimePlayed);
        }

        // 7. Render the cycle's snapshot — stale by up to one pattern length
        //    when a sound played above; kept by contract.
        display.show_page(self.navigator.current(), &snapshot, self.fsm.is_open());

        // 8. Periodic telemetry.
        if self.telemetry_cycles > 0 && self.cycle_count % self.telemetry_cycles == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry(&snapshot)));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current door state.
    pub fn door_state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Current display page.
    pub fn page(&self) -> u8 {
        self.navigator.current()
    }

    /// Total control cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn build_telemetry(&self, snapshot: &crate::fsm::context::SensorSnapshot) -> TelemetryData {
        TelemetryData {
            page: self.navigator.current(),
            light_level: snapshot.light_level,
            gas_level: snapshot.gas_level,
            temperature_c: snapshot.temperature_c,
            humidity_pct: snapshot.humidity_pct,
            door_open: self.fsm.is_open(),
        }
    }
}

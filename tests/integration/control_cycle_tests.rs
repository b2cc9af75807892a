//! Integration tests for the full control cycle:
//! read → evaluate → navigate → door → alarm → chime → render.
//!
//! These run on the host and drive [`AppService`] with scripted sensor
//! snapshots and a simulated clock, verifying the end-to-end chain from a
//! trigger condition down to the recorded actuator/display calls.

use crate::mock_hw::{ActuatorCall, LogSink, MockDisplay, MockHardware};

use hauswart::app::service::AppService;
use hauswart::config::SystemConfig;
use hauswart::fsm::StateId;
use hauswart::sounds::SoundPattern;

fn make_app() -> (AppService, MockHardware, MockDisplay, LogSink) {
    let config = SystemConfig::default();
    let mut app = AppService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, MockDisplay::new(), sink)
}

// ── Startup sequence ─────────────────────────────────────────

#[test]
fn startup_drives_door_closed_and_chirps() {
    let (app, hw, _display, sink) = make_app();

    assert_eq!(app.door_state(), StateId::Closed);
    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::SetDoorAngle(90),
            ActuatorCall::PlaySound(SoundPattern::Startup),
        ],
        "boot = servo to rest position + startup chirp, nothing else"
    );
    assert!(sink.events.iter().any(|e| e.contains("Started")));
}

// ── Door control ─────────────────────────────────────────────

#[test]
fn joystick_press_opens_the_door() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.calls.clear();

    hw.snapshot.joy_pressed = true;
    app.tick(0, &mut hw, &mut display, &mut sink);

    assert_eq!(app.door_state(), StateId::Open);
    assert!(hw.calls.contains(&ActuatorCall::SetDoorAngle(0)));
    assert!(hw.sounds().contains(&SoundPattern::DoorOpen));
    assert!(sink.events.iter().any(|e| e.contains("DoorOpened")));
    assert_eq!(display.last_frame().unwrap().2, true, "frame shows the door open");
}

#[test]
fn door_auto_closes_after_darkness_outlasts_the_delay() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    // Open at t=0, then release the stick in a dark room (light 650 < 680).
    hw.snapshot.joy_pressed = true;
    app.tick(0, &mut hw, &mut display, &mut sink);
    hw.snapshot.joy_pressed = false;
    hw.snapshot.light_level = 650;

    // t=2000ms: dark, but inside the 3000ms grace window.
    app.tick(2000, &mut hw, &mut display, &mut sink);
    assert_eq!(app.door_state(), StateId::Open);

    // t=3500ms: dark and past the window — closes with the low tone.
    hw.calls.clear();
    app.tick(3500, &mut hw, &mut display, &mut sink);
    assert_eq!(app.door_state(), StateId::Closed);
    assert!(hw.calls.contains(&ActuatorCall::SetDoorAngle(90)));
    assert!(hw.sounds().contains(&SoundPattern::DoorClose));
    assert!(
        sink.events.iter().any(|e| e.contains("DoorClosed") && e.contains("3500")),
        "close event reports how long the door was open: {:?}",
        sink.events
    );
    assert_eq!(display.last_frame().unwrap().2, false);
}

#[test]
fn bright_room_keeps_the_door_open_forever() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.snapshot.joy_pressed = true;
    app.tick(0, &mut hw, &mut display, &mut sink);
    hw.snapshot.joy_pressed = false;
    hw.snapshot.light_level = 720; // not dark

    for t in [5000, 60_000, 3_600_000] {
        app.tick(t, &mut hw, &mut display, &mut sink);
        assert_eq!(app.door_state(), StateId::Open, "timeout alone must not close");
    }
}

#[test]
fn holding_the_open_button_keeps_restarting_the_grace_window() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.snapshot.light_level = 650; // dark the whole time
    hw.snapshot.joy_pressed = true;
    app.tick(0, &mut hw, &mut display, &mut sink);

    // Still pressing at t=5000: past the original window, but the press
    // refreshes the timer every cycle, so the door stays open.
    app.tick(5000, &mut hw, &mut display, &mut sink);
    assert_eq!(app.door_state(), StateId::Open);

    // Release; the freshly restarted window then expires in darkness.
    hw.snapshot.joy_pressed = false;
    app.tick(8001, &mut hw, &mut display, &mut sink);
    assert_eq!(app.door_state(), StateId::Closed);
}

// ── Gas alarm ────────────────────────────────────────────────

#[test]
fn gas_alarm_beeps_every_cycle_above_threshold() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.calls.clear();

    hw.snapshot.gas_level = 200;
    for t in [0, 50, 100] {
        app.tick(t, &mut hw, &mut display, &mut sink);
    }

    let beeps = hw
        .sounds()
        .iter()
        .filter(|p| **p == SoundPattern::GasAlarm)
        .count();
    assert_eq!(beeps, 3, "the alert repeats at cycle rate while gas is high");

    // One episode, one raised event.
    let raised = sink.events.iter().filter(|e| e.contains("AlarmRaised")).count();
    assert_eq!(raised, 1);

    // Dropping back to the threshold stops the beep and closes the episode.
    hw.calls.clear();
    hw.snapshot.gas_level = 130;
    app.tick(150, &mut hw, &mut display, &mut sink);
    assert!(hw.sounds().is_empty(), "boundary value must not alarm");
    assert!(sink.events.iter().any(|e| e.contains("AlarmCleared")));
}

// ── Chime ────────────────────────────────────────────────────

#[test]
fn red_button_plays_the_chime_each_cycle_it_is_held() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.calls.clear();

    hw.snapshot.red_button_pressed = true;
    app.tick(0, &mut hw, &mut display, &mut sink);
    app.tick(50, &mut hw, &mut display, &mut sink);
    hw.snapshot.red_button_pressed = false;
    app.tick(100, &mut hw, &mut display, &mut sink);

    let chimes = hw
        .sounds()
        .iter()
        .filter(|p| **p == SoundPattern::Chime)
        .count();
    assert_eq!(chimes, 2);
    assert_eq!(
        sink.events.iter().filter(|e| e.contains("ChimePlayed")).count(),
        2
    );
}

// ── Page navigation ──────────────────────────────────────────

#[test]
fn joystick_up_scrolls_back_with_wraparound_then_debounces() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    // joy_y=250 < low band 300 → navigate up; page 0 wraps to 2.
    hw.snapshot.joy_y = 250;
    app.tick(0, &mut hw, &mut display, &mut sink);
    assert_eq!(app.page(), 2);
    assert_eq!(display.last_frame().unwrap().0, 2);

    // Held deflection: the 200ms/50ms = 4-cycle debounce window swallows it.
    for t in [50, 100, 150, 200] {
        app.tick(t, &mut hw, &mut display, &mut sink);
        assert_eq!(app.page(), 2);
    }

    // Window over — the next cycle scrolls again.
    app.tick(250, &mut hw, &mut display, &mut sink);
    assert_eq!(app.page(), 1);
}

#[test]
fn joystick_down_scrolls_forward() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.snapshot.joy_y = 900;
    app.tick(0, &mut hw, &mut display, &mut sink);
    assert_eq!(app.page(), 1);
    assert!(sink.events.iter().any(|e| e.contains("PageChanged")));
}

#[test]
fn neutral_stick_never_scrolls() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    for t in (0..50u64).map(|i| i * 50) {
        app.tick(t, &mut hw, &mut display, &mut sink);
    }
    assert_eq!(app.page(), 0);
}

// ── Arbitration and rendering ────────────────────────────────

#[test]
fn simultaneous_triggers_fire_in_a_fixed_order() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.calls.clear();

    // Everything at once: open press, gas, chime.
    hw.snapshot.joy_pressed = true;
    hw.snapshot.gas_level = 500;
    hw.snapshot.red_button_pressed = true;
    app.tick(0, &mut hw, &mut display, &mut sink);

    assert_eq!(
        hw.sounds(),
        vec![
            SoundPattern::DoorOpen,
            SoundPattern::GasAlarm,
            SoundPattern::Chime,
        ],
        "door acts before the alarm, the chime goes last"
    );

    // The display still renders, once, with this cycle's snapshot.
    assert_eq!(display.frames.len(), 1);
}

#[test]
fn display_renders_every_cycle_with_the_cycle_snapshot() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.snapshot.light_level = 333;
    hw.snapshot.gas_level = 77;
    app.tick(0, &mut hw, &mut display, &mut sink);

    let (page, snap, door_open) = display.last_frame().unwrap();
    assert_eq!(*page, 0);
    assert_eq!(snap.light_level, 333);
    assert_eq!(snap.gas_level, 77);
    assert!(!*door_open);

    // A chime-consuming cycle still renders exactly one frame from the
    // snapshot captured before the blocking pattern.
    hw.snapshot.red_button_pressed = true;
    hw.snapshot.light_level = 400;
    app.tick(50, &mut hw, &mut display, &mut sink);
    assert_eq!(display.frames.len(), 2);
    assert_eq!(display.last_frame().unwrap().1.light_level, 400);
}

#[test]
fn invalid_climate_readings_flow_through_to_the_display() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.snapshot.temperature_c = f32::NAN;
    hw.snapshot.humidity_pct = f32::NAN;
    app.tick(0, &mut hw, &mut display, &mut sink);

    let (_, snap, _) = display.last_frame().unwrap();
    assert!(snap.temperature_c.is_nan(), "no last-known-good substitution");
    assert!(snap.humidity_pct.is_nan());
    assert_eq!(app.door_state(), StateId::Closed, "the cycle ran to completion");
}

// ── Telemetry ────────────────────────────────────────────────

#[test]
fn telemetry_is_emitted_on_schedule() {
    let config = SystemConfig {
        telemetry_interval_secs: 1, // every 20 cycles at the 50ms floor
        ..SystemConfig::default()
    };
    let mut app = AppService::new(config);
    let mut hw = MockHardware::new();
    let mut display = MockDisplay::new();
    let mut sink = LogSink::new();
    app.start(&mut hw, &mut sink);

    for i in 0..40u64 {
        app.tick(i * 50, &mut hw, &mut display, &mut sink);
    }

    let telem = sink.events.iter().filter(|e| e.contains("Telemetry")).count();
    assert_eq!(telem, 2);
}

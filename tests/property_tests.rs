//! Property tests for the control-loop invariants.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32 targets.
//! On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use hauswart::config::SystemConfig;
use hauswart::fsm::context::{CycleCommands, DoorContext};
use hauswart::fsm::states::build_state_table;
use hauswart::fsm::{Fsm, StateId};
use hauswart::pages::PageNavigator;
use hauswart::triggers::Triggers;
use proptest::prelude::*;

// ── Page navigator invariants ─────────────────────────────────

proptest! {
    /// The page index is a valid index after any input sequence, for any
    /// ring size and debounce window — including degenerate single-page
    /// rings and adversarial runs of thousands of identical deflections.
    #[test]
    fn page_index_always_valid(
        moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..3000),
        total in 1u8..=8,
        debounce in 0u32..6,
    ) {
        let mut nav = PageNavigator::new(total, debounce);
        for (up, down) in moves {
            nav.navigate(up, down);
            prop_assert!(nav.current() < total);
        }
    }

    /// Ambiguous input never moves the page, regardless of prior state.
    #[test]
    fn simultaneous_up_down_never_moves(
        warmup in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..50),
    ) {
        let mut nav = PageNavigator::new(3, 0);
        for (up, down) in warmup {
            nav.navigate(up, down);
        }
        let before = nav.current();
        prop_assert_eq!(nav.navigate(true, true), None);
        prop_assert_eq!(nav.current(), before);
    }
}

// ── Threshold evaluator invariants ────────────────────────────

proptest! {
    /// Strict boundary semantics for every analog trigger.
    #[test]
    fn triggers_use_strict_inequalities(light in 0u16..1024, gas in 0u16..1024, joy_y in 0u16..1024) {
        let cfg = SystemConfig::default();
        let snap = hauswart::fsm::context::SensorSnapshot {
            light_level: light,
            gas_level: gas,
            joy_y,
            ..Default::default()
        };
        let t = Triggers::evaluate(&snap, &cfg);

        prop_assert_eq!(t.too_dark, light < cfg.dark_threshold);
        prop_assert_eq!(t.gas_alarm, gas > cfg.gas_threshold);
        prop_assert_eq!(t.navigate_up, joy_y < cfg.joy_low_band);
        prop_assert_eq!(t.navigate_down, joy_y > cfg.joy_high_band);
        prop_assert!(!(t.navigate_up && t.navigate_down));
    }
}

// ── Door hysteresis invariants ────────────────────────────────

#[derive(Debug, Clone)]
struct Step {
    dt_ms: u64,
    too_dark: bool,
    press: bool,
}

fn arb_step() -> impl Strategy<Value = Step> {
    (0u64..700, any::<bool>(), any::<bool>()).prop_map(|(dt_ms, too_dark, press)| Step {
        dt_ms,
        too_dark,
        press,
    })
}

proptest! {
    /// For any input sequence, the door only ever leaves Open when darkness
    /// and an expired grace window coincide, and every close is attributable
    /// to the most recent press's timestamp.
    #[test]
    fn door_never_closes_early(steps in proptest::collection::vec(arb_step(), 1..200)) {
        let cfg = SystemConfig::default();
        let delay = cfg.auto_close_delay_ms as u64;

        let mut fsm = Fsm::new(build_state_table(), StateId::Closed);
        let mut ctx = DoorContext::new(cfg);
        fsm.start(&mut ctx);

        let mut now = 0u64;
        for step in steps {
            now += step.dt_ms;
            let prev_state = fsm.current_state();
            let prev_opened_at = ctx.opened_at_ms;

            ctx.now_ms = now;
            ctx.triggers = Triggers {
                too_dark: step.too_dark,
                manual_open: step.press,
                ..Triggers::default()
            };
            ctx.commands = CycleCommands::default();
            fsm.tick(&mut ctx);

            if prev_state == StateId::Open && fsm.current_state() == StateId::Closed {
                prop_assert!(step.too_dark, "closed without darkness");
                prop_assert!(!step.press, "a press must always hold the door");
                prop_assert!(
                    now - prev_opened_at > delay,
                    "closed {}ms after opening, delay is {}ms",
                    now - prev_opened_at,
                    delay
                );
            }

            // A press always leaves the door open with a fresh timestamp.
            if step.press {
                prop_assert_eq!(fsm.current_state(), StateId::Open);
                prop_assert_eq!(ctx.opened_at_ms, now);
            }
        }
    }
}

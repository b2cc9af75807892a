//! Threshold evaluator — raw readings to boolean trigger conditions.
//!
//! Pure and stateless: the same snapshot and config always produce the same
//! triggers. Every comparison is a strict inequality, so a reading that sits
//! exactly on a threshold resolves to the "not triggered" side. The band
//! between `joy_low_band` and `joy_high_band` is a dead zone; centre drift on
//! a worn joystick never scrolls pages.

use crate::config::SystemConfig;
use crate::fsm::context::SensorSnapshot;

/// Boolean trigger conditions derived once per cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    /// Ambient light is below the dark threshold.
    pub too_dark: bool,
    /// Gas concentration is above the alarm threshold.
    pub gas_alarm: bool,
    /// Joystick deflected towards the previous page.
    pub navigate_up: bool,
    /// Joystick deflected towards the next page.
    pub navigate_down: bool,
    /// Joystick centre switch pressed — open the door.
    pub manual_open: bool,
    /// Red button pressed — play the chime.
    pub chime_requested: bool,
}

impl Triggers {
    /// Evaluate all trigger conditions against one sensor snapshot.
    pub fn evaluate(snap: &SensorSnapshot, config: &SystemConfig) -> Self {
        Self {
            too_dark: snap.light_level < config.dark_threshold,
            gas_alarm: snap.gas_level > config.gas_threshold,
            navigate_up: snap.joy_y < config.joy_low_band,
            navigate_down: snap.joy_y > config.joy_high_band,
            manual_open: snap.joy_pressed,
            chime_requested: snap.red_button_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> SensorSnapshot {
        SensorSnapshot {
            light_level: 800,
            gas_level: 0,
            joy_x: 500,
            joy_y: 500,
            joy_pressed: false,
            red_button_pressed: false,
            temperature_c: 21.0,
            humidity_pct: 40.0,
        }
    }

    #[test]
    fn dark_is_strictly_below_threshold() {
        let cfg = SystemConfig::default();
        let mut s = snap();

        s.light_level = cfg.dark_threshold - 1;
        assert!(Triggers::evaluate(&s, &cfg).too_dark);

        s.light_level = cfg.dark_threshold;
        assert!(!Triggers::evaluate(&s, &cfg).too_dark, "boundary is not dark");

        s.light_level = cfg.dark_threshold + 1;
        assert!(!Triggers::evaluate(&s, &cfg).too_dark);
    }

    #[test]
    fn gas_alarm_is_strictly_above_threshold() {
        let cfg = SystemConfig::default();
        let mut s = snap();

        s.gas_level = cfg.gas_threshold;
        assert!(!Triggers::evaluate(&s, &cfg).gas_alarm, "boundary does not alarm");

        s.gas_level = cfg.gas_threshold + 1;
        assert!(Triggers::evaluate(&s, &cfg).gas_alarm);
    }

    #[test]
    fn joystick_dead_zone_produces_no_navigation() {
        let cfg = SystemConfig::default();
        let mut s = snap();

        for y in [cfg.joy_low_band, 500, cfg.joy_high_band] {
            s.joy_y = y;
            let t = Triggers::evaluate(&s, &cfg);
            assert!(!t.navigate_up && !t.navigate_down, "joy_y={} must be neutral", y);
        }
    }

    #[test]
    fn joystick_deflection_navigates() {
        let cfg = SystemConfig::default();
        let mut s = snap();

        s.joy_y = 250;
        let t = Triggers::evaluate(&s, &cfg);
        assert!(t.navigate_up);
        assert!(!t.navigate_down);

        s.joy_y = 900;
        let t = Triggers::evaluate(&s, &cfg);
        assert!(!t.navigate_up);
        assert!(t.navigate_down);
    }

    #[test]
    fn buttons_pass_through_as_levels() {
        let cfg = SystemConfig::default();
        let mut s = snap();
        s.joy_pressed = true;
        s.red_button_pressed = true;

        let t = Triggers::evaluate(&s, &cfg);
        assert!(t.manual_open);
        assert!(t.chime_requested);
    }
}

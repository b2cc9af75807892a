//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a [`SensorSnapshot`] each
//! cycle. All inputs are polled; nothing in this system is interrupt-driven.

pub mod climate;
pub mod gas;
pub mod joystick;
pub mod light;

use log::debug;

use crate::fsm::context::SensorSnapshot;
use climate::ClimateSensor;
use gas::GasSensor;
use joystick::Joystick;
use light::LightSensor;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_RED_BUTTON: AtomicBool = AtomicBool::new(false);

/// Inject the red button state for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_red_button(pressed: bool) {
    SIM_RED_BUTTON.store(pressed, Ordering::Relaxed);
}

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    pub light: LightSensor,
    pub gas: GasSensor,
    pub joystick: Joystick,
    pub climate: ClimateSensor,
    red_button_gpio: i32,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main where
    /// peripheral ownership is established).
    pub fn new(
        light: LightSensor,
        gas: GasSensor,
        joystick: Joystick,
        climate: ClimateSensor,
        red_button_gpio: i32,
    ) -> Self {
        Self {
            light,
            gas,
            joystick,
            climate,
            red_button_gpio,
        }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// A failed climate read surfaces as `NaN` — the value is shown as-is on
    /// the display and re-read next cycle. A single flaky sensor must never
    /// stall the control loop.
    pub fn read_all(&mut self) -> SensorSnapshot {
        let light_level = self.light.read();
        let gas_level = self.gas.read();
        let joy = self.joystick.read();

        let (temperature_c, humidity_pct) = match self.climate.read() {
            Ok(r) => (r.temperature_c, r.humidity_pct),
            Err(e) => {
                debug!("climate read failed: {e}");
                (f32::NAN, f32::NAN)
            }
        };

        SensorSnapshot {
            light_level,
            gas_level,
            joy_x: joy.x,
            joy_y: joy.y,
            joy_pressed: joy.pressed,
            red_button_pressed: self.read_red_button(),
            temperature_c,
            humidity_pct,
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_red_button(&self) -> bool {
        // Active-low with pull-up.
        !crate::drivers::hw_init::gpio_read(self.red_button_gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_red_button(&self) -> bool {
        let _ = self.red_button_gpio;
        SIM_RED_BUTTON.load(Ordering::Relaxed)
    }
}

//! Two-axis analog joystick with centre push switch.
//!
//! X and Y potentiometers read via ADC (scaled to the 10-bit range, ~512 at
//! rest); the centre switch is active-low with an internal pull-up, polled
//! as a level once per cycle.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 channels 2/3 and the switch GPIO (initialised by
//! hw_init). On host/test: reads from static atomics for injection.

use core::sync::atomic::{AtomicBool, AtomicU16};
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Both axes default to the rest position (~512 on the 10-bit scale).
static SIM_JOY_X_ADC: AtomicU16 = AtomicU16::new(2048);
static SIM_JOY_Y_ADC: AtomicU16 = AtomicU16::new(2048);
static SIM_JOY_PRESSED: AtomicBool = AtomicBool::new(false);

/// Inject raw 12-bit axis values for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_joy_adc(x: u16, y: u16) {
    SIM_JOY_X_ADC.store(x, Ordering::Relaxed);
    SIM_JOY_Y_ADC.store(y, Ordering::Relaxed);
}

/// Inject the switch state for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_joy_pressed(pressed: bool) {
    SIM_JOY_PRESSED.store(pressed, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
pub struct JoystickReading {
    /// X axis, 0–1023.
    pub x: u16,
    /// Y axis, 0–1023.
    pub y: u16,
    /// Centre switch pressed.
    pub pressed: bool,
}

pub struct Joystick {
    _x_adc_gpio: i32,
    _y_adc_gpio: i32,
    sw_gpio: i32,
}

impl Joystick {
    pub fn new(x_adc_gpio: i32, y_adc_gpio: i32, sw_gpio: i32) -> Self {
        Self {
            _x_adc_gpio: x_adc_gpio,
            _y_adc_gpio: y_adc_gpio,
            sw_gpio,
        }
    }

    pub fn read(&self) -> JoystickReading {
        JoystickReading {
            x: self.read_x_adc() >> 2,
            y: self.read_y_adc() >> 2,
            pressed: self.read_switch(),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_x_adc(&self) -> u16 {
        hw_init::adc1_read(crate::pins::ADC1_CH_JOY_X)
    }

    #[cfg(target_os = "espidf")]
    fn read_y_adc(&self) -> u16 {
        hw_init::adc1_read(crate::pins::ADC1_CH_JOY_Y)
    }

    #[cfg(target_os = "espidf")]
    fn read_switch(&self) -> bool {
        // Active-low with pull-up: pressed pulls the line to ground.
        !hw_init::gpio_read(self.sw_gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_x_adc(&self) -> u16 {
        SIM_JOY_X_ADC.load(Ordering::Relaxed)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_y_adc(&self) -> u16 {
        SIM_JOY_Y_ADC.load(Ordering::Relaxed)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_switch(&self) -> bool {
        let _ = self.sw_gpio;
        SIM_JOY_PRESSED.load(Ordering::Relaxed)
    }
}

//! LDR ambient light sensor.
//!
//! Photoresistor in a voltage divider, read via the ESP32-S3 ADC. Higher
//! readings mean more light. The 12-bit ADC counts are scaled to the 10-bit
//! range the darkness threshold is calibrated against.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 channel 0 via the oneshot API (initialised by
//! hw_init). On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Defaults to a bright room (~800 on the 10-bit scale).
static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(3200);

/// Inject a raw 12-bit ADC value for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

pub struct LightSensor {
    _adc_gpio: i32,
}

impl LightSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    /// Ambient light level on the 10-bit scale (0–1023).
    pub fn read(&self) -> u16 {
        self.read_adc() >> 2
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(crate::pins::ADC1_CH_LIGHT)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_LIGHT_ADC.load(Ordering::Relaxed)
    }
}

//! MQ-series gas sensor.
//!
//! Analog output through the ESP32-S3 ADC; higher readings mean more gas.
//! The alarm threshold is calibrated on the 10-bit scale, so the 12-bit ADC
//! counts are scaled down before use. The heater element needs a warm-up
//! period after power-on during which readings run high; the alarm may beep
//! for the first minute in a freshly powered room.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 channel 1 via the oneshot API (initialised by
//! hw_init). On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_GAS_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject a raw 12-bit ADC value for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gas_adc(raw: u16) {
    SIM_GAS_ADC.store(raw, Ordering::Relaxed);
}

pub struct GasSensor {
    _adc_gpio: i32,
}

impl GasSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    /// Gas concentration on the 10-bit scale (0–1023).
    pub fn read(&self) -> u16 {
        self.read_adc() >> 2
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(crate::pins::ADC1_CH_GAS)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_GAS_ADC.load(Ordering::Relaxed)
    }
}

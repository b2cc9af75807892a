//! DHT11 temperature / humidity sensor.
//!
//! Single-wire protocol, bit-banged: the controller drives the data line low
//! for ~20 ms as a start signal, releases it, and the sensor answers with a
//! handshake followed by 40 bits encoded in the width of the high pulses
//! (~26 µs = 0, ~70 µs = 1). The fifth byte is a checksum over the first
//! four.
//!
//! A failed read (sensor missing, noise, checksum) is an `Err`, which the
//! hub turns into `NaN` readings. No caching, no retries — the next cycle
//! reads again.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the data GPIO with µs busy-waits. On host/test:
//! reads from static atomics for injection, including a forced-failure flag.

use crate::error::SensorError;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_BITS: AtomicU32 = AtomicU32::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_HUM_BITS: AtomicU32 = AtomicU32::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_FAIL: AtomicBool = AtomicBool::new(false);

/// Inject a climate reading for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_climate(temperature_c: f32, humidity_pct: f32) {
    SIM_TEMP_BITS.store(temperature_c.to_bits(), Ordering::Relaxed);
    SIM_HUM_BITS.store(humidity_pct.to_bits(), Ordering::Relaxed);
    SIM_FAIL.store(false, Ordering::Relaxed);
}

/// Make subsequent host reads fail (disconnected sensor).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_climate_failed() {
    SIM_FAIL.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

pub struct ClimateSensor {
    data_gpio: i32,
}

impl ClimateSensor {
    pub fn new(data_gpio: i32) -> Self {
        Self { data_gpio }
    }

    /// Perform one full sensor transaction.
    pub fn read(&mut self) -> Result<ClimateReading, SensorError> {
        self.read_impl()
    }

    // ── ESP-IDF implementation ───────────────────────────────

    #[cfg(target_os = "espidf")]
    fn read_impl(&mut self) -> Result<ClimateReading, SensorError> {
        use esp_idf_svc::sys::*;

        let pin = self.data_gpio;

        // Start signal: pull low ≥18 ms, release for 20–40 µs.
        // SAFETY: raw GPIO register access on a pin owned by this driver;
        // single-threaded main-loop context.
        unsafe {
            gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT);
            gpio_set_level(pin, 0);
            esp_rom_delay_us(20_000);
            gpio_set_level(pin, 1);
            esp_rom_delay_us(30);
            gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_INPUT);
        }

        // Sensor handshake: ~80 µs low, ~80 µs high, then the first bit.
        Self::wait_for_level(pin, false, 90)?;
        Self::wait_for_level(pin, true, 90)?;
        Self::wait_for_level(pin, false, 90)?;

        // 40 data bits: 50 µs low preamble, then a high pulse whose width
        // encodes the bit.
        let mut data = [0u8; 5];
        for i in 0..40 {
            Self::wait_for_level(pin, true, 70)?;
            let high_us = Self::pulse_width_us(pin, 100)?;
            if high_us > 45 {
                data[i / 8] |= 1 << (7 - (i % 8));
            }
        }

        let sum = data[0]
            .wrapping_add(data[1])
            .wrapping_add(data[2])
            .wrapping_add(data[3]);
        if sum != data[4] {
            return Err(SensorError::ChecksumMismatch);
        }

        // DHT11 payload: integral humidity / temperature with decimal bytes.
        let humidity_pct = f32::from(data[0]) + f32::from(data[1]) / 10.0;
        let temperature_c = f32::from(data[2]) + f32::from(data[3] & 0x0F) / 10.0;
        let temperature_c = if data[3] & 0x80 != 0 {
            -temperature_c
        } else {
            temperature_c
        };

        Ok(ClimateReading {
            temperature_c,
            humidity_pct,
        })
    }

    /// Busy-wait until the line reaches `level`, at most `timeout_us`.
    #[cfg(target_os = "espidf")]
    fn wait_for_level(pin: i32, level: bool, timeout_us: u32) -> Result<(), SensorError> {
        use esp_idf_svc::sys::*;

        let want = i32::from(level);
        // SAFETY: timer and GPIO level reads are side-effect-free register
        // accesses, safe from the main loop.
        let start = unsafe { esp_timer_get_time() };
        loop {
            if unsafe { gpio_get_level(pin) } == want {
                return Ok(());
            }
            if unsafe { esp_timer_get_time() } - start > i64::from(timeout_us) {
                return Err(SensorError::Timeout);
            }
        }
    }

    /// Measure how long the line stays high, at most `timeout_us`.
    #[cfg(target_os = "espidf")]
    fn pulse_width_us(pin: i32, timeout_us: u32) -> Result<u32, SensorError> {
        use esp_idf_svc::sys::*;

        // SAFETY: see wait_for_level.
        let start = unsafe { esp_timer_get_time() };
        loop {
            let elapsed = unsafe { esp_timer_get_time() } - start;
            if unsafe { gpio_get_level(pin) } == 0 {
                return Ok(elapsed as u32);
            }
            if elapsed > i64::from(timeout_us) {
                return Err(SensorError::Timeout);
            }
        }
    }

    // ── Host simulation ──────────────────────────────────────

    #[cfg(not(target_os = "espidf"))]
    fn read_impl(&mut self) -> Result<ClimateReading, SensorError> {
        let _ = self.data_gpio;
        if SIM_FAIL.load(Ordering::Relaxed) {
            return Err(SensorError::Timeout);
        }
        Ok(ClimateReading {
            temperature_c: f32::from_bits(SIM_TEMP_BITS.load(Ordering::Relaxed)),
            humidity_pct: f32::from_bits(SIM_HUM_BITS.load(Ordering::Relaxed)),
        })
    }
}

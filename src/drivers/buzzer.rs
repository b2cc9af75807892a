//! Piezo buzzer driver.
//!
//! Generates tones on an LEDC channel: the timer is retuned to the step's
//! frequency and the duty set to 50%; silence is duty 0. A pattern plays
//! **to completion** — each step's hold time is a blocking delay in the
//! calling task. The control loop accepts this stall (the chime is the worst
//! case at over half a second); there is no cancellation once a pattern has
//! started.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives LEDC channel 1 via hw_init and really sleeps.
//! On host/test: the same delays run as thread sleeps; state is in-memory.

use log::debug;

use crate::drivers::hw_init;
use crate::sounds::{SoundPattern, ToneStep};

/// 50% of the 10-bit duty range — loudest square wave the LEDC gives us.
const TONE_DUTY: u32 = 1 << 9;

pub struct Buzzer {
    sounding: bool,
}

impl Buzzer {
    pub fn new() -> Self {
        Self { sounding: false }
    }

    /// Play a pattern to completion, blocking for its full duration.
    pub fn play(&mut self, pattern: SoundPattern) {
        debug!("Buzzer: {:?} ({}ms)", pattern, pattern.duration_ms());
        for step in pattern.steps() {
            match step {
                ToneStep::Tone { freq_hz, hold_ms } => {
                    self.tone(freq_hz);
                    hw_init::delay_ms(hold_ms);
                }
                ToneStep::Silence { hold_ms } => {
                    self.silence();
                    hw_init::delay_ms(hold_ms);
                }
            }
        }
        self.silence();
    }

    /// Start a continuous tone at the given frequency.
    fn tone(&mut self, freq_hz: u16) {
        hw_init::ledc_set_freq(hw_init::LEDC_TIMER_BUZZER, u32::from(freq_hz));
        hw_init::ledc_set_duty(hw_init::LEDC_CH_BUZZER, TONE_DUTY);
        self.sounding = true;
    }

    /// Stop any tone immediately.
    pub fn silence(&mut self) {
        hw_init::ledc_set_duty(hw_init::LEDC_CH_BUZZER, 0);
        self.sounding = false;
    }

    /// Whether a tone is currently being driven.
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }
}

impl Default for Buzzer {
    fn default() -> Self {
        Self::new()
    }
}

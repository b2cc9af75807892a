//! Tone pattern definitions.
//!
//! Every audible event expands to a fixed sequence of [`ToneStep`]s so a
//! listener can tell the events apart without looking at the display. The
//! step data is pure and host-testable; executing a sequence on the buzzer
//! (including its blocking delays) is the driver's job.
//!
//! | Pattern   | Envelope                                        |
//! |-----------|-------------------------------------------------|
//! | Startup   | 1500 Hz, 200 ms                                 |
//! | DoorOpen  | 1000 Hz, 120 ms                                 |
//! | DoorClose | 600 Hz, 150 ms                                  |
//! | GasAlarm  | 2000 Hz, 150 ms (re-requested every alarm cycle)|
//! | Chime     | rising sweep · pause · confirmation · fall-off  |

use heapless::Vec;

/// One semantic sound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundPattern {
    /// Boot chirp played once when the controller comes up.
    Startup,
    /// Door-open confirmation.
    DoorOpen,
    /// Door-close confirmation, pitched below the open tone.
    DoorClose,
    /// Repeating gas alert beep.
    GasAlarm,
    /// Multi-step doorbell chime for the red button.
    Chime,
}

/// One command to the buzzer: hold a frequency or hold silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStep {
    Tone { freq_hz: u16, hold_ms: u32 },
    Silence { hold_ms: u32 },
}

impl ToneStep {
    pub fn hold_ms(&self) -> u32 {
        match self {
            Self::Tone { hold_ms, .. } | Self::Silence { hold_ms } => *hold_ms,
        }
    }
}

/// Sized for the longest pattern (the chime's two sweeps).
pub const MAX_STEPS: usize = 128;

/// Step sequence container.
pub type Steps = Vec<ToneStep, MAX_STEPS>;

// Chime envelope constants.
const CHIME_RISE_START_HZ: u16 = 600;
const CHIME_RISE_END_HZ: u16 = 900;
const CHIME_RISE_STEP_HZ: u16 = 5;
const CHIME_RISE_HOLD_MS: u32 = 2;
const CHIME_PAUSE_MS: u32 = 80;
const CHIME_CONFIRM_HZ: u16 = 1400;
const CHIME_CONFIRM_MS: u32 = 120;
const CHIME_CONFIRM_TAIL_MS: u32 = 30;
const CHIME_FALL_START_HZ: u16 = 1200;
const CHIME_FALL_END_HZ: u16 = 700;
const CHIME_FALL_STEP_HZ: u16 = 8;
const CHIME_FALL_HOLD_MS: u32 = 3;

impl SoundPattern {
    /// Expand the pattern into its tone/silence step sequence.
    pub fn steps(self) -> Steps {
        let mut steps = Steps::new();
        match self {
            Self::Startup => push(&mut steps, ToneStep::Tone { freq_hz: 1500, hold_ms: 200 }),
            Self::DoorOpen => push(&mut steps, ToneStep::Tone { freq_hz: 1000, hold_ms: 120 }),
            Self::DoorClose => push(&mut steps, ToneStep::Tone { freq_hz: 600, hold_ms: 150 }),
            Self::GasAlarm => push(&mut steps, ToneStep::Tone { freq_hz: 2000, hold_ms: 150 }),
            Self::Chime => {
                // Rising sweep into the bright confirmation beep.
                let mut f = CHIME_RISE_START_HZ;
                while f <= CHIME_RISE_END_HZ {
                    push(&mut steps, ToneStep::Tone { freq_hz: f, hold_ms: CHIME_RISE_HOLD_MS });
                    f += CHIME_RISE_STEP_HZ;
                }
                push(&mut steps, ToneStep::Silence { hold_ms: CHIME_PAUSE_MS });
                push(&mut steps, ToneStep::Tone {
                    freq_hz: CHIME_CONFIRM_HZ,
                    hold_ms: CHIME_CONFIRM_MS,
                });
                push(&mut steps, ToneStep::Silence { hold_ms: CHIME_CONFIRM_TAIL_MS });

                // Soft fade-out sweep.
                let mut f = CHIME_FALL_START_HZ;
                while f >= CHIME_FALL_END_HZ {
                    push(&mut steps, ToneStep::Tone { freq_hz: f, hold_ms: CHIME_FALL_HOLD_MS });
                    f -= CHIME_FALL_STEP_HZ;
                }
            }
        }
        steps
    }

    /// Wall-clock duration of the full pattern in milliseconds.
    ///
    /// The chime is the single largest latency source in the system: while it
    /// plays, the control loop is stalled and sensor readings go stale by
    /// this amount.
    pub fn duration_ms(self) -> u32 {
        self.steps().iter().map(ToneStep::hold_ms).sum()
    }
}

fn push(steps: &mut Steps, step: ToneStep) {
    // MAX_STEPS is sized for the longest pattern; overflow is a logic bug.
    let pushed = steps.push(step);
    debug_assert!(pushed.is_ok(), "tone pattern exceeds MAX_STEPS");
}

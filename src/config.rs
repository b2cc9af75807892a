//! System configuration parameters
//!
//! All tunable parameters for the Hauswart controller. Values are fixed at
//! startup; there is no runtime reconfiguration or persistence.

/// Core system configuration
#[derive(Debug, Clone)]
pub struct SystemConfig {
    // --- Light / door ---
    /// Light level (10-bit scale) below which it counts as dark
    pub dark_threshold: u16,
    /// Delay after opening before darkness may auto-close the door (ms)
    pub auto_close_delay_ms: u32,
    /// Servo angle for the open position (degrees)
    pub door_open_angle: u8,
    /// Servo angle for the closed position (degrees)
    pub door_closed_angle: u8,

    // --- Gas ---
    /// Gas level (10-bit scale) above which the alarm sounds
    pub gas_threshold: u16,

    // --- Joystick navigation ---
    /// Y-axis readings below this navigate up
    pub joy_low_band: u16,
    /// Y-axis readings above this navigate down
    pub joy_high_band: u16,
    /// Suppression window after a page change (milliseconds)
    pub nav_debounce_ms: u32,
    /// Number of display pages to cycle through
    pub total_pages: u8,

    // --- Timing ---
    /// Minimum control cycle period (milliseconds)
    pub cycle_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Light / door
            dark_threshold: 680,
            auto_close_delay_ms: 3000,
            door_open_angle: 0,
            door_closed_angle: 90,

            // Gas
            gas_threshold: 130,

            // Navigation (dead zone between the bands)
            joy_low_band: 300,
            joy_high_band: 700,
            nav_debounce_ms: 200,
            total_pages: 3,

            // Timing
            cycle_interval_ms: 50,       // 20 Hz floor
            telemetry_interval_secs: 60, // 1/min
        }
    }
}

impl SystemConfig {
    /// Debounce window expressed in control cycles (rounded up, at least 1).
    pub fn nav_debounce_cycles(&self) -> u32 {
        self.nav_debounce_ms.div_ceil(self.cycle_interval_ms).max(1)
    }
}

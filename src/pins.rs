//! GPIO / peripheral pin assignments for the Hauswart main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR photoresistor — voltage divider to ADC1 channel 0 (GPIO 1).
pub const LIGHT_ADC_GPIO: i32 = 1;
/// MQ-series gas sensor — analog output to ADC1 channel 1 (GPIO 2).
pub const GAS_ADC_GPIO: i32 = 2;
/// Joystick X axis potentiometer — ADC1 channel 2 (GPIO 3).
pub const JOY_X_ADC_GPIO: i32 = 3;
/// Joystick Y axis potentiometer — ADC1 channel 3 (GPIO 4).
pub const JOY_Y_ADC_GPIO: i32 = 4;

/// ADC1 channel numbers matching the GPIOs above (ESP32-S3: CHn = GPIO n+1).
pub const ADC1_CH_LIGHT: u32 = 0;
pub const ADC1_CH_GAS: u32 = 1;
pub const ADC1_CH_JOY_X: u32 = 2;
pub const ADC1_CH_JOY_Y: u32 = 3;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// Joystick centre switch. Active-low with internal pull-up.
pub const JOY_SW_GPIO: i32 = 5;
/// Red chime button. Active-low with internal pull-up.
pub const RED_BUTTON_GPIO: i32 = 6;
/// DHT11 climate sensor single-wire data line (open-drain, external pull-up).
pub const CLIMATE_DATA_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Door servo signal line (LEDC channel 0).
pub const SERVO_PWM_GPIO: i32 = 8;
/// Piezo buzzer (LEDC channel 1, frequency retuned per tone step).
pub const BUZZER_PWM_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// I²C bus (SSD1306 OLED)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 17;
pub const I2C_SCL_GPIO: i32 = 18;
/// SSD1306 7-bit I²C address.
pub const OLED_I2C_ADDR: u8 = 0x3C;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// Servo frame rate — standard RC servo timing (20 ms frame).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// Servo timer resolution (bits). 14-bit keeps ~1 µs pulse granularity.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;
/// Buzzer timer resolution (bits). Duty is fixed at 50%; only frequency moves.
pub const BUZZER_PWM_RESOLUTION_BITS: u32 = 10;
/// Buzzer timer frequency at init; retuned for every tone step.
pub const BUZZER_BASE_FREQ_HZ: u32 = 1_000;

use core::fmt;

/// Configuration for an [`Ohmmeter`](crate::Ohmmeter).
///
/// - `known_resistor_ohms`: The reference resistor of the voltage divider (Ω)
/// - `max_voltage`: The voltage corresponding to the largest value possible for the ADC (mV)
/// - `precision`: The precision of the ADC in bits (eg. for 12-bit precision, use `12`)
/// - `samples`: How many ADC readings are averaged for one measurement
/// - `sample_delay_ms`: Pause between two readings of the same measurement
/// - `refresh_delay_ms`: Pause after each measurement has been displayed
///
/// # Examples
///
/// ```
/// use ohmmeter::Config;
///
/// let config = Config {
///     known_resistor_ohms: 4_700.0, // 4.7 kΩ reference
///     precision: 10,                // 10 bits of precision
///     ..Config::default()
/// };
///
/// assert_eq!(config.full_scale(), 1023.0);
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub known_resistor_ohms: f32,
    pub max_voltage: u32,
    pub precision: u32,
    pub samples: u32,
    pub sample_delay_ms: u32,
    pub refresh_delay_ms: u32,
}

impl Default for Config {
    /// A 10 kΩ reference on a 12-bit, 3.31 V ADC, averaging 500 readings
    /// taken 1 ms apart and refreshing every 700 ms.
    fn default() -> Self {
        Self {
            known_resistor_ohms: 10_000.0,
            max_voltage: 3_310,
            precision: 12,
            samples: 500,
            sample_delay_ms: 1,
            refresh_delay_ms: 700,
        }
    }
}

impl Config {
    /// Checks the calibration constants, which must hold before any
    /// measurement is taken.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.known_resistor_ohms.is_finite() || self.known_resistor_ohms <= 0.0 {
            return Err(ConfigError::KnownResistor);
        }
        if self.max_voltage == 0 {
            return Err(ConfigError::MaxVoltage);
        }
        if !(1..=16).contains(&self.precision) {
            return Err(ConfigError::Precision);
        }
        if self.samples == 0 {
            return Err(ConfigError::Samples);
        }

        Ok(())
    }

    /// The largest code the ADC can return.
    pub fn full_scale(&self) -> f32 {
        ((1u64 << self.precision.min(32)) - 1) as f32
    }

    /// Converts an ADC code (or an average of codes) to millivolts.
    pub fn to_millivolts(&self, sample: f32) -> f32 {
        sample * self.max_voltage as f32 / self.full_scale()
    }
}

/// Calibration constants rejected by [`Config::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `known_resistor_ohms` is zero, negative, infinite or NaN.
    KnownResistor,
    /// `max_voltage` is zero.
    MaxVoltage,
    /// `precision` is outside `1..=16` bits.
    Precision,
    /// `samples` is zero.
    Samples,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ConfigError::KnownResistor => "known resistor must be a positive number of ohms",
            ConfigError::MaxVoltage => "ADC reference voltage must not be zero",
            ConfigError::Precision => "ADC precision must be between 1 and 16 bits",
            ConfigError::Samples => "at least one sample must be averaged",
        };
        f.write_str(message)
    }
}

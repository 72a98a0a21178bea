use crate::bands::{decode, BandDecoding, ColorBand};
use crate::config::{Config, ConfigError};
use crate::display::MeasurementDisplay;
use crate::estimate::{estimate, Estimate};
use crate::table::ResistorTable;
use core::convert::Infallible;
use core::fmt;
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;

type AdcError<Adc, ADC, Word, Pin> = <Adc as OneShot<ADC, Word, Pin>>::Error;

/// Everything derived from one averaged reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Mean of the raw ADC readings
    pub average: f32,
    pub estimate: Estimate,
    /// Index of the commercial value in the table
    pub index: usize,
    /// The table value closest to the estimate (Ω)
    pub commercial_ohms: f32,
    pub bands: BandDecoding,
}

impl Measurement {
    /// The color bands of the commercial value, in reading order.
    pub fn colors(&self) -> [ColorBand; 3] {
        self.bands.colors()
    }
}

/// A failure of one of the ohmmeter's collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<A, D> {
    /// The ADC returned an error.
    Adc(A),
    /// The display rejected a measurement.
    Display(D),
}

impl<A: fmt::Debug, D: fmt::Debug> fmt::Display for Error<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Adc(e) => write!(f, "ADC read failed: {:?}", e),
            Error::Display(e) => write!(f, "display update failed: {:?}", e),
        }
    }
}

/// Measures an unknown resistor through a voltage divider on an ADC pin.
///
/// The unknown resistor sits between the pin and ground, the reference
/// resistor from [`Config`] between the pin and the ADC reference.
#[derive(Debug)]
pub struct Ohmmeter<'a, Pin> {
    pin: Pin,
    config: Config,
    table: ResistorTable<'a>,
}

impl<Pin> Ohmmeter<'static, Pin> {
    /// Returns an ohmmeter using the provided `config` and the standard
    /// resistor values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{Config, ConfigError, Ohmmeter};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let ohmmeter = Ohmmeter::new(pin, Config::default());
    /// assert!(ohmmeter.is_ok());
    ///
    /// # let pin = MockChan0 {};
    /// let config = Config {
    ///     known_resistor_ohms: 0.0,
    ///     ..Config::default()
    /// };
    /// assert_eq!(Ohmmeter::new(pin, config).err(), Some(ConfigError::KnownResistor));
    /// ```
    pub fn new<ADC>(pin: Pin, config: Config) -> Result<Self, ConfigError>
    where
        Pin: Channel<ADC>,
    {
        Self::with_table(pin, config, ResistorTable::standard())
    }
}

impl<'a, Pin> Ohmmeter<'a, Pin> {
    /// Returns an ohmmeter that resolves estimates against `table`.
    pub fn with_table<ADC>(
        pin: Pin,
        config: Config,
        table: ResistorTable<'a>,
    ) -> Result<Self, ConfigError>
    where
        Pin: Channel<ADC>,
    {
        config.validate()?;

        Ok(Self { pin, config, table })
    }

    /// Destroys the ohmmeter and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &ResistorTable<'a> {
        &self.table
    }

    /// Reads the ADC `config.samples` times, waiting `config.sample_delay_ms`
    /// after each reading, and returns the mean.
    pub fn average<Adc, ADC, Word, Delay>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
    ) -> Result<f32, AdcError<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayMs<u32>,
    {
        let mut sum: u64 = 0;

        for _ in 0..self.config.samples {
            let sample: u32 = nb::block!(adc.read(&mut self.pin))?.into();
            sum += u64::from(sample);
            delay.delay_ms(self.config.sample_delay_ms);
        }

        Ok(sum as f32 / self.config.samples as f32)
    }

    /// Runs an averaged reading through estimation, table lookup and band
    /// decoding. Never fails: out of range estimates are clamped to the
    /// table and an open circuit reads as the largest table value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{BandDecoding, Config, Ohmmeter};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let ohmmeter = Ohmmeter::new(pin, Config::default()).unwrap();
    /// let measurement = ohmmeter.evaluate(2048.0);
    ///
    /// assert_eq!(measurement.commercial_ohms, 10_000.0);
    /// assert_eq!(measurement.bands, BandDecoding::new(1, 0, 3));
    /// ```
    pub fn evaluate(&self, average: f32) -> Measurement {
        let estimate = estimate(
            average,
            self.config.known_resistor_ohms,
            self.config.full_scale(),
        );

        #[cfg(feature = "defmt")]
        if estimate.is_open_circuit() {
            defmt::warn!("open circuit (average {=f32})", average);
        }

        let index = estimate.resolve(&self.table);
        let commercial_ohms = self.table.values()[index];

        Measurement {
            average,
            estimate,
            index,
            commercial_ohms,
            bands: decode(commercial_ohms),
        }
    }

    /// Takes an averaged reading and evaluates it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{BandDecoding, Config, Ohmmeter};
    /// # use embedded_hal_mock::{
    /// #     adc::{Mock, MockChan0, Transaction},
    /// #     delay::MockNoop,
    /// # };
    /// #
    /// # let expectations: [Transaction<u16>; 2] = [
    /// #     Transaction::read(0, 1210),
    /// #     Transaction::read(0, 1214),
    /// # ];
    /// # let mut adc = Mock::new(&expectations);
    /// # let mut delay = MockNoop::new();
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     samples: 2,
    ///     ..Config::default()
    /// };
    /// let mut ohmmeter = Ohmmeter::new(pin, config).unwrap();
    ///
    /// // An average of 1212 on a 10 kΩ divider is about 4.2 kΩ, sold as
    /// // 4.3 kΩ: yellow, orange, red
    /// let measurement = ohmmeter.measure(&mut adc, &mut delay).unwrap();
    /// assert_eq!(measurement.commercial_ohms, 4_300.0);
    /// assert_eq!(measurement.bands, BandDecoding::new(4, 3, 2));
    /// ```
    pub fn measure<Adc, ADC, Word, Delay>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
    ) -> Result<Measurement, AdcError<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayMs<u32>,
    {
        let average = self.average(adc, delay)?;
        let measurement = self.evaluate(average);

        #[cfg(feature = "defmt")]
        defmt::debug!("{}", measurement);

        Ok(measurement)
    }

    /// One iteration of the sampling loop: measures, hands the result to
    /// `display`, then waits `config.refresh_delay_ms`.
    pub fn refresh<Adc, ADC, Word, Delay, Display>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
        display: &mut Display,
    ) -> Result<Measurement, Error<AdcError<Adc, ADC, Word, Pin>, Display::Error>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayMs<u32>,
        Display: MeasurementDisplay,
    {
        let measurement = self.measure(adc, delay).map_err(Error::Adc)?;
        display.show(&measurement).map_err(Error::Display)?;
        delay.delay_ms(self.config.refresh_delay_ms);

        Ok(measurement)
    }

    /// Refreshes forever. Only returns if a collaborator fails.
    pub fn run<Adc, ADC, Word, Delay, Display>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
        display: &mut Display,
    ) -> Result<Infallible, Error<AdcError<Adc, ADC, Word, Pin>, Display::Error>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayMs<u32>,
        Display: MeasurementDisplay,
    {
        loop {
            self.refresh(adc, delay, display)?;
        }
    }
}

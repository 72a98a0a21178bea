//! Resistor ohmmeter for `embedded-hal` ADCs.
//!
//! An unknown resistor and a known reference resistor form a voltage
//! divider on an ADC pin. [`Ohmmeter`] averages the pin, [`estimate`]s the
//! unknown resistance, looks up the closest commercial value in a
//! [`ResistorTable`] and [`decode`]s that value into its three color bands.
//!
//! ```
//! use ohmmeter::{decode, estimate, ColorBand, ResistorTable};
//!
//! let table = ResistorTable::standard();
//!
//! let ohms = estimate(1212.0, 10_000.0, 4095.0).ohms();
//! let commercial = table.nearest_value(ohms);
//! let bands = decode(commercial);
//!
//! assert_eq!(commercial, 4_300.0);
//! assert_eq!(
//!     bands.colors(),
//!     [ColorBand::Yellow, ColorBand::Orange, ColorBand::Red]
//! );
//! ```

#![cfg_attr(not(test), no_std)]

mod bands;
mod config;
mod display;
mod estimate;
mod ohmmeter;
mod search;
mod table;

pub use bands::{decode, BandDecoding, ColorBand};
pub use config::{Config, ConfigError};
pub use display::MeasurementDisplay;
pub use estimate::{estimate, Estimate};
pub use ohmmeter::{Error, Measurement, Ohmmeter};
pub use table::{ResistorTable, TableError, STANDARD_LENGTH, STANDARD_VALUES};

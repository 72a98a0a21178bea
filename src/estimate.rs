use crate::table::ResistorTable;

/// Resistance estimated from an averaged ADC sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Estimate {
    /// Estimated resistance in Ω.
    Ohms(f32),
    /// The averaged sample reached full scale: nothing is connected, or the
    /// resistor is too large for the divider to tell apart from an open
    /// circuit.
    OpenCircuit,
}

impl Estimate {
    /// The estimate in Ω, `f32::INFINITY` for an open circuit.
    ///
    /// Meant for display. Use [`resolve`](Estimate::resolve) to look the
    /// estimate up in a table.
    pub fn ohms(&self) -> f32 {
        match self {
            Estimate::Ohms(ohms) => *ohms,
            Estimate::OpenCircuit => f32::INFINITY,
        }
    }

    pub fn is_open_circuit(&self) -> bool {
        matches!(self, Estimate::OpenCircuit)
    }

    /// Returns the index of the table entry closest to this estimate.
    ///
    /// An open circuit resolves to the largest entry.
    pub fn resolve(&self, table: &ResistorTable<'_>) -> usize {
        match self {
            Estimate::Ohms(ohms) => table.nearest(*ohms),
            Estimate::OpenCircuit => table.last_index(),
        }
    }
}

/// Estimates the unknown resistor of a voltage divider.
///
/// `averaged_sample` is the mean ADC reading across the unknown resistor,
/// `known_resistor_ohms` the reference resistor on the other leg and
/// `full_scale` the largest code the ADC can return (`4095` for 12 bits):
///
/// `R = known_resistor_ohms * averaged_sample / (full_scale - averaged_sample)`
///
/// Samples at (or above) full scale would divide by zero and are reported
/// as [`Estimate::OpenCircuit`] instead.
///
/// # Examples
///
/// ```
/// use ohmmeter::{estimate, Estimate};
///
/// let midscale = estimate(2047.5, 10_000.0, 4095.0);
/// assert_eq!(midscale, Estimate::Ohms(10_000.0));
///
/// assert_eq!(estimate(4095.0, 10_000.0, 4095.0), Estimate::OpenCircuit);
/// ```
pub fn estimate(averaged_sample: f32, known_resistor_ohms: f32, full_scale: f32) -> Estimate {
    if averaged_sample.is_nan() || averaged_sample >= full_scale {
        return Estimate::OpenCircuit;
    }

    Estimate::Ohms(known_resistor_ohms * averaged_sample / (full_scale - averaged_sample))
}

use crate::search::nearest_index;
use core::fmt;

/// Number of entries in [`STANDARD_VALUES`].
pub const STANDARD_LENGTH: usize = 54;

/// Standard resistor values (Ω) from 510 Ω to 100 kΩ, in ascending order.
pub static STANDARD_VALUES: [f32; STANDARD_LENGTH] = [
    510.0, 560.0, 620.0, 680.0, 750.0, 820.0, 910.0, //
    1_000.0, 1_100.0, 1_200.0, 1_300.0, 1_500.0, 1_800.0, 2_000.0, 2_200.0, 2_400.0, 2_700.0,
    3_000.0, 3_300.0, 3_600.0, 3_900.0, 4_300.0, 4_700.0, 5_100.0, 5_600.0, 6_200.0, 6_800.0,
    7_500.0, 8_200.0, 9_100.0, //
    10_000.0, 11_000.0, 12_000.0, 13_000.0, 15_000.0, 18_000.0, 20_000.0, 22_000.0, 24_000.0,
    27_000.0, 30_000.0, 33_000.0, 36_000.0, 39_000.0, 43_000.0, 47_000.0, 51_000.0, 56_000.0,
    62_000.0, 68_000.0, 75_000.0, 82_000.0, 91_000.0, //
    100_000.0,
];

/// Reasons a table of resistor values is rejected by [`ResistorTable::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// The table has no entries.
    Empty,
    /// The entry at this index is zero, negative, infinite or NaN.
    NotPositive(usize),
    /// The entry at this index is not strictly greater than the one before it.
    NotAscending(usize),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "resistor table is empty"),
            TableError::NotPositive(index) => {
                write!(f, "resistor table entry {} is not a positive value", index)
            }
            TableError::NotAscending(index) => {
                write!(f, "resistor table entry {} is not in ascending order", index)
            }
        }
    }
}

/// A read-only table of commercially available resistor values.
///
/// The table is never empty and its entries are strictly ascending, which
/// is what [`nearest`](ResistorTable::nearest) relies on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistorTable<'a> {
    values: &'a [f32],
}

impl ResistorTable<'static> {
    /// The 54 standard values in [`STANDARD_VALUES`].
    pub fn standard() -> Self {
        Self {
            values: &STANDARD_VALUES,
        }
    }
}

impl<'a> ResistorTable<'a> {
    /// Returns a table over `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{ResistorTable, TableError};
    ///
    /// let table = ResistorTable::new(&[100.0, 220.0, 470.0]).unwrap();
    /// assert_eq!(table.nearest_value(300.0), 220.0);
    ///
    /// assert_eq!(
    ///     ResistorTable::new(&[220.0, 100.0]),
    ///     Err(TableError::NotAscending(1))
    /// );
    /// ```
    pub fn new(values: &'a [f32]) -> Result<Self, TableError> {
        if values.is_empty() {
            return Err(TableError::Empty);
        }

        if let Some(index) = values
            .iter()
            .position(|value| !value.is_finite() || *value <= 0.0)
        {
            return Err(TableError::NotPositive(index));
        }

        if let Some(index) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(TableError::NotAscending(index + 1));
        }

        Ok(Self { values })
    }

    /// The entries, smallest first.
    pub fn values(&self) -> &'a [f32] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Smallest value in the table.
    pub fn first(&self) -> f32 {
        self.values[0]
    }

    /// Largest value in the table.
    pub fn last(&self) -> f32 {
        self.values[self.values.len() - 1]
    }

    /// Index of the last (largest) entry.
    pub fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns the index of the entry closest to `target`.
    ///
    /// Every input maps to a valid index: values below the table resolve
    /// to the first entry, values above it (including `+∞`) to the last.
    /// An exact tie between two neighbours resolves to the larger one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::ResistorTable;
    ///
    /// let table = ResistorTable::standard();
    ///
    /// assert_eq!(table.get(table.nearest(4650.0)), Some(4700.0));
    /// assert_eq!(table.nearest(-100.0), 0);
    /// assert_eq!(table.nearest(500_000.0), table.last_index());
    /// ```
    pub fn nearest(&self, target: f32) -> usize {
        nearest_index(self.values, target)
    }

    /// Returns the entry closest to `target`.
    pub fn nearest_value(&self, target: f32) -> f32 {
        self.values[self.nearest(target)]
    }
}

impl Default for ResistorTable<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResistorTable<'static> {
        ResistorTable::standard()
    }

    fn brute_force_nearest(values: &[f32], target: f32) -> usize {
        let mut best = 0;
        for (index, value) in values.iter().enumerate() {
            let distance = (target - value).abs();
            let best_distance = (target - values[best]).abs();
            // `<=` so that ties move on to the larger value
            if distance <= best_distance {
                best = index;
            }
        }
        best
    }

    #[test]
    fn standard_table_is_valid() {
        assert_eq!(ResistorTable::new(&STANDARD_VALUES), Ok(table()));
        assert_eq!(table().len(), 54);
        assert_eq!(table().first(), 510.0);
        assert_eq!(table().last(), 100_000.0);
        assert!(!table().is_empty());
    }

    #[test]
    fn rejects_invalid_tables() {
        assert_eq!(ResistorTable::new(&[]), Err(TableError::Empty));
        assert_eq!(
            ResistorTable::new(&[10.0, 0.0, 30.0]),
            Err(TableError::NotPositive(1))
        );
        assert_eq!(
            ResistorTable::new(&[10.0, f32::NAN]),
            Err(TableError::NotPositive(1))
        );
        assert_eq!(
            ResistorTable::new(&[10.0, 20.0, 20.0]),
            Err(TableError::NotAscending(2))
        );
        assert_eq!(
            ResistorTable::new(&[30.0, 20.0, 10.0]),
            Err(TableError::NotAscending(1))
        );
        assert_eq!(
            format!("{}", TableError::NotAscending(1)),
            "resistor table entry 1 is not in ascending order"
        );
    }

    #[test]
    fn exact_value() {
        let index = table().nearest(4700.0);
        assert_eq!(table().get(index), Some(4700.0));
        assert_eq!(index, 22);
    }

    #[test]
    fn nearest_neighbour() {
        assert_eq!(table().nearest_value(4650.0), 4700.0);
        assert_eq!(table().nearest_value(4400.0), 4300.0);
        assert_eq!(table().nearest_value(10_011.77), 10_000.0);
    }

    #[test]
    fn tie_goes_to_larger_value() {
        // halfway between 4300 and 4700
        assert_eq!(table().nearest_value(4500.0), 4700.0);
        // halfway between 91k and 100k
        assert_eq!(table().nearest_value(95_500.0), 100_000.0);
    }

    #[test]
    fn clamps_to_table_range() {
        assert_eq!(table().nearest(-100.0), 0);
        assert_eq!(table().nearest(0.0), 0);
        assert_eq!(table().nearest(510.0), 0);
        assert_eq!(table().nearest(500_000.0), table().last_index());
        assert_eq!(table().nearest(100_000.0), table().last_index());
        assert_eq!(table().nearest(f32::INFINITY), table().last_index());
    }

    #[test]
    fn agrees_with_brute_force() {
        let mut target = -1_000.0;
        while target < 120_000.0 {
            assert_eq!(
                table().nearest(target),
                brute_force_nearest(&STANDARD_VALUES, target),
                "target {}",
                target
            );
            target += 37.5;
        }
    }

    #[test]
    fn midpoints_between_neighbours() {
        for pair in STANDARD_VALUES.windows(2) {
            let midpoint = (pair[0] + pair[1]) / 2.0;
            assert_eq!(table().nearest_value(midpoint), pair[1]);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut target = 0.0;
        while target < 150_000.0 {
            let value = table().nearest_value(target);
            assert_eq!(table().nearest_value(value), value);
            target += 123.0;
        }
    }
}

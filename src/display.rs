use crate::ohmmeter::Measurement;

/// Where finished measurements go: an OLED, an LED matrix, a serial port.
///
/// # Example Implementation
///
/// ```ignore
/// struct OledPanel<DI> {
///     display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
/// }
///
/// impl<DI: WriteOnlyDataCommand> MeasurementDisplay for OledPanel<DI> {
///     type Error = DisplayError;
///
///     fn show(&mut self, measurement: &Measurement) -> Result<(), Self::Error> {
///         self.display.clear_buffer();
///         for (row, color) in measurement.colors().iter().enumerate() {
///             draw_text(&mut self.display, color.name(), 8, 6 + 10 * row as i32)?;
///         }
///         self.display.flush()
///     }
/// }
/// ```
pub trait MeasurementDisplay {
    type Error;

    /// Shows one measurement. Called once per refresh.
    fn show(&mut self, measurement: &Measurement) -> Result<(), Self::Error>;
}

/// ProgressReporter port for reporting progress during the upload
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// stdout stays reserved for the final result.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Signals that a potentially slow step has started
    ///
    /// The step ends with the next call to `report_completion` or `report_error`.
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

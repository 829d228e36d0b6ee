use std::io;

pub use super::model::{DiskContext, DiskKey, Metric};

/// Receives what the scanner extracts, line by line.
///
/// Implementations decide whether a sample is written out immediately or
/// buffered until [`MetricSink::finish`].
pub trait MetricSink {
    /// A metric parsed on the current line, with the context in effect
    /// for that line.
    fn record_metric(&mut self, context: &DiskContext, metric: Metric, value: f64) -> io::Result<()>;

    /// Whether `Size:` lines should be parsed at all.
    fn tracks_size(&self) -> bool {
        false
    }

    /// A disk capacity in GB. Only called when `tracks_size` is true.
    fn record_size(&mut self, _key: DiskKey, _size_gb: f64) {}

    /// Called once after the last line, including after a scan-level error.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

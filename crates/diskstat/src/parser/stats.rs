/// Counters for a single scan, logged at debug level when it ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_scanned: u64,
    pub bytes_scanned: u64,
    pub context_updates: u64,
    pub metrics_captured: u64,
    /// Metric captures whose value did not parse
    pub captures_discarded: u64,
    pub sizes_recorded: u64,
    pub sizes_rejected: u64,
}

impl ScanStats {
    #[inline]
    pub fn record_line(&mut self, len: usize) {
        self.lines_scanned += 1;
        self.bytes_scanned += len as u64;
    }

    #[inline]
    pub fn record_context_update(&mut self) {
        self.context_updates += 1;
    }

    #[inline]
    pub fn record_capture(&mut self, parsed: bool) {
        if parsed {
            self.metrics_captured += 1;
        } else {
            self.captures_discarded += 1;
        }
    }

    #[inline]
    pub fn record_size(&mut self, parsed: bool) {
        if parsed {
            self.sizes_recorded += 1;
        } else {
            self.sizes_rejected += 1;
        }
    }

    /// Share of metric captures that produced a value (1.0 when none seen).
    pub fn capture_rate(&self) -> f64 {
        let total = self.metrics_captured + self.captures_discarded;
        if total > 0 {
            self.metrics_captured as f64 / total as f64
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_empty() {
        let stats = ScanStats::default();
        assert_eq!(stats.lines_scanned, 0);
        assert_eq!(stats.metrics_captured, 0);
        assert_eq!(stats.capture_rate(), 1.0);
    }

    #[test]
    fn test_record_line_counts_bytes() {
        let mut stats = ScanStats::default();
        stats.record_line(10);
        stats.record_line(5);
        assert_eq!(stats.lines_scanned, 2);
        assert_eq!(stats.bytes_scanned, 15);
    }

    #[test]
    fn test_capture_rate() {
        let mut stats = ScanStats::default();
        stats.record_capture(true);
        stats.record_capture(true);
        stats.record_capture(false);
        stats.record_capture(false);
        assert_eq!(stats.metrics_captured, 2);
        assert_eq!(stats.captures_discarded, 2);
        assert_eq!(stats.capture_rate(), 0.5);
    }

    #[test]
    fn test_record_size() {
        let mut stats = ScanStats::default();
        stats.record_size(true);
        stats.record_size(false);
        stats.record_size(false);
        assert_eq!(stats.sizes_recorded, 1);
        assert_eq!(stats.sizes_rejected, 2);
    }
}

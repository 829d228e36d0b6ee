use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::conf::ReportConfig;
use crate::parser::traits::{DiskContext, DiskKey, Metric, MetricSink};

/// Everything captured for one disk slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskRecord {
    /// Last value seen per metric
    pub metrics: BTreeMap<Metric, f64>,
    /// Capacity in GB, descriptive only
    pub size_gb: Option<f64>,
}

/// Buffers metrics per disk and writes one line-protocol record per disk
/// when the scan finishes, sorted by box then bay.
pub struct LineProtocolSink<W: Write> {
    out: W,
    disks: BTreeMap<DiskKey, DiskRecord>,
    measurement: String,
    precision: usize,
    size_tag: bool,
}

impl<W: Write> LineProtocolSink<W> {
    pub fn new(out: W, config: &ReportConfig) -> Self {
        Self {
            out,
            disks: BTreeMap::new(),
            measurement: config.measurement.clone(),
            precision: config.precision,
            size_tag: config.size_tag,
        }
    }

    /// Disks captured so far and not yet written.
    pub fn disks(&self) -> &BTreeMap<DiskKey, DiskRecord> {
        &self.disks
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MetricSink for LineProtocolSink<W> {
    fn record_metric(&mut self, context: &DiskContext, metric: Metric, value: f64) -> io::Result<()> {
        self.disks
            .entry(context.key())
            .or_default()
            .metrics
            .insert(metric, value);
        Ok(())
    }

    fn tracks_size(&self) -> bool {
        true
    }

    fn record_size(&mut self, key: DiskKey, size_gb: f64) {
        self.disks.entry(key).or_default().size_gb = Some(size_gb);
    }

    fn finish(&mut self) -> io::Result<()> {
        let disks = std::mem::take(&mut self.disks);
        for (key, record) in &disks {
            let size_gb = if self.size_tag { record.size_gb } else { None };
            if let Some(line) = render_record(&self.measurement, *key, &record.metrics, size_gb, self.precision) {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }
}

/// Render `measurement,box=B,bay=N[,size_gb=S] m1=v1,m2=v2`.
///
/// Returns `None` when there are no metrics: a size alone is not a record.
/// The size tag is truncated to an integer to keep float noise out of tag
/// values.
pub fn render_record(
    measurement: &str,
    key: DiskKey,
    metrics: &BTreeMap<Metric, f64>,
    size_gb: Option<f64>,
    precision: usize,
) -> Option<String> {
    if metrics.is_empty() {
        return None;
    }

    let mut line = format!("{},box={},bay={}", measurement, key.box_id, key.bay_id);
    if let Some(size) = size_gb {
        let _ = write!(line, ",size_gb={}", size as i64);
    }

    let fields = metrics
        .iter()
        .map(|(metric, value)| format!("{}={:.*}", metric, precision, value))
        .collect::<Vec<_>>()
        .join(",");
    line.push(' ');
    line.push_str(&fields);

    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{scan, PatternSet};

    fn aggregate(input: &str, config: &ReportConfig) -> String {
        let patterns = PatternSet::new().unwrap();
        let mut sink = LineProtocolSink::new(Vec::new(), config);
        scan(&patterns, input.as_bytes(), &mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    // ── End to end ──────────────────────────────────────────────

    #[test]
    fn test_size_and_power_on_example() {
        let out = aggregate(
            "  Box: 1\n  Bay: 1\n  Size: 1 TB\n  Power On Hours: 100\n",
            &ReportConfig::default(),
        );
        assert_eq!(out, "disk,box=1,bay=1,size_gb=1024 power_on_hours=100.000000\n");
    }

    #[test]
    fn test_disks_sorted_by_box_then_bay() {
        let input = "\
  Box: 2
  Bay: 1
  Status: OK
  Box: 1
  Bay: 5
  Status: Failed
";
        let out = aggregate(input, &ReportConfig::default());
        assert_eq!(
            out,
            "disk,box=1,bay=5 status=0.000000\n\
             disk,box=2,bay=1 status=1.000000\n"
        );
    }

    #[test]
    fn test_bays_sorted_numerically() {
        let input = "  Bay: 10\n  Status: OK\n  Bay: 9\n  Status: OK\n";
        let out = aggregate(input, &ReportConfig::default());
        let bays: Vec<&str> = out.lines().map(|l| l.split(' ').next().unwrap()).collect();
        assert_eq!(bays, vec!["disk,box=1,bay=9", "disk,box=1,bay=10"]);
    }

    #[test]
    fn test_metrics_sorted_by_name() {
        let input = "\
  Usage remaining: 98.5%
  Status: OK
  Power On Hours: 7
  Current Temperature (C): 30
";
        let out = aggregate(input, &ReportConfig::default());
        assert_eq!(
            out,
            "disk,box=1,bay=1 current_temperature=30.000000,power_on_hours=7.000000,status=1.000000,usage_remaining=98.500000\n"
        );
    }

    #[test]
    fn test_last_value_wins() {
        let input = "  Power On Hours: 1\n  Power On Hours: 2\n  Size: 1 TB\n  Size: 480 GB\n";
        let out = aggregate(input, &ReportConfig::default());
        assert_eq!(out, "disk,box=1,bay=1,size_gb=480 power_on_hours=2.000000\n");
    }

    #[test]
    fn test_size_without_metrics_emits_nothing() {
        let out = aggregate("  Bay: 4\n  Size: 2 TB\n", &ReportConfig::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_size_unit_no_tag() {
        let out = aggregate("  Size: 7 PB\n  Status: OK\n", &ReportConfig::default());
        assert_eq!(out, "disk,box=1,bay=1 status=1.000000\n");
    }

    #[test]
    fn test_fractional_size_truncated() {
        let out = aggregate("  Size: 1.2 TB\n  Status: OK\n", &ReportConfig::default());
        assert_eq!(out, "disk,box=1,bay=1,size_gb=1228 status=1.000000\n");
    }

    #[test]
    fn test_interface_type_not_part_of_identity() {
        let input = "  Interface Type: SAS\n  Status: OK\n  Interface Type: SATA\n  Power On Hours: 3\n";
        let out = aggregate(input, &ReportConfig::default());
        assert_eq!(out, "disk,box=1,bay=1 power_on_hours=3.000000,status=1.000000\n");
    }

    #[test]
    fn test_no_matches_no_output() {
        assert!(aggregate("controller slot 0\n", &ReportConfig::default()).is_empty());
    }

    #[test]
    fn test_output_is_deterministic() {
        let input = "\
  Box: 3
  Bay: 2
  Status: OK
  Box: 1
  Bay: 8
  Maximum Temperature (C): 50
  Current Temperature (C): 31
  Box: 2
  Bay: 1
  Power On Hours: 4
";
        let first = aggregate(input, &ReportConfig::default());
        let second = aggregate(input, &ReportConfig::default());
        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 3);
    }

    // ── Config ──────────────────────────────────────────────────

    #[test]
    fn test_measurement_and_size_tag_from_config() {
        let config = ReportConfig {
            measurement: "smart".to_string(),
            size_tag: false,
            precision: 0,
            ..ReportConfig::default()
        };
        let out = aggregate("  Size: 2 TB\n  Power On Hours: 5\n", &config);
        assert_eq!(out, "smart,box=1,bay=1 power_on_hours=5\n");
    }

    // ── render_record ───────────────────────────────────────────

    #[test]
    fn test_render_record_empty_metrics() {
        assert_eq!(render_record("disk", DiskKey::new(1, 1), &BTreeMap::new(), Some(512.0), 6), None);
    }

    #[test]
    fn test_render_record_with_size() {
        let mut metrics = BTreeMap::new();
        metrics.insert(Metric::Status, 1.0);
        metrics.insert(Metric::EstimatedLifeRemaining, 4058.0);
        let line = render_record("disk", DiskKey::new(1, 3), &metrics, Some(2048.0), 6).unwrap();
        assert_eq!(
            line,
            "disk,box=1,bay=3,size_gb=2048 estimated_life_remaining=4058.000000,status=1.000000"
        );
    }

    #[test]
    fn test_sink_keeps_disks_until_finish() {
        let mut sink = LineProtocolSink::new(Vec::new(), &ReportConfig::default());
        let ctx = DiskContext::default();
        sink.record_metric(&ctx, Metric::Status, 1.0).unwrap();
        sink.record_size(ctx.key(), 512.0);
        assert_eq!(sink.disks().len(), 1);

        sink.finish().unwrap();
        assert!(sink.disks().is_empty());
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "disk,box=1,bay=1,size_gb=512 status=1.000000\n"
        );
    }
}

use std::io::{self, Write};

use crate::conf::ReportConfig;
use crate::parser::traits::{DiskContext, Metric, MetricSink};

/// Writes `box <B> bay <N> type <T>: disk_<metric>: <value>` for every
/// metric the moment it is scanned.
pub struct StreamSink<W: Write> {
    out: W,
    metric_prefix: String,
    precision: usize,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W, config: &ReportConfig) -> Self {
        Self {
            out,
            metric_prefix: config.metric_prefix.clone(),
            precision: config.precision,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MetricSink for StreamSink<W> {
    fn record_metric(&mut self, context: &DiskContext, metric: Metric, value: f64) -> io::Result<()> {
        writeln!(
            self.out,
            "box {} bay {} type {}: {}{}: {:.*}",
            context.box_id,
            context.bay_id,
            context.disk_type,
            self.metric_prefix,
            metric,
            self.precision,
            value
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

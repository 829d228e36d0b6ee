//! Scanner: the single pass over a report.
//!
//! For every line the context markers are applied first, then each metric
//! pattern is tried, then (for sinks that track it) the size pattern.

use std::io;

use grep_searcher::LineIter;
use tracing::{debug, error, warn};

use super::model::{DiskContext, ParseError};
use super::patterns::{Capture, PatternSet};
use super::size::parse_size_gb;
use super::stats::ScanStats;
use super::traits::MetricSink;
use super::DEFAULT_MAX_LINE_SIZE;

/// Outcome of a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub stats: ScanStats,
    /// Set when the scan stopped before the end of the input
    pub error: Option<ParseError>,
}

impl ScanReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Scanner<'p> {
    patterns: &'p PatternSet,
    max_line_bytes: usize,
}

impl<'p> Scanner<'p> {
    pub fn new(patterns: &'p PatternSet) -> Self {
        Self {
            patterns,
            max_line_bytes: DEFAULT_MAX_LINE_SIZE,
        }
    }

    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    /// Scan `content` and feed everything found into `sink`.
    ///
    /// Only sink I/O failures are returned as `Err`. A line longer than the
    /// limit ends the scan early; it is logged and reported in
    /// [`ScanReport::error`] after the sink has been finished.
    pub fn scan<S>(&self, content: &[u8], sink: &mut S) -> io::Result<ScanReport>
    where
        S: MetricSink + ?Sized,
    {
        let mut context = DiskContext::default();
        let mut stats = ScanStats::default();
        let mut scan_error = None;

        for (index, raw) in LineIter::new(b'\n', content).enumerate() {
            let line = strip_line_terminator(raw);
            if line.len() > self.max_line_bytes {
                scan_error = Some(ParseError::LineTooLarge {
                    line: index + 1,
                    len: line.len(),
                    max: self.max_line_bytes,
                });
                break;
            }
            stats.record_line(line.len());

            self.update_context(line, &mut context, &mut stats);
            self.extract_metrics(line, &context, sink, &mut stats)?;
            if sink.tracks_size() {
                self.extract_size(line, &context, sink, &mut stats);
            }
        }

        sink.finish()?;

        if let Some(err) = &scan_error {
            error!("error reading input: {}", err);
        }
        debug!(
            lines = stats.lines_scanned,
            metrics = stats.metrics_captured,
            discarded = stats.captures_discarded,
            sizes = stats.sizes_recorded,
            "scan finished"
        );

        Ok(ScanReport {
            stats,
            error: scan_error,
        })
    }

    fn update_context(&self, line: &[u8], context: &mut DiskContext, stats: &mut ScanStats) {
        if let Some(bay) = self.patterns.bay.capture(line).and_then(parse_id) {
            context.bay_id = bay;
            stats.record_context_update();
        }
        if let Some(box_id) = self.patterns.box_id.capture(line).and_then(parse_id) {
            context.box_id = box_id;
            stats.record_context_update();
        }
        if let Some(disk_type) = self.patterns.interface_type.capture(line) {
            context.disk_type = String::from_utf8_lossy(disk_type).into_owned();
            stats.record_context_update();
        }
    }

    fn extract_metrics<S>(
        &self,
        line: &[u8],
        context: &DiskContext,
        sink: &mut S,
        stats: &mut ScanStats,
    ) -> io::Result<()>
    where
        S: MetricSink + ?Sized,
    {
        for entry in &self.patterns.metrics {
            let Some(raw) = entry.pattern.capture(line) else {
                continue;
            };
            let value = match entry.capture {
                Capture::Number => parse_number(raw),
                Capture::Ok => Some(parse_status(raw)),
            };
            stats.record_capture(value.is_some());
            if let Some(value) = value {
                sink.record_metric(context, entry.metric, value)?;
            }
        }
        Ok(())
    }

    fn extract_size<S>(&self, line: &[u8], context: &DiskContext, sink: &mut S, stats: &mut ScanStats)
    where
        S: MetricSink + ?Sized,
    {
        let Some(raw) = self.patterns.size.capture(line) else {
            return;
        };
        match parse_size_gb(raw) {
            Ok(size_gb) => {
                stats.record_size(true);
                sink.record_size(context.key(), size_gb);
            }
            Err(e) => {
                stats.record_size(false);
                warn!("Error parsing size: {}", e);
            }
        }
    }
}

/// Convenience wrapper: scan with default limits.
pub fn scan<S>(patterns: &PatternSet, content: &[u8], sink: &mut S) -> io::Result<ScanReport>
where
    S: MetricSink + ?Sized,
{
    Scanner::new(patterns).scan(content, sink)
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_id(raw: &[u8]) -> Option<i64> {
    std::str::from_utf8(raw).ok()?.trim().parse().ok()
}

fn parse_number(raw: &[u8]) -> Option<f64> {
    std::str::from_utf8(raw).ok()?.trim().parse().ok()
}

fn parse_status(raw: &[u8]) -> f64 {
    let ok = std::str::from_utf8(raw).map(|s| s.trim() == "OK").unwrap_or(false);
    if ok {
        1.0
    } else {
        0.0
    }
}

// ── Tests ───────────────────────────────────────────────────────

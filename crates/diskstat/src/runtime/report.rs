//! Report: wire a scan to the chosen output sink.

use std::io::{self, Write};

use crate::conf::ReportConfig;
use crate::output::{LineProtocolSink, StreamSink};
use crate::parser::{PatternSet, ScanReport, Scanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One labelled line per metric, in input order
    Stream,
    /// One line-protocol record per disk, sorted
    LineProtocol,
}

/// Scan `content` and write the result for `mode` to `out`.
pub fn write_report<W: Write>(
    mode: OutputMode,
    content: &[u8],
    patterns: &PatternSet,
    config: &ReportConfig,
    out: W,
) -> io::Result<ScanReport> {
    let scanner = Scanner::new(patterns).with_max_line_bytes(config.max_line_bytes);
    match mode {
        OutputMode::Stream => scanner.scan(content, &mut StreamSink::new(out, config)),
        OutputMode::LineProtocol => scanner.scan(content, &mut LineProtocolSink::new(out, config)),
    }
}

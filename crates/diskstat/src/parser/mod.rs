/// Contextual line parser for storage-controller disk reports
///
/// Turns the free-form text printed by RAID/SMART utilities into numeric
/// samples keyed by disk slot.
///
/// # Architecture
///
/// - `patterns.rs`: compiled matchers for context markers and metrics
/// - `scanner.rs`: single-pass line scanner tracking box/bay/type context
/// - `traits.rs`: `MetricSink`, the pluggable output strategy
/// - `size.rs`: `Size:` capture normalisation to gigabytes
/// - `stats.rs`: per-scan counters
///
/// # Leniency
///
/// The source format is not validated. Unknown lines are ignored and a
/// value that fails to parse drops only that one match.

pub mod model;
pub mod patterns;
pub mod scanner;
pub mod size;
pub mod stats;
pub mod traits;

// Re-export commonly used types
pub use model::{DiskContext, DiskKey, Metric, ParseError, SizeError};
pub use patterns::{PatternError, PatternSet};
pub use scanner::{scan, ScanReport, Scanner};
pub use stats::ScanStats;
pub use traits::MetricSink;

// Constants
pub const DEFAULT_MAX_LINE_SIZE: usize = 64 * 1024; // 64KB
pub const DEFAULT_DISK_TYPE: &str = "none";

use std::fmt;
use std::num::ParseFloatError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DEFAULT_DISK_TYPE;

/// Metrics extracted from a controller report.
///
/// Variants are declared in lexicographic order of their names, so ordered
/// collections keyed by `Metric` iterate in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Current drive temperature (unit stripped)
    CurrentTemperature,
    /// Raw number captured from the "... to date: N days" line
    EstimatedLifeRemaining,
    /// Highest temperature the drive has recorded
    MaximumTemperature,
    PowerOnHours,
    /// 1.0 when the drive reports "OK", 0.0 otherwise
    Status,
    /// SSD wear indicator, percent remaining
    UsageRemaining,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::CurrentTemperature,
        Metric::EstimatedLifeRemaining,
        Metric::MaximumTemperature,
        Metric::PowerOnHours,
        Metric::Status,
        Metric::UsageRemaining,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::CurrentTemperature => "current_temperature",
            Metric::EstimatedLifeRemaining => "estimated_life_remaining",
            Metric::MaximumTemperature => "maximum_temperature",
            Metric::PowerOnHours => "power_on_hours",
            Metric::Status => "status",
            Metric::UsageRemaining => "usage_remaining",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical slot of a disk: enclosure box and bay.
///
/// Field order matters: the derived `Ord` sorts by box, then bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiskKey {
    pub box_id: i64,
    pub bay_id: i64,
}

impl DiskKey {
    pub fn new(box_id: i64, bay_id: i64) -> Self {
        Self { box_id, bay_id }
    }
}

/// Positional state carried from line to line while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskContext {
    pub box_id: i64,
    pub bay_id: i64,
    /// Interface type as printed by the controller ("SAS", "SATA", ...)
    pub disk_type: String,
}

impl DiskContext {
    pub fn key(&self) -> DiskKey {
        DiskKey::new(self.box_id, self.bay_id)
    }
}

impl Default for DiskContext {
    fn default() -> Self {
        Self {
            box_id: 1,
            bay_id: 1,
            disk_type: DEFAULT_DISK_TYPE.to_string(),
        }
    }
}

/// Scan-level failure. Stops the scan; whatever was captured before it is
/// still emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Line {line} too large: {len} bytes (max: {max} bytes)")]
    LineTooLarge { line: usize, len: usize, max: usize },
}

/// Why a `Size:` capture did not yield a size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("Non-UTF8 size value")]
    NonUtf8,

    #[error("Unrecognized size unit in {0:?} (expected TB or GB)")]
    UnknownUnit(String),

    #[error("Invalid size number {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

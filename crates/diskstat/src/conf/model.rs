//! Model: ReportConfig.

use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_MAX_LINE_SIZE;

/// Largest precision that still changes the rendering of an f64.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Line-protocol measurement name
    pub measurement: String,
    /// Digits after the decimal point for every rendered value
    pub precision: usize,
    /// Prepended to metric names in streaming output
    pub metric_prefix: String,
    /// Longest line the scanner accepts before giving up on the input
    pub max_line_bytes: usize,
    /// Emit the `size_gb` tag when a disk size was found
    pub size_tag: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            measurement: "disk".to_string(),
            precision: 6,
            metric_prefix: "disk_".to_string(),
            max_line_bytes: DEFAULT_MAX_LINE_SIZE,
            size_tag: true,
        }
    }
}

impl ReportConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.measurement.trim().is_empty() {
            return Err("measurement must not be empty".to_string());
        }
        if self.measurement.contains([',', ' ']) {
            return Err(format!("measurement {:?} must not contain ',' or ' '", self.measurement));
        }
        if self.max_line_bytes == 0 {
            return Err("max_line_bytes must be > 0".to_string());
        }
        if self.precision > MAX_PRECISION {
            return Err(format!("precision must be <= {}", MAX_PRECISION));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ────────────────────────────────────────────────

    #[test]
    fn test_report_config_defaults() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.measurement, "disk");
        assert_eq!(cfg.precision, 6);
        assert_eq!(cfg.metric_prefix, "disk_");
        assert_eq!(cfg.max_line_bytes, 65536);
        assert!(cfg.size_tag);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ReportConfig::default().validate().is_ok());
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn test_validate_empty_measurement() {
        let cfg = ReportConfig {
            measurement: "  ".to_string(),
            ..ReportConfig::default()
        };
        let result = cfg.validate();
        assert!(result.unwrap_err().contains("measurement"));
    }

    #[test]
    fn test_validate_measurement_with_separator() {
        let cfg = ReportConfig {
            measurement: "disk health".to_string(),
            ..ReportConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_zero_max_line_bytes() {
        let cfg = ReportConfig {
            max_line_bytes: 0,
            ..ReportConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("max_line_bytes"));
    }

    #[test]
    fn test_validate_precision_limit() {
        let mut cfg = ReportConfig::default();
        cfg.precision = MAX_PRECISION;
        assert!(cfg.validate().is_ok());
        cfg.precision = MAX_PRECISION + 1;
        assert!(cfg.validate().unwrap_err().contains("precision"));
    }
}

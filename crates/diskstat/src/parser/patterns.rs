//! Patterns: the compiled matchers recognised in controller reports.
//!
//! Every pattern has exactly one capture group holding the value of
//! interest. Patterns are tested independently on each line; a single
//! line may satisfy several of them.

use grep_matcher::{Captures, Matcher};
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use thiserror::Error;

use super::model::Metric;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid regex pattern {pattern:?}: {reason}")]
    InvalidRegex { pattern: &'static str, reason: String },
}

/// Raw expressions for every recognised line fragment.
pub struct Patterns;

impl Patterns {
    /// Trailing percentage, e.g. `Usage remaining: 99.84%`.
    pub const USAGE: &'static str = r"^.*: (.*)%";

    /// `Estimated Life Remaining based on workload to date: 4058 days`.
    /// Captures up to the last space, so the unit is dropped.
    pub const LIFE_REMAINING: &'static str = r"^.*date: (.*) ";

    /// Drive status. The two spaces keep `Controller Status:` and similar
    /// non-drive lines out.
    pub const STATUS: &'static str = r"  Status: (.*)";

    pub const CURRENT_TEMPERATURE: &'static str = r"^.*Current Temperature.*: (.*)";
    pub const MAXIMUM_TEMPERATURE: &'static str = r"^.*Maximum Temperature.*: (.*)";
    pub const POWER_ON_HOURS: &'static str = r"^.*Power On Hours: (.*)";

    /// `Size: 1.2 TB`, only at line start after optional indentation.
    pub const SIZE: &'static str = r"^\s*Size: (.*)";

    // Context markers
    pub const BAY: &'static str = r"^.*Bay: (.*)";
    pub const BOX: &'static str = r"^.*Box: (.*)";
    pub const INTERFACE_TYPE: &'static str = r"^.*Interface Type: (.*)";
}

/// How a metric capture turns into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Trimmed capture parsed as a float; failures are dropped.
    Number,
    /// 1.0 when the trimmed capture is exactly `OK`, else 0.0.
    Ok,
}

/// A compiled single-capture pattern.
pub struct LinePattern {
    source: &'static str,
    matcher: RegexMatcher,
}

impl LinePattern {
    pub fn new(pattern: &'static str) -> Result<Self, PatternError> {
        let matcher = RegexMatcherBuilder::new()
            .multi_line(false)
            .build(pattern)
            .map_err(|e| PatternError::InvalidRegex {
                pattern,
                reason: e.to_string(),
            })?;

        Ok(Self { source: pattern, matcher })
    }

    pub fn as_str(&self) -> &'static str {
        self.source
    }

    /// Return the first capture group if the line matches.
    pub fn capture<'a>(&self, line: &'a [u8]) -> Option<&'a [u8]> {
        let mut caps = self.matcher.new_captures().ok()?;
        if !self.matcher.captures(line, &mut caps).unwrap_or(false) {
            return None;
        }
        caps.get(1).map(|m| &line[m.start()..m.end()])
    }
}

/// A metric pattern together with the conversion applied to its capture.
pub struct MetricPattern {
    pub metric: Metric,
    pub capture: Capture,
    pub pattern: LinePattern,
}

/// Every pattern the scanner needs, compiled once and borrowed per scan.
pub struct PatternSet {
    pub bay: LinePattern,
    pub box_id: LinePattern,
    pub interface_type: LinePattern,
    pub size: LinePattern,
    /// Metric patterns in evaluation order. Streaming output for a line
    /// that satisfies several of them follows this order.
    pub metrics: Vec<MetricPattern>,
}

impl PatternSet {
    pub fn new() -> Result<Self, PatternError> {
        let entry = |metric, capture, pattern| -> Result<MetricPattern, PatternError> {
            Ok(MetricPattern {
                metric,
                capture,
                pattern: LinePattern::new(pattern)?,
            })
        };

        Ok(Self {
            bay: LinePattern::new(Patterns::BAY)?,
            box_id: LinePattern::new(Patterns::BOX)?,
            interface_type: LinePattern::new(Patterns::INTERFACE_TYPE)?,
            size: LinePattern::new(Patterns::SIZE)?,
            metrics: vec![
                entry(Metric::UsageRemaining, Capture::Number, Patterns::USAGE)?,
                entry(Metric::EstimatedLifeRemaining, Capture::Number, Patterns::LIFE_REMAINING)?,
                entry(Metric::Status, Capture::Ok, Patterns::STATUS)?,
                entry(Metric::CurrentTemperature, Capture::Number, Patterns::CURRENT_TEMPERATURE)?,
                entry(Metric::MaximumTemperature, Capture::Number, Patterns::MAXIMUM_TEMPERATURE)?,
                entry(Metric::PowerOnHours, Capture::Number, Patterns::POWER_ON_HOURS)?,
            ],
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────

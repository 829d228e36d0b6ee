//! Runtime module: logging, input, and running a report.

pub mod boot;
pub mod input;
pub mod report;

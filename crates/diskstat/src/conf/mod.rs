//! Conf module: report configuration model and loading.

pub mod model;
pub mod load;

pub use model::ReportConfig;
pub use load::ConfigError;

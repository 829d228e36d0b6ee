// Disk metrics from storage-controller report text.

// Core
pub mod parser;
pub mod output;

// Process glue
pub mod conf;
pub mod runtime;

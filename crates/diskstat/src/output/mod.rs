//! Output: the two ways scanned metrics leave the process.
//!
//! - `stream.rs`: one labelled line per metric, written as it is found
//! - `line_protocol.rs`: buffered per disk, rendered as sorted line-protocol records

pub mod line_protocol;
pub mod stream;

pub use line_protocol::{render_record, DiskRecord, LineProtocolSink};
pub use stream::StreamSink;

//! Data models shared by the extraction engine and the output sinks.

pub mod record;
pub mod temperature;

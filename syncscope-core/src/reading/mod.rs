//! Daemon line parsing.
//!
//! Every line is run through a fixed table of patterns. The sync offset is
//! tried first and the delay offset only when no sync offset is present; the
//! hardware hint, sequence id and rate ratio are extracted independently. A
//! field whose number does not parse is simply absent. Lines without either
//! offset produce no reading at all.

pub mod clock;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use clock::SessionClock;
pub use parse::{ReadingParser, parse_at, split_capture_prefix};
pub use types::{MessageType, TimestampReading};

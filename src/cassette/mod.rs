//! Cassette files for recording and replaying clock reads.

pub mod format;
pub mod recorder;
pub mod replayer;

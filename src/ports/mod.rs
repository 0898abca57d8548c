//! Port traits defining external boundaries.
//!
//! The only boundary the formatter crosses is the host clock.
//! Implementations live in `src/adapters/`.

pub mod clock;

pub use clock::Clock;

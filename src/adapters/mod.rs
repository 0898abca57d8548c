//! Clock adapters: live, fixed, recording and replaying.

pub mod fixed;
pub mod live;
pub mod recording;
pub mod replaying;

pub use fixed::FixedClock;
pub use live::LiveClock;
pub use recording::RecordingClock;
pub use replaying::ReplayingClock;

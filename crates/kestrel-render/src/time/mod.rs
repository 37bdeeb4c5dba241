//! Frame timing.
//!
//! The painter only needs one number from here: the accumulated game time
//! that drives texture scrolling. [`FrameClock`] produces it either from
//! the wall clock or from fixed steps for reproducible output.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

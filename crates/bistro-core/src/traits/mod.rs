//! Injectable sources of time and identity.
//!
//! Booking admission never reads the wall clock or a random source directly;
//! it is handed a [`Clock`] and an [`IdGenerator`] so that tests can pin both.

pub mod clock;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};

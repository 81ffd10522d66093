//! Cooperative timers.
//!
//! One [`Ticker`] per periodic concern (frame tick, input repeat). The owner
//! calls `poll(now)` on every event-loop wake and feeds `deadline()` back
//! into the loop's wait, so timers cost nothing while nothing is due.

mod ticker;

pub use ticker::Ticker;

//! Lightweight countdown/interval timer for tick-driven game simulations.
//!
//! The timer is advanced by explicit elapsed-time accumulation rather than by
//! engine-level deferred callbacks, so sequences of ticks are deterministic
//! and trivially testable with synthetic time steps.
//!
//! - **No wall clock**: time only moves when [`Timer::tick`] is called
//! - **No callbacks**: callers poll [`Timer::is_finished`]
//! - **Zero dependencies**: pure Rust with no external crates

pub mod timer;

pub use timer::Timer;

//! The imperative shell around the core data model.
//!
//! Everything that touches a record lives here: performing transitions and
//! firing events, the creation hooks that set and enter the initial state,
//! and the per-record [`Machine`] facade.
//!
//! # Concurrency
//!
//! Firing is not atomic as a whole. The host must serialize transitions on
//! the same record (a row lock, a version check, a single owner); transitions
//! on different records share nothing mutable and may run concurrently.

mod lifecycle;
mod machine;
mod transition;

pub use machine::{Machine, StateMachine};

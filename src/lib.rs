//! Statewise: a storage-agnostic finite state machine for persisted records
//!
//! A record type declares its states, the events that move it between them,
//! optional guards, and actions to run when a state is entered or left. The
//! engine reads and writes the current state through a single column on the
//! record and leaves storage entirely to the host, which implements [`Record`]
//! (and [`RecordStore`] for collection queries).
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - [`core`]: the read-only data model (states, transitions, events and the
//!   [`MachineDefinition`] holding them)
//! - [`effects`]: everything that touches a record, i.e. performing
//!   transitions, firing events and the creation hooks
//! - [`builder`] and [`config`]: constructing definitions in code or from JSON
//! - [`query`]: finding and counting records by state
//!
//! # Example
//!
//! ```rust
//! use statewise::builder::{EventBuilder, MachineBuilder, StateBuilder, TransitionBuilder};
//! use statewise::{ActionOutput, Record, StateValue};
//!
//! #[derive(Debug)]
//! struct StoreError;
//!
//! impl std::fmt::Display for StoreError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("store error")
//!     }
//! }
//!
//! impl std::error::Error for StoreError {}
//!
//! #[derive(Default)]
//! struct Conversation {
//!     state: Option<String>,
//!     can_close: bool,
//!     log: Vec<String>,
//! }
//!
//! impl Record for Conversation {
//!     type Error = StoreError;
//!
//!     fn read_state(&self, _column: &str) -> Option<&str> {
//!         self.state.as_deref()
//!     }
//!
//!     fn assign_state(&mut self, _column: &str, value: &StateValue) {
//!         self.state = Some(value.to_string());
//!     }
//!
//!     fn persist_state(&mut self, column: &str, value: &StateValue) -> Result<(), StoreError> {
//!         self.assign_state(column, value);
//!         Ok(())
//!     }
//!
//!     fn call_action(&mut self, name: &str) -> Result<ActionOutput, StoreError> {
//!         match name {
//!             "can_close" => Ok(ActionOutput::Verdict(self.can_close)),
//!             other => {
//!                 self.log.push(other.to_string());
//!                 Ok(ActionOutput::Done)
//!             }
//!         }
//!     }
//! }
//!
//! let definition = MachineBuilder::<Conversation>::new()
//!     .initial("needs_attention")
//!     .state("needs_attention")
//!     .state(StateBuilder::new("read").enter("read_enter"))
//!     .state("closed")
//!     .event(
//!         EventBuilder::new("view")
//!             .transition(TransitionBuilder::new().from("needs_attention").to("read"))
//!             .unwrap(),
//!     )
//!     .event(
//!         EventBuilder::new("close")
//!             .transition(
//!                 TransitionBuilder::new()
//!                     .from("read")
//!                     .to("closed")
//!                     .guard("can_close"),
//!             )
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut conversation = Conversation::default();
//! definition.create(&mut conversation, |_| Ok(())).unwrap();
//!
//! assert!(definition.fire(&mut conversation, "view").unwrap());
//! assert_eq!(conversation.log, vec!["read_enter"]);
//!
//! // Rejected by the guard: nothing changes.
//! assert!(!definition.fire(&mut conversation, "close").unwrap());
//! assert!(definition.is_in_state(&conversation, "read").unwrap());
//!
//! conversation.can_close = true;
//! assert!(definition.fire(&mut conversation, "close").unwrap());
//! assert!(definition.is_in_state(&conversation, "closed").unwrap());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod error;
pub mod query;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use self::core::{
    ActionOutput, ActionRef, Event, Guard, MachineDefinition, Metadata, Record, State,
    StateRegistry, StateValue, Transition, UnknownState, DEFAULT_STATE_COLUMN,
};
pub use builder::BuildError;
pub use effects::{Machine, StateMachine};
pub use error::{ActionPhase, MachineError};
pub use query::{Find, RecordStore, StateScope};

//! Core machine data model.
//!
//! This module contains the pure, read-only side of the engine:
//! - Stored state values and metadata
//! - The host record contract and action references
//! - States, transitions and events
//! - The machine definition that ties them together
//!
//! Nothing here performs a transition; see [`crate::effects`] for that.

mod action;
mod definition;
mod event;
mod guard;
mod record;
mod state;
mod transition;
mod value;

pub use action::{ActionRef, InlineAction};
pub use definition::{MachineDefinition, DEFAULT_STATE_COLUMN};
pub use event::Event;
pub use guard::Guard;
pub use record::{ActionOutput, Record};
pub use state::{State, StateRegistry};
pub use transition::Transition;
pub use value::{Metadata, StateValue, UnknownState};

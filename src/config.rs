//! Declarative machine definitions.
//!
//! A machine can be described as a JSON document instead of builder calls:
//!
//! ```json
//! {
//!   "initial": "needs_attention",
//!   "column": "state_machine",
//!   "states": [
//!     {"name": "needs_attention"},
//!     {"name": "read", "enter": "read_enter", "after": ["read_after_first", "read_after_second"]},
//!     {"name": "closed", "value": "CLOSED", "exit": "closed_exit"}
//!   ],
//!   "events": [
//!     {"name": "view", "transitions": [{"from": "needs_attention", "to": "read"}]},
//!     {"name": "close", "note": "finished",
//!      "transitions": [{"from": ["read", "needs_attention"], "to": "CLOSED", "guard": "can_close"}]}
//!   ]
//! }
//! ```
//!
//! Actions and guards are always named here; they are resolved through
//! [`Record::call_action`](crate::core::Record::call_action) when they run.
//! Keys on an event or transition other than the ones above are kept as
//! metadata.

use crate::builder::{BuildError, EventBuilder, MachineBuilder, StateBuilder, TransitionBuilder};
use crate::core::{Guard, MachineDefinition, Metadata, Record};
use serde::{Deserialize, Serialize};

/// Top-level machine document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default)]
    pub initial: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    #[serde(default)]
    pub states: Vec<StateConfig>,

    #[serde(default)]
    pub events: Vec<EventConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    pub name: String,

    /// Stored value; defaults to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,

    #[serde(default)]
    pub after: OneOrMany,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    pub name: String,

    #[serde(default)]
    pub transitions: Vec<TransitionConfig>,

    #[serde(flatten)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub from: OneOrMany,

    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,

    #[serde(flatten)]
    pub metadata: Metadata,
}

/// A single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names,
        }
    }
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<R: Record> MachineDefinition<R> {
    /// Parse and build a definition from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, BuildError> {
        let config: MachineConfig = serde_json::from_str(document)?;
        Self::from_config(config)
    }

    /// Build a definition from an already parsed document.
    pub fn from_config(config: MachineConfig) -> Result<Self, BuildError> {
        let initial = config.initial.ok_or(BuildError::NoInitialState)?;
        let mut builder = MachineBuilder::new().initial(initial);

        if let Some(column) = config.column {
            builder = builder.column(column);
        }

        for state in config.states {
            builder = builder.state(state_builder(state));
        }

        for event in config.events {
            builder = builder.event(event_builder(event)?);
        }

        builder.build()
    }
}

fn state_builder<R: Record>(config: StateConfig) -> StateBuilder<R> {
    let mut builder = StateBuilder::new(config.name);
    if let Some(value) = config.value {
        builder = builder.value(value);
    }
    if let Some(enter) = config.enter {
        builder = builder.enter(enter);
    }
    if let Some(exit) = config.exit {
        builder = builder.exit(exit);
    }
    builder.after_all(config.after.into_vec())
}

fn event_builder<R: Record>(config: EventConfig) -> Result<EventBuilder<R>, BuildError> {
    let mut builder = EventBuilder::new(config.name).with_metadata(config.metadata);

    for transition in config.transitions {
        let mut step = TransitionBuilder::new()
            .from_any(transition.from.into_vec())
            .to(transition.to)
            .with_metadata(transition.metadata);
        if let Some(guard) = transition.guard {
            step = step.guard(Guard::named(guard));
        }
        builder = builder.transition(step)?;
    }

    Ok(builder)
}

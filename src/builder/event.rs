//! Builder for events.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, Metadata, Record, Transition};

/// Builder for an event and its transitions.
///
/// Calling [`build`](Self::build) seals the event: the resulting [`Event`]
/// offers no way to add transitions or change metadata.
pub struct EventBuilder<R: Record> {
    name: String,
    transitions: Vec<Transition<R>>,
    metadata: Metadata,
}

impl<R: Record> EventBuilder<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Add transitions using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<R>) -> Result<Self, BuildError> {
        self.transitions.extend(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<R>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Attach event metadata, e.g. `.meta("note", "finished")`.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub(crate) fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.extend(metadata);
        self
    }

    pub fn build(self) -> Event<R> {
        Event {
            name: self.name,
            transitions: self.transitions,
            metadata: self.metadata,
        }
    }
}

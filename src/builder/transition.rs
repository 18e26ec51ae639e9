//! Builder for event transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, Metadata, Record, StateValue, Transition};

/// Builder for the transitions of one event.
///
/// A builder with several source states expands into one transition per
/// source, all sharing the same target, guard and metadata.
pub struct TransitionBuilder<R: Record> {
    from: Vec<StateValue>,
    to: Option<StateValue>,
    guard: Option<Guard<R>>,
    metadata: Metadata,
}

impl<R: Record> TransitionBuilder<R> {
    pub fn new() -> Self {
        Self {
            from: Vec::new(),
            to: None,
            guard: None,
            metadata: Metadata::new(),
        }
    }

    /// Add a source state (required at least once).
    pub fn from(mut self, state: impl Into<StateValue>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source states.
    pub fn from_any<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateValue>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateValue>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a guard, either a named method or a [`Guard`].
    pub fn guard(mut self, guard: impl Into<Guard<R>>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// Add a guard using a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach metadata. The engine carries it but never reads it.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub(crate) fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.extend(metadata);
        self
    }

    /// Build one transition per source state, in the order they were added.
    pub fn build(self) -> Result<Vec<Transition<R>>, BuildError> {
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(self
            .from
            .into_iter()
            .map(|from| Transition {
                from,
                to: to.clone(),
                guard: self.guard.clone(),
                metadata: self.metadata.clone(),
            })
            .collect())
    }
}

impl<R: Record> Default for TransitionBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

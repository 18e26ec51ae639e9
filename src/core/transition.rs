//! A single directed edge between two stored state values.

use super::guard::Guard;
use super::record::Record;
use super::value::{Metadata, StateValue};

/// Transition from one state value to another, owned by an [`Event`](super::Event).
///
/// Two transitions are equal when they connect the same values; guards and
/// metadata are not compared.
#[derive(Debug)]
pub struct Transition<R: Record> {
    pub(crate) from: StateValue,
    pub(crate) to: StateValue,
    pub(crate) guard: Option<Guard<R>>,
    pub(crate) metadata: Metadata,
}

impl<R: Record> Transition<R> {
    /// Create an unguarded transition.
    pub fn new(from: impl Into<StateValue>, to: impl Into<StateValue>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            guard: None,
            metadata: Metadata::new(),
        }
    }

    pub fn from_value(&self) -> &StateValue {
        &self.from
    }

    pub fn to_value(&self) -> &StateValue {
        &self.to
    }

    pub fn guard(&self) -> Option<&Guard<R>> {
        self.guard.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Whether this transition starts at `current`.
    pub fn leaves(&self, current: &str) -> bool {
        self.from == current
    }

    /// Evaluate the guard against the record. Unguarded transitions pass.
    pub fn guard_passes(&self, record: &mut R) -> Result<bool, R::Error> {
        match &self.guard {
            Some(guard) => guard.check(record),
            None => Ok(true),
        }
    }
}

impl<R: Record> Clone for Transition<R> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl<R: Record> PartialEq for Transition<R> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<R: Record> Eq for Transition<R> {}

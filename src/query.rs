//! Finding and counting records by state.
//!
//! The engine does not build queries itself. It validates the requested
//! state, then hands the host's [`RecordStore`] a [`StateScope`]: an equality
//! condition on the state column combined with the caller's own filter.

use crate::core::{MachineDefinition, Record, StateValue};
use crate::error::MachineError;

/// How many records a find should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Find {
    First,
    All,
}

/// Query condition handed to the store.
///
/// Matches records whose `column` equals `value` and, when present, that
/// also satisfy `filter`.
#[derive(Debug, Clone)]
pub struct StateScope<'a, F> {
    pub column: &'a str,
    pub value: &'a StateValue,
    pub filter: Option<F>,
}

/// Collection-level access to persisted records, provided by the host.
pub trait RecordStore<R> {
    /// Host-specific extra condition, e.g. a WHERE fragment.
    type Filter;
    type Error: std::error::Error + Send + Sync + 'static;

    fn find(&self, scope: StateScope<'_, Self::Filter>, find: Find) -> Result<Vec<R>, Self::Error>;

    fn count(&self, scope: StateScope<'_, Self::Filter>) -> Result<usize, Self::Error>;
}

impl<R: Record> MachineDefinition<R> {
    /// Find records in `state` (a state name or stored value).
    ///
    /// Fails with [`MachineError::InvalidState`] before querying the store
    /// when `state` is not registered.
    pub fn find_in_state<S>(
        &self,
        store: &S,
        find: Find,
        state: &str,
        filter: Option<S::Filter>,
    ) -> Result<Vec<R>, MachineError<S::Error>>
    where
        S: RecordStore<R>,
    {
        let scope = self
            .scope(state, filter)
            .ok_or_else(|| MachineError::<S::Error>::invalid_state(state))?;
        store.find(scope, find).map_err(MachineError::Store)
    }

    /// Find the first record in `state`.
    pub fn first_in_state<S>(
        &self,
        store: &S,
        state: &str,
        filter: Option<S::Filter>,
    ) -> Result<Option<R>, MachineError<S::Error>>
    where
        S: RecordStore<R>,
    {
        Ok(self
            .find_in_state(store, Find::First, state, filter)?
            .into_iter()
            .next())
    }

    /// Count records in `state`.
    pub fn count_in_state<S>(
        &self,
        store: &S,
        state: &str,
        filter: Option<S::Filter>,
    ) -> Result<usize, MachineError<S::Error>>
    where
        S: RecordStore<R>,
    {
        let scope = self
            .scope(state, filter)
            .ok_or_else(|| MachineError::<S::Error>::invalid_state(state))?;
        store.count(scope).map_err(MachineError::Store)
    }

    fn scope<F>(&self, state: &str, filter: Option<F>) -> Option<StateScope<'_, F>> {
        let registered = self.states().resolve(state)?;
        Some(StateScope {
            column: self.state_column(),
            value: registered.value(),
            filter,
        })
    }
}

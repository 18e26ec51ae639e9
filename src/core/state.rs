//! State descriptors and the registry that owns them.
//!
//! A [`State`] couples a symbolic name with the value stored in the record's
//! state column and the actions fired around transitions into and out of it.
//! The [`StateRegistry`] is keyed by stored value and keeps definition order.

use super::action::ActionRef;
use super::record::Record;
use super::value::StateValue;
use std::collections::HashMap;

/// A named condition a record can be in.
///
/// States are created through [`StateBuilder`](crate::builder::StateBuilder)
/// and are immutable once the machine is built.
#[derive(Debug)]
pub struct State<R: Record> {
    pub(crate) name: String,
    pub(crate) value: StateValue,
    pub(crate) enter: Option<ActionRef<R>>,
    pub(crate) exit: Option<ActionRef<R>>,
    pub(crate) after: Vec<ActionRef<R>>,
}

impl<R: Record> State<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value persisted in the state column.
    pub fn value(&self) -> &StateValue {
        &self.value
    }

    /// Fired when a record moves into this state from a different one.
    pub fn enter_action(&self) -> Option<&ActionRef<R>> {
        self.enter.as_ref()
    }

    /// Fired when a record moves out of this state to a different one.
    pub fn exit_action(&self) -> Option<&ActionRef<R>> {
        self.exit.as_ref()
    }

    /// Fired, in order, once this state has become current.
    pub fn after_actions(&self) -> &[ActionRef<R>] {
        &self.after
    }
}

/// Ordered mapping from stored value to [`State`].
///
/// Registering a value that is already present replaces the earlier
/// descriptor in place; the last definition wins.
#[derive(Debug)]
pub struct StateRegistry<R: Record> {
    states: Vec<State<R>>,
    index: HashMap<StateValue, usize>,
}

impl<R: Record> StateRegistry<R> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a state. A state with the same name or the same value is
    /// replaced, keeping its position.
    pub fn register(&mut self, state: State<R>) {
        let by_name = self.states.iter().position(|s| s.name == state.name);
        let by_value = self.index.get(&state.value).copied();

        match by_name.or(by_value) {
            Some(position) => {
                self.states[position] = state;
                if let (Some(kept), Some(stale)) = (by_name, by_value) {
                    if kept != stale {
                        self.states.remove(stale);
                    }
                }
                self.reindex();
            }
            None => {
                self.index.insert(state.value.clone(), self.states.len());
                self.states.push(state);
            }
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .states
            .iter()
            .enumerate()
            .map(|(position, state)| (state.value.clone(), position))
            .collect();
    }

    /// Look a state up by its stored value.
    pub fn lookup(&self, value: &str) -> Option<&State<R>> {
        self.index.get(value).map(|&position| &self.states[position])
    }

    /// Look a state up by its symbolic name.
    pub fn by_name(&self, name: &str) -> Option<&State<R>> {
        self.states.iter().find(|state| state.name == name)
    }

    /// Resolve a state identifier given either as a stored value or a name.
    ///
    /// Stored values take precedence.
    pub fn resolve(&self, identifier: &str) -> Option<&State<R>> {
        self.lookup(identifier).or_else(|| self.by_name(identifier))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// All registered values, in definition order.
    pub fn values(&self) -> impl Iterator<Item = &StateValue> {
        self.states.iter().map(|state| &state.value)
    }

    /// All registered names, in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|state| state.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &State<R>> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<R: Record> Default for StateRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Ticket;

    fn state(name: &str, value: &str) -> State<Ticket> {
        State {
            name: name.to_string(),
            value: StateValue::new(value),
            enter: None,
            exit: None,
            after: Vec::new(),
        }
    }

    #[test]
    fn lookup_finds_registered_values() {
        let mut registry = StateRegistry::new();
        registry.register(state("needs_attention", "needs_attention"));
        registry.register(state("read", "READ"));

        assert_eq!(registry.lookup("READ").unwrap().name(), "read");
        assert!(registry.lookup("read").is_none());
        assert!(registry.lookup("junk").is_none());
    }

    #[test]
    fn values_keep_definition_order() {
        let mut registry = StateRegistry::new();
        for name in ["needs_attention", "read", "closed", "awaiting_response", "junk"] {
            registry.register(state(name, name));
        }

        let values: Vec<_> = registry.values().map(StateValue::as_str).collect();
        assert_eq!(
            values,
            vec!["needs_attention", "read", "closed", "awaiting_response", "junk"]
        );
    }

    #[test]
    fn re_registering_replaces_in_place() {
        let mut registry = StateRegistry::new();
        registry.register(state("open", "open"));
        registry.register(state("closed", "closed"));

        let mut redefined = state("open", "open");
        redefined.after.push(ActionRef::named("notify"));
        registry.register(redefined);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["open", "closed"]);
        assert_eq!(registry.lookup("open").unwrap().after_actions().len(), 1);
    }

    #[test]
    fn redefining_a_name_with_a_new_value_replaces_it() {
        let mut registry = StateRegistry::new();
        registry.register(state("open", "open"));
        registry.register(state("closed", "closed"));
        registry.register(state("open", "OPEN"));

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["open", "closed"]);
        assert!(registry.lookup("open").is_none());
        assert_eq!(registry.resolve("open").unwrap().value(), "OPEN");
        assert_eq!(registry.lookup("closed").unwrap().name(), "closed");
    }

    #[test]
    fn redefinition_drops_a_state_holding_the_new_value() {
        let mut registry = StateRegistry::new();
        registry.register(state("open", "open"));
        registry.register(state("closed", "CLOSED"));
        registry.register(state("archived", "archived"));
        registry.register(state("open", "CLOSED"));

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["open", "archived"]);
        assert_eq!(registry.lookup("CLOSED").unwrap().name(), "open");
        assert_eq!(registry.lookup("archived").unwrap().name(), "archived");
        assert!(registry.by_name("closed").is_none());
    }

    #[test]
    fn resolve_accepts_name_or_value() {
        let mut registry = StateRegistry::new();
        registry.register(state("needs_attention", "NEEDS_ATTENTION"));

        assert!(registry.resolve("NEEDS_ATTENTION").is_some());
        assert!(registry.resolve("needs_attention").is_some());
        assert!(registry.resolve("dead").is_none());
        assert!(registry.contains("NEEDS_ATTENTION"));
        assert!(!registry.contains("needs_attention"));
    }
}

//! Action references and their invocation.
//!
//! An action is either the name of a method the host dispatches itself, or
//! an inline closure stored in the definition. Both are invoked the same way,
//! with the record as the only argument.

use super::record::{ActionOutput, Record};
use std::fmt;
use std::sync::Arc;

/// Inline action stored directly in a machine definition.
pub type InlineAction<R> =
    Arc<dyn Fn(&mut R) -> Result<ActionOutput, <R as Record>::Error> + Send + Sync>;

/// Reference to an action bound to a record.
///
/// # Example
///
/// ```rust
/// # use statewise::{ActionOutput, ActionRef, Record, StateValue};
/// # #[derive(Debug)]
/// # struct Never;
/// # impl std::fmt::Display for Never {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("never") }
/// # }
/// # impl std::error::Error for Never {}
/// # #[derive(Default)]
/// # struct Doc { state: Option<String>, published: bool }
/// # impl Record for Doc {
/// #     type Error = Never;
/// #     fn read_state(&self, _: &str) -> Option<&str> { self.state.as_deref() }
/// #     fn assign_state(&mut self, _: &str, v: &StateValue) { self.state = Some(v.to_string()) }
/// #     fn persist_state(&mut self, c: &str, v: &StateValue) -> Result<(), Never> { self.assign_state(c, v); Ok(()) }
/// #     fn call_action(&mut self, _: &str) -> Result<ActionOutput, Never> { Ok(ActionOutput::Done) }
/// # }
/// let by_name: ActionRef<Doc> = ActionRef::named("notify_subscribers");
/// let inline: ActionRef<Doc> = ActionRef::effect(|doc: &mut Doc| doc.published = true);
///
/// let mut doc = Doc::default();
/// inline.invoke(&mut doc).unwrap();
/// assert!(doc.published);
/// assert_eq!(by_name.label(), "notify_subscribers");
/// ```
pub enum ActionRef<R: Record> {
    /// A method the host resolves through [`Record::call_action`].
    Named(String),
    /// A closure invoked directly.
    Inline(InlineAction<R>),
}

impl<R: Record> ActionRef<R> {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap a fallible closure.
    pub fn inline<F, O>(action: F) -> Self
    where
        F: Fn(&mut R) -> Result<O, R::Error> + Send + Sync + 'static,
        O: Into<ActionOutput>,
    {
        Self::Inline(Arc::new(move |record: &mut R| {
            action(record).map(Into::into)
        }))
    }

    /// Wrap an infallible side effect.
    pub fn effect<F>(action: F) -> Self
    where
        F: Fn(&mut R) + Send + Sync + 'static,
    {
        Self::Inline(Arc::new(move |record: &mut R| {
            action(record);
            Ok(ActionOutput::Done)
        }))
    }

    /// Wrap an infallible predicate, typically used as a guard.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self::Inline(Arc::new(move |record: &mut R| {
            Ok(ActionOutput::Verdict(predicate(&*record)))
        }))
    }

    /// Human-readable label used in errors and logs.
    pub fn label(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Inline(_) => "<inline>",
        }
    }

    pub fn invoke(&self, record: &mut R) -> Result<ActionOutput, R::Error> {
        match self {
            Self::Named(name) => record.call_action(name),
            Self::Inline(action) => action(record),
        }
    }
}

impl<R: Record> Clone for ActionRef<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Named(name) => Self::Named(name.clone()),
            Self::Inline(action) => Self::Inline(Arc::clone(action)),
        }
    }
}

impl<R: Record> fmt::Debug for ActionRef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Inline(_) => f.write_str("Inline(..)"),
        }
    }
}

impl<R: Record> From<&str> for ActionRef<R> {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl<R: Record> From<String> for ActionRef<R> {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

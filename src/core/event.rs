//! Named events grouping the transitions they can trigger.

use super::record::Record;
use super::transition::Transition;
use super::value::Metadata;

/// A named trigger made of one or more transitions.
///
/// Transitions keep their definition order, which decides priority when
/// several of them leave the same state. Events are sealed once built:
/// see [`EventBuilder`](crate::builder::EventBuilder).
#[derive(Debug)]
pub struct Event<R: Record> {
    pub(crate) name: String,
    pub(crate) transitions: Vec<Transition<R>>,
    pub(crate) metadata: Metadata,
}

impl<R: Record> Event<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &[Transition<R>] {
        &self.transitions
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Transitions leaving `current`, in definition order.
    pub fn candidates<'a, 's>(
        &'a self,
        current: &'s str,
    ) -> impl Iterator<Item = &'a Transition<R>> + 's
    where
        'a: 's,
    {
        self.transitions
            .iter()
            .filter(move |transition| transition.leaves(current))
    }
}

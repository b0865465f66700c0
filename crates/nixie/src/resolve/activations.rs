//! Activation span tracking.
//!
//! Activations are not positioned elements; an activation id simply groups
//! every message that starts or ends an execution occurrence on a lifeline.
//! Its visible span is therefore derived: the first message (in canonical
//! order) referencing the id opens it, the last one closes it. An id
//! referenced by exactly one message opens and closes on that same message.

use indexmap::IndexMap;

use log::trace;

use nixie_core::{identifier::Id, model::Message};

/// Activation id → canonical indices of the messages referencing it.
///
/// Built in one pass over the canonical message order; each message
/// contributes its index once per activation reference (from side first).
/// The map is a local table scoped to a single export, queried by the
/// emitter through [`opens_at`](Self::opens_at) and
/// [`closes_at`](Self::closes_at).
#[derive(Debug, Default)]
pub struct ActivationSpans {
    spans: IndexMap<Id, Vec<usize>>,
}

impl ActivationSpans {
    /// Track activation references over the canonical message order.
    pub fn track(ordered: &[&Message]) -> Self {
        let mut spans: IndexMap<Id, Vec<usize>> = IndexMap::new();

        for (index, message) in ordered.iter().enumerate() {
            if let Some(from_activation) = message.from_activation() {
                spans.entry(from_activation).or_default().push(index);
            }
            if let Some(to_activation) = message.to_activation() {
                spans.entry(to_activation).or_default().push(index);
            }
        }

        trace!(activations = spans.len(); "Tracked activation spans");
        Self { spans }
    }

    /// Whether the message at `index` is the first occurrence of this
    /// activation id, i.e. the one that emits the activate marker.
    pub fn opens_at(&self, activation: Id, index: usize) -> bool {
        self.spans
            .get(&activation)
            .and_then(|occurrences| occurrences.first())
            .is_some_and(|first| *first == index)
    }

    /// Whether the message at `index` is the last occurrence of this
    /// activation id, i.e. the one that emits the deactivate marker.
    pub fn closes_at(&self, activation: Id, index: usize) -> bool {
        self.spans
            .get(&activation)
            .and_then(|occurrences| occurrences.last())
            .is_some_and(|last| *last == index)
    }

    /// Number of distinct activation ids seen.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether no message carried an activation reference.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nixie_core::{geometry::Point, model::MessageKind};

    fn send(id: &str) -> Message {
        Message::new(Id::new(id), "1", "A", "B", MessageKind::Send, Point::default())
    }

    #[test]
    fn test_first_and_last_occurrence() {
        let m1 = send("m1").with_from_activation(Id::new("act"));
        let m2 = send("m2").with_from_activation(Id::new("act"));
        let m3 = send("m3").with_to_activation(Id::new("act"));
        let ordered = vec![&m1, &m2, &m3];

        let spans = ActivationSpans::track(&ordered);

        assert!(spans.opens_at(Id::new("act"), 0));
        assert!(!spans.opens_at(Id::new("act"), 1));
        assert!(!spans.closes_at(Id::new("act"), 1));
        assert!(spans.closes_at(Id::new("act"), 2));
    }

    #[test]
    fn test_single_reference_opens_and_closes_same_message() {
        let m1 = send("m1").with_from_activation(Id::new("solo"));
        let ordered = vec![&m1];

        let spans = ActivationSpans::track(&ordered);

        assert!(spans.opens_at(Id::new("solo"), 0));
        assert!(spans.closes_at(Id::new("solo"), 0));
    }

    #[test]
    fn test_exactly_one_open_and_one_close_per_id() {
        let activation = Id::new("busy");
        let m1 = send("m1").with_to_activation(activation);
        let m2 = send("m2").with_from_activation(activation);
        let m3 = send("m3").with_from_activation(activation);
        let ordered = vec![&m1, &m2, &m3];

        let spans = ActivationSpans::track(&ordered);

        let opens = (0..3).filter(|i| spans.opens_at(activation, *i)).count();
        let closes = (0..3).filter(|i| spans.closes_at(activation, *i)).count();
        assert_eq!(opens, 1, "exactly one message opens the activation");
        assert_eq!(closes, 1, "exactly one message closes the activation");
    }

    #[test]
    fn test_unreferenced_id() {
        let m1 = send("m1");
        let spans = ActivationSpans::track(&[&m1]);

        assert!(spans.is_empty());
        assert!(!spans.opens_at(Id::new("ghost"), 0));
        assert!(!spans.closes_at(Id::new("ghost"), 0));
    }

    #[test]
    fn test_same_id_on_both_sides_of_one_message() {
        let activation = Id::new("self");
        let m1 = send("m1")
            .with_from_activation(activation)
            .with_to_activation(activation);
        let spans = ActivationSpans::track(&[&m1]);

        assert_eq!(spans.len(), 1);
        assert!(spans.opens_at(activation, 0));
        assert!(spans.closes_at(activation, 0));
    }
}

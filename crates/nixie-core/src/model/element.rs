//! Diagram element types for the semantic model.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Bounds, Point},
    identifier::Id,
};

/// The kind of a sequence-diagram participant column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    /// A system or object instance lifeline
    Lifeline,
    /// A human-like actor
    Actor,
}

/// A participant column (lifeline or actor) with its horizontal position.
///
/// The name is the display key used in message lines; it is not validated
/// for uniqueness, duplicate names pass through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    kind: ParticipantKind,
    x: f32,
}

impl Participant {
    /// Create a new participant at the given x position.
    pub fn new(name: impl Into<String>, kind: ParticipantKind, x: f32) -> Self {
        Self {
            name: name.into(),
            kind,
            x,
        }
    }

    /// The participant's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this participant is a lifeline or an actor.
    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    /// Horizontal position of the participant column.
    pub fn x(&self) -> f32 {
        self.x
    }
}

/// The action type of a message, selecting the Mermaid arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A call/send action
    Send,
    /// A reply/return action
    Return,
}

/// A message between two participants.
///
/// `from`/`to` are participant display names; `sequence_number` is the
/// host-assigned ordering token (flat integer or dotted hierarchical string,
/// depending on the diagram's numbering mode). The optional activation
/// references group messages that share an execution occurrence on a
/// lifeline; activations are not separate positioned elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    id: Id,
    #[serde(default)]
    name: Option<String>,
    sequence_number: String,
    from: String,
    to: String,
    kind: MessageKind,
    #[serde(default)]
    from_activation: Option<Id>,
    #[serde(default)]
    to_activation: Option<Id>,
    position: Point,
}

impl Message {
    /// Create a new message without a label or activation references.
    pub fn new(
        id: Id,
        sequence_number: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        kind: MessageKind,
        position: Point,
    ) -> Self {
        Self {
            id,
            name: None,
            sequence_number: sequence_number.into(),
            from: from.into(),
            to: to.into(),
            kind,
            from_activation: None,
            to_activation: None,
            position,
        }
    }

    /// Set the message label, returning the modified message.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the activation reference on the sending side.
    pub fn with_from_activation(mut self, activation: Id) -> Self {
        self.from_activation = Some(activation);
        self
    }

    /// Set the activation reference on the receiving side.
    pub fn with_to_activation(mut self, activation: Id) -> Self {
        self.to_activation = Some(activation);
        self
    }

    /// The message's unique id within the diagram.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The message label, if any. Absent labels serialize as empty text.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The host-assigned sequence number token.
    pub fn sequence_number(&self) -> &str {
        &self.sequence_number
    }

    /// Display name of the sending participant.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Display name of the receiving participant.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Whether this is a send or a return action.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Activation occurrence this message starts from, if any.
    pub fn from_activation(&self) -> Option<Id> {
        self.from_activation
    }

    /// Activation occurrence this message lands on, if any.
    pub fn to_activation(&self) -> Option<Id> {
        self.to_activation
    }

    /// Position of the message on the diagram canvas.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// A structural-operator frame (opt, alt, loop, ...) with its drawn bounds.
///
/// Frames carry no explicit membership relation; which messages a frame
/// wraps is derived purely from bounds containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    id: Id,
    #[serde(default)]
    operation: Option<String>,
    #[serde(default)]
    label: Option<String>,
    bounds: Bounds,
}

impl Frame {
    /// Create a new frame without an operation or label.
    pub fn new(id: Id, bounds: Bounds) -> Self {
        Self {
            id,
            operation: None,
            label: None,
            bounds,
        }
    }

    /// Set the structural operation (e.g. "opt", "alt", "loop").
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Set the frame's display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The frame's unique id within the diagram.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The structural operation, if the host recorded one.
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// The frame's display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The drawn bounds of the frame.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A free-floating note annotation.
///
/// The relation vectors hold ids of elements the host connected the note to;
/// only ids that resolve to messages matter for attachment. Association to a
/// message is derived, not authoritative, except when such a relation exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    text: Option<String>,
    position: Point,
    #[serde(default)]
    from_relations: Vec<Id>,
    #[serde(default)]
    to_relations: Vec<Id>,
}

impl Note {
    /// Create a new note at the given position, without text or relations.
    pub fn new(position: Point) -> Self {
        Self {
            text: None,
            position,
            from_relations: Vec::new(),
            to_relations: Vec::new(),
        }
    }

    /// Set the note text, returning the modified note.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an outgoing relation target id.
    pub fn with_from_relation(mut self, target: Id) -> Self {
        self.from_relations.push(target);
        self
    }

    /// Add an incoming relation source id.
    pub fn with_to_relation(mut self, source: Id) -> Self {
        self.to_relations.push(source);
        self
    }

    /// The note text, if any. Notes without text are skipped entirely.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Position of the note on the diagram canvas.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Ids of elements this note points at ("from" direction).
    pub fn from_relations(&self) -> &[Id] {
        &self.from_relations
    }

    /// Ids of elements pointing at this note ("to" direction).
    pub fn to_relations(&self) -> &[Id] {
        &self.to_relations
    }
}

/// A diagram element: one of the four payload kinds the exporter recognizes.
///
/// Serialized with an `element` tag so diagram files stay self-describing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Participant(Participant),
    Message(Message),
    Frame(Frame),
    Note(Note),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_builder() {
        let message = Message::new(
            Id::new("m1"),
            "1",
            "A",
            "B",
            MessageKind::Send,
            Point::new(50.0, 100.0),
        )
        .with_name("hello")
        .with_from_activation(Id::new("a1"));

        assert_eq!(message.id(), "m1");
        assert_eq!(message.name(), Some("hello"));
        assert_eq!(message.from(), "A");
        assert_eq!(message.to(), "B");
        assert_eq!(message.from_activation(), Some(Id::new("a1")));
        assert_eq!(message.to_activation(), None);
    }

    #[test]
    fn test_element_serde_tagging() {
        let json = r#"{
            "element": "message",
            "id": "m1",
            "sequence_number": "1",
            "from": "A",
            "to": "B",
            "kind": "send",
            "position": {"x": 10.0, "y": 20.0}
        }"#;

        let element: Element = serde_json::from_str(json).expect("valid message element");
        match element {
            Element::Message(message) => {
                assert_eq!(message.sequence_number(), "1");
                assert_eq!(message.name(), None);
                assert_eq!(message.kind(), MessageKind::Send);
            }
            other => panic!("expected a message element, got {other:?}"),
        }
    }

    #[test]
    fn test_note_defaults() {
        let json = r#"{"element": "note", "position": {"x": 0.0, "y": 0.0}}"#;
        let element: Element = serde_json::from_str(json).expect("valid note element");
        match element {
            Element::Note(note) => {
                assert_eq!(note.text(), None);
                assert!(note.from_relations().is_empty());
                assert!(note.to_relations().is_empty());
            }
            other => panic!("expected a note element, got {other:?}"),
        }
    }
}

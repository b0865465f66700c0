//! Root diagram type and diagram-level settings.
//!
//! This module contains:
//! - [`Diagram`] - The root model type with name, elements, and properties
//! - [`SequenceNumbering`] - The four message-numbering modes a diagram can be
//!   configured with

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::element::{Element, Frame, Message, Note, Participant};

/// Name of the diagram property holding the numbering-mode code.
pub const SEQUENCE_NUMBERING_PROPERTY: &str = "sequenceNumbering";

/// Message numbering modes for a sequence diagram.
///
/// The mode decides how `sequence_number` strings are interpreted when
/// establishing the canonical message order: as flat integers or as dotted
/// hierarchical tokens. The frame-based variants order messages exactly like
/// their base modes; they only differ in how the host displays numbering
/// inside frames.
///
/// The codes match the host's integer property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceNumbering {
    /// Dotted hierarchical numbering ("1", "1.1", "1.2", "2")
    NestedLevel,
    /// Flat integer numbering ("1", "2", "3")
    SingleLevel,
    /// Hierarchical numbering restarting per frame
    FrameBasedNestedLevel,
    /// Flat numbering restarting per frame
    FrameBasedSingleLevel,
}

/// Error returned when a diagram carries a numbering code outside the four
/// recognized values. There is no fallback mode; the export fails fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized sequence numbering code: {0}")]
pub struct UnknownNumbering(pub i64);

impl TryFrom<i64> for SequenceNumbering {
    type Error = UnknownNumbering;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NestedLevel),
            1 => Ok(Self::SingleLevel),
            2 => Ok(Self::FrameBasedNestedLevel),
            3 => Ok(Self::FrameBasedSingleLevel),
            other => Err(UnknownNumbering(other)),
        }
    }
}

impl SequenceNumbering {
    /// Whether sequence numbers are compared as flat integers in this mode.
    pub fn is_single_level(self) -> bool {
        matches!(self, Self::SingleLevel | Self::FrameBasedSingleLevel)
    }
}

/// A complete sequence diagram as provided by the host.
///
/// The element list preserves the host's element order; position data on the
/// individual elements encodes the visual arrangement. Diagram-level
/// properties are an open string-to-integer table; the exporter only reads
/// [`SEQUENCE_NUMBERING_PROPERTY`].
///
/// # Examples
///
/// ```
/// use nixie_core::model::{Diagram, Element, Participant, ParticipantKind};
///
/// let diagram = Diagram::new(
///     "Login flow",
///     vec![Element::Participant(Participant::new(
///         "Client",
///         ParticipantKind::Lifeline,
///         0.0,
///     ))],
/// )
/// .with_property(nixie_core::model::SEQUENCE_NUMBERING_PROPERTY, 1);
///
/// assert_eq!(diagram.name(), "Login flow");
/// assert_eq!(diagram.participants().count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    name: String,
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    properties: BTreeMap<String, i64>,
}

impl Diagram {
    /// Create a new diagram with the given name and element list.
    pub fn new(name: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            elements,
            properties: BTreeMap::new(),
        }
    }

    /// Set a diagram-level property, returning the modified diagram.
    pub fn with_property(mut self, name: impl Into<String>, value: i64) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// The diagram's display name, emitted as the Mermaid title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a named diagram-level property.
    pub fn property(&self, name: &str) -> Option<i64> {
        self.properties.get(name).copied()
    }

    /// Iterate over participant elements in host order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.elements.iter().filter_map(|element| match element {
            Element::Participant(participant) => Some(participant),
            _ => None,
        })
    }

    /// Iterate over message elements in host order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.elements.iter().filter_map(|element| match element {
            Element::Message(message) => Some(message),
            _ => None,
        })
    }

    /// Iterate over frame elements in host order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.elements.iter().filter_map(|element| match element {
            Element::Frame(frame) => Some(frame),
            _ => None,
        })
    }

    /// Iterate over note elements in host order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.elements.iter().filter_map(|element| match element {
            Element::Note(note) => Some(note),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_codes() {
        assert_eq!(
            SequenceNumbering::try_from(0),
            Ok(SequenceNumbering::NestedLevel)
        );
        assert_eq!(
            SequenceNumbering::try_from(1),
            Ok(SequenceNumbering::SingleLevel)
        );
        assert_eq!(
            SequenceNumbering::try_from(2),
            Ok(SequenceNumbering::FrameBasedNestedLevel)
        );
        assert_eq!(
            SequenceNumbering::try_from(3),
            Ok(SequenceNumbering::FrameBasedSingleLevel)
        );
    }

    #[test]
    fn test_numbering_unknown_code_is_an_error() {
        assert_eq!(SequenceNumbering::try_from(4), Err(UnknownNumbering(4)));
        assert_eq!(SequenceNumbering::try_from(-1), Err(UnknownNumbering(-1)));
    }

    #[test]
    fn test_numbering_single_level_classification() {
        assert!(SequenceNumbering::SingleLevel.is_single_level());
        assert!(SequenceNumbering::FrameBasedSingleLevel.is_single_level());
        assert!(!SequenceNumbering::NestedLevel.is_single_level());
        assert!(!SequenceNumbering::FrameBasedNestedLevel.is_single_level());
    }

    #[test]
    fn test_property_lookup() {
        let diagram = Diagram::new("d", vec![]).with_property(SEQUENCE_NUMBERING_PROPERTY, 3);
        assert_eq!(diagram.property(SEQUENCE_NUMBERING_PROPERTY), Some(3));
        assert_eq!(diagram.property("missing"), None);
    }
}

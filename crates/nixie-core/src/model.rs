//! Semantic model for sequence diagrams.
//!
//! This is the read-only input side of the exporter: a [`Diagram`] holds the
//! element list and diagram-level properties exactly as the host produced
//! them. All structural relationships that Mermaid needs but the model does
//! not carry (note attachment, frame membership) are derived elsewhere;
//! nothing in this module is mutated during an export.

mod diagram;
mod element;

pub use diagram::{Diagram, SEQUENCE_NUMBERING_PROPERTY, SequenceNumbering, UnknownNumbering};
pub use element::{Element, Frame, Message, MessageKind, Note, Participant, ParticipantKind};

//! Nixie - exports in-memory UML sequence-diagram models as Mermaid text.
//!
//! This library turns a positionally-encoded sequence-diagram model
//! (participants, messages, activation references, frames, free-floating
//! notes) into a Mermaid `sequenceDiagram` description. The interesting part
//! is reconstruction: the source model does not record which note annotates
//! which message or which messages a frame wraps, so those relationships are
//! derived from element geometry with deterministic tie-break rules before a
//! single emission pass produces the text.
//!
//! # Examples
//!
//! ```
//! use nixie::model::{
//!     Diagram, Element, Message, MessageKind, Participant, ParticipantKind,
//!     SEQUENCE_NUMBERING_PROPERTY,
//! };
//! use nixie::{geometry::Point, identifier::Id};
//!
//! let diagram = Diagram::new(
//!     "Greeting",
//!     vec![
//!         Element::Participant(Participant::new("A", ParticipantKind::Lifeline, 0.0)),
//!         Element::Participant(Participant::new("B", ParticipantKind::Lifeline, 100.0)),
//!         Element::Message(
//!             Message::new(Id::new("m1"), "1", "A", "B", MessageKind::Send, Point::new(50.0, 80.0))
//!                 .with_name("hi"),
//!         ),
//!     ],
//! )
//! .with_property(SEQUENCE_NUMBERING_PROPERTY, 1);
//!
//! let text = nixie::export(&diagram).expect("export should succeed");
//! assert_eq!(
//!     text,
//!     "sequenceDiagram\ntitle: Greeting\nparticipant A\nparticipant B\nA->>B: 1. hi\n"
//! );
//! ```

pub mod config;

mod error;
mod export;
mod resolve;

pub use nixie_core::{geometry, identifier, model};

pub use error::NixieError;
pub use export::mermaid::{MermaidExporter, escape_text};

use config::ExportConfig;

/// Export a diagram with the default configuration.
///
/// Convenience wrapper over [`MermaidExporter::export`].
///
/// # Errors
///
/// See [`MermaidExporter::export`].
pub fn export(diagram: &model::Diagram) -> Result<String, NixieError> {
    MermaidExporter::new(ExportConfig::default()).export(diagram)
}

//! Mermaid `sequenceDiagram` emission.
//!
//! The emitter is the only stateful stage of an export: a single pass over
//! the canonical message order, interleaving frame open/close lines,
//! activation markers, and notes into one linear text stream. Everything it
//! reads - the participant order, the activation spans, the frame
//! boundaries, the note bindings - is resolved up front and treated as an
//! immutable lookup table.

use std::collections::HashSet;
use std::fmt::Write;

use log::{debug, info};

use nixie_core::{
    identifier::Id,
    model::{Diagram, MessageKind, ParticipantKind},
};

use crate::{
    config::ExportConfig,
    error::NixieError,
    resolve::{
        activations::ActivationSpans, frames, index::GeometryIndex, notes, participants, sequence,
    },
};

/// Escape text for inclusion in a Mermaid line.
///
/// `#` and `;` are Mermaid metacharacters inside message and note text;
/// both are replaced by their `#<code>;` numeric entity. Everything else
/// passes through unchanged, so the function is idempotent on text without
/// those characters. Participant names and frame labels are never escaped.
///
/// # Examples
///
/// ```
/// assert_eq!(nixie::escape_text("issue #42"), "issue #35;42");
/// assert_eq!(nixie::escape_text("a;b"), "a#59;b");
/// assert_eq!(nixie::escape_text("plain"), "plain");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '#' || c == ';' {
            out.push('#');
            out.push_str(&(c as u32).to_string());
            out.push(';');
        } else {
            out.push(c);
        }
    }
    out
}

/// Exports sequence diagrams as Mermaid text.
///
/// The exporter is stateless between calls; every export builds its derived
/// tables from scratch and the source diagram is never mutated.
///
/// # Examples
///
/// ```
/// use nixie::MermaidExporter;
/// use nixie::model::{Diagram, SEQUENCE_NUMBERING_PROPERTY};
///
/// let diagram = Diagram::new("Empty", vec![])
///     .with_property(SEQUENCE_NUMBERING_PROPERTY, 1);
///
/// let exporter = MermaidExporter::default();
/// let text = exporter.export(&diagram).expect("export should succeed");
/// assert!(text.starts_with("sequenceDiagram\ntitle: Empty\n"));
/// ```
#[derive(Debug, Default)]
pub struct MermaidExporter {
    config: ExportConfig,
}

impl MermaidExporter {
    /// Create an exporter with the given configuration.
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Export a diagram as Mermaid `sequenceDiagram` text.
    ///
    /// # Errors
    ///
    /// Fails fast on an unusable numbering configuration or a sequence
    /// number that cannot be ordered in the configured mode. No partial
    /// text is returned on failure.
    pub fn export(&self, diagram: &Diagram) -> Result<String, NixieError> {
        info!(diagram = diagram.name(); "Exporting sequence diagram");

        let mode = sequence::numbering_mode(diagram)?;
        let participants = participants::resolve(diagram);
        let index = GeometryIndex::build(diagram);
        let ordered = sequence::canonical_order(diagram, mode)?;
        let activations = ActivationSpans::track(&ordered);
        let boundaries = frames::resolve(diagram, &ordered, &self.config.frames);
        let notes = notes::resolve(diagram, &ordered, &index, &self.config.notes);

        debug!(
            participants = participants.len(),
            messages = ordered.len(),
            frames = boundaries.len(),
            notes = notes.len();
            "Resolved diagram structure"
        );

        let mut out = String::new();
        writeln!(out, "sequenceDiagram")?;
        writeln!(out, "title: {}", diagram.name())?;

        for participant in &participants {
            let keyword = match participant.kind() {
                ParticipantKind::Lifeline => "participant",
                ParticipantKind::Actor => "actor",
            };
            writeln!(out, "{keyword} {}", participant.name())?;
        }

        let mut open_frames: HashSet<Id> = HashSet::new();

        for (current, message) in ordered.iter().enumerate() {
            for boundary in &boundaries {
                if boundary.first_inside() == Some(current)
                    && !open_frames.contains(&boundary.frame().id())
                {
                    writeln!(out, "{}", boundary.header())?;
                    open_frames.insert(boundary.frame().id());
                }
            }

            let arrow = match message.kind() {
                MessageKind::Send => "->>",
                MessageKind::Return => "-->>",
            };
            writeln!(
                out,
                "{}{arrow}{}: {}. {}",
                message.from(),
                message.to(),
                message.sequence_number(),
                escape_text(message.name().unwrap_or(""))
            )?;

            if let Some(from_activation) = message.from_activation() {
                if activations.opens_at(from_activation, current) {
                    writeln!(out, "activate {}", message.from())?;
                }
                if activations.closes_at(from_activation, current) {
                    writeln!(out, "deactivate {}", message.from())?;
                }
            }
            if let Some(to_activation) = message.to_activation() {
                // Same id on both ends: the from side already handled it
                if message.from_activation() != Some(to_activation) {
                    if activations.opens_at(to_activation, current) {
                        writeln!(out, "activate {}", message.to())?;
                    }
                    if activations.closes_at(to_activation, current) {
                        writeln!(out, "deactivate {}", message.to())?;
                    }
                }
            }

            for note in notes.iter().filter(|note| note.message() == message.id()) {
                writeln!(out, "Note over {}: {}", note.span(), escape_text(note.text()))?;
            }

            for boundary in &boundaries {
                if boundary.last_inside() == Some(current)
                    && open_frames.contains(&boundary.frame().id())
                {
                    writeln!(out, "end")?;
                    open_frames.remove(&boundary.frame().id());
                }
            }
        }

        info!(lines = out.lines().count(); "Export complete");
        Ok(out)
    }
}

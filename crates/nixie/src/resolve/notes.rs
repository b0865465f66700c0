//! Note attachment resolution.
//!
//! The source model does not reliably record which message a free-floating
//! note annotates. Attachment is resolved with a deterministic priority
//! list: an explicit note/message relation wins outright; otherwise the note
//! binds to the message minimizing a weighted Euclidean distance that favors
//! notes placed just below a message (the common visual convention for
//! commenting on the interaction that just happened). The participant span
//! the note renders over is then chosen from the note's horizontal position
//! relative to the participant columns.
//!
//! Only a deterministic, explainable choice is guaranteed; ambiguous
//! placements resolve to the first minimum, never to "no attachment".

use std::collections::HashMap;

use log::debug;

use nixie_core::{geometry::Point, identifier::Id, model::{Diagram, Message, Note}};

use crate::{config::NoteHeuristics, resolve::index::GeometryIndex};

/// Span used when a diagram has messages but no participants at all.
const PLACEHOLDER_SPAN: &str = "Participant";

/// A note bound to a message, ready for emission.
///
/// Exactly one entry exists per note that could be attached; notes in a
/// diagram without messages produce no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageNote {
    text: String,
    message: Id,
    span: String,
}

impl MessageNote {
    /// The note's trimmed text (unescaped; the emitter escapes).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Id of the message this note is emitted after.
    pub fn message(&self) -> Id {
        self.message
    }

    /// The participant span the note renders over, comma-joined when it
    /// covers two participants.
    pub fn span(&self) -> &str {
        &self.span
    }
}

/// Resolve every non-empty note against the canonical message order.
pub fn resolve(
    diagram: &Diagram,
    ordered: &[&Message],
    index: &GeometryIndex,
    config: &NoteHeuristics,
) -> Vec<MessageNote> {
    let by_id: HashMap<Id, &Message> = ordered.iter().map(|m| (m.id(), *m)).collect();

    let mut resolved = Vec::new();
    for note in diagram.notes() {
        let Some(text) = note.text().map(str::trim).filter(|text| !text.is_empty()) else {
            continue;
        };

        if let Some(message) = explicit_relation(note, &by_id) {
            let span = if message.from() == message.to() {
                message.from().to_string()
            } else {
                format!("{},{}", message.from(), message.to())
            };
            resolved.push(MessageNote {
                text: text.to_string(),
                message: message.id(),
                span,
            });
            continue;
        }

        if let Some((message, span)) = nearest_message(note, ordered, index, config) {
            resolved.push(MessageNote {
                text: text.to_string(),
                message: message.id(),
                span,
            });
        }
    }

    debug!(notes = resolved.len(); "Resolved note attachments");
    resolved
}

/// Find a message the note is explicitly related to, if any.
///
/// Both relation directions are scanned; within each, the last id resolving
/// to a message wins, and the "to" direction is scanned after "from" so it
/// takes priority when both exist. Ids that do not name a message are
/// ignored rather than treated as errors.
fn explicit_relation<'a>(note: &Note, by_id: &HashMap<Id, &'a Message>) -> Option<&'a Message> {
    let mut attached = None;
    for target in note.from_relations() {
        if let Some(message) = by_id.get(target) {
            attached = Some(*message);
        }
    }
    for source in note.to_relations() {
        if let Some(message) = by_id.get(source) {
            attached = Some(*message);
        }
    }
    attached
}

/// Select the message minimizing the weighted distance to the note, along
/// with the participant span derived from their relative placement.
///
/// The raw Euclidean distance is halved when the note lies below the
/// message within the configured window, biasing toward
/// temporally-subsequent, visually-adjacent placement. Strict `<` keeps the
/// first minimum on ties.
fn nearest_message<'a>(
    note: &Note,
    ordered: &[&'a Message],
    index: &GeometryIndex,
    config: &NoteHeuristics,
) -> Option<(&'a Message, String)> {
    let mut best: Option<(&Message, String)> = None;
    let mut min_distance = f32::MAX;

    for message in ordered {
        let Some(position) = index.message_position(message.id()) else {
            continue;
        };
        let offset = note.position().sub_point(position);
        let weight = if offset.y() > 0.0 && offset.y() < config.below_window {
            config.below_weight
        } else {
            1.0
        };
        let distance = offset.hypot() * weight;

        if distance < min_distance {
            min_distance = distance;
            let span = participant_span(note.position(), message, offset, index, config);
            best = Some((message, span));
        }
    }

    best
}

/// Choose the participant span for a note attached to `message`.
///
/// Priority order:
/// 1. note horizontally between two adjacent columns and vertically near the
///    message: span over that pair;
/// 2. note right beside the message: the destination participant;
/// 3. cross-participant message: both endpoints when the note sits between
///    their columns, otherwise the nearest column;
/// 4. self-message: the nearest column.
///
/// A diagram without participants degrades to a fixed placeholder span.
fn participant_span(
    note_position: Point,
    message: &Message,
    offset: Point,
    index: &GeometryIndex,
    config: &NoteHeuristics,
) -> String {
    let note_x = note_position.x();

    if let Some((left, right)) = index.enclosing_columns(note_x) {
        if offset.y().abs() < config.below_window {
            return format!("{left},{right}");
        }
    }

    if offset.y().abs() < config.beside_window && offset.x() > 0.0 {
        return message.to().to_string();
    }

    if message.from() != message.to() {
        // A missing column (message endpoint not among the participant
        // elements) counts as x = 0, mirroring the source model's behavior.
        let from_x = index.column_x(message.from()).unwrap_or(0.0);
        let to_x = index.column_x(message.to()).unwrap_or(0.0);
        if note_x >= from_x.min(to_x) && note_x <= from_x.max(to_x) {
            return format!("{},{}", message.from(), message.to());
        }
    }

    index
        .nearest_column(note_x)
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER_SPAN.to_string())
}

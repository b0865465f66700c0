//! Participant resolution.
//!
//! Extracts the actor/lifeline set from the element list and orders it
//! left-to-right by x coordinate, the order participant declarations are
//! emitted in.

use nixie_core::model::{Diagram, Participant};

/// Resolve the ordered participant set.
///
/// The sort is stable, so participants sharing an x coordinate keep their
/// host element order. Names are not de-duplicated; a collision between two
/// different elements passes through verbatim.
pub fn resolve(diagram: &Diagram) -> Vec<&Participant> {
    let mut participants: Vec<&Participant> = diagram.participants().collect();
    participants.sort_by(|a, b| a.x().total_cmp(&b.x()));
    participants
}

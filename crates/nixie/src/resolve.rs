//! Resolution of derived structure from the diagram model.
//!
//! The source model encodes most structure positionally: participants are
//! ordered by their x coordinates, frames own whatever messages their drawn
//! bounds cover, and free-floating notes belong to whichever message they sit
//! next to. The modules here rebuild those relationships once per export and
//! hand the emitter immutable lookup tables:
//!
//! - [`index`] - position index over the diagram, feeding the other resolvers
//! - [`participants`] - the ordered participant columns
//! - [`sequence`] - the canonical message order per numbering mode
//! - [`activations`] - activation id → ordered message occurrences
//! - [`frames`] - frame → contiguous message range
//! - [`notes`] - note → message binding and participant span

pub mod activations;
pub mod frames;
pub mod index;
pub mod notes;
pub mod participants;
pub mod sequence;

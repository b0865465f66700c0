//! Frame boundary resolution.
//!
//! Frames carry no parent/child or membership relations; which messages a
//! frame wraps is reconstructed from its drawn bounds. The vertical test is
//! exact (the Y axis is the time axis), the horizontal test allows a
//! configurable tolerance so messages drawn slightly outside a frame's
//! border still count. Nesting is not resolved explicitly: boundaries are
//! processed in top-edge order, and correct open/close interleaving emerges
//! from that ordering at emission time.

use log::debug;

use nixie_core::model::{Diagram, Frame, Message};

use crate::config::FrameHeuristics;

/// Fallback operation when a frame does not carry one.
const DEFAULT_OPERATION: &str = "opt";

/// A frame together with the canonical message indices it encloses.
///
/// `inside` is sorted ascending, so the frame opens before the message at
/// its first index and closes after the message at its last. `before` holds
/// the messages strictly above the frame's top edge; it is auxiliary
/// bookkeeping and does not affect emission.
#[derive(Debug)]
pub struct FrameBoundary<'a> {
    frame: &'a Frame,
    inside: Vec<usize>,
    before: Vec<usize>,
}

impl<'a> FrameBoundary<'a> {
    /// The underlying frame element.
    pub fn frame(&self) -> &'a Frame {
        self.frame
    }

    /// Canonical indices of the messages inside this frame, ascending.
    pub fn messages_inside(&self) -> &[usize] {
        &self.inside
    }

    /// Canonical indices of the messages strictly above this frame.
    pub fn messages_before(&self) -> &[usize] {
        &self.before
    }

    /// Canonical index of the first enclosed message, if any.
    pub fn first_inside(&self) -> Option<usize> {
        self.inside.first().copied()
    }

    /// Canonical index of the last enclosed message, if any.
    pub fn last_inside(&self) -> Option<usize> {
        self.inside.last().copied()
    }

    /// The Mermaid block header for this frame: the lowercased operation
    /// (defaulting to `opt`), followed by the label when present.
    pub fn header(&self) -> String {
        let operation = self
            .frame
            .operation()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_OPERATION.to_string());
        match self.frame.label() {
            Some(label) => format!("{operation} {label}"),
            None => operation,
        }
    }
}

/// Resolve every frame's message range against the canonical order.
///
/// Returned boundaries are sorted by frame top edge, ascending, so outer
/// frames precede the frames they visually contain.
pub fn resolve<'a>(
    diagram: &'a Diagram,
    ordered: &[&Message],
    config: &FrameHeuristics,
) -> Vec<FrameBoundary<'a>> {
    let mut frames: Vec<&Frame> = diagram.frames().collect();
    frames.sort_by(|a, b| a.bounds().min_y().total_cmp(&b.bounds().min_y()));

    let boundaries: Vec<FrameBoundary<'a>> = frames
        .into_iter()
        .map(|frame| {
            let bounds = frame.bounds();
            let mut inside = Vec::new();
            let mut before = Vec::new();

            for (index, message) in ordered.iter().enumerate() {
                let position = message.position();
                if bounds.contains_with_x_tolerance(position, config.x_tolerance) {
                    inside.push(index);
                } else if position.y() < bounds.min_y() {
                    before.push(index);
                }
            }

            FrameBoundary {
                frame,
                inside,
                before,
            }
        })
        .collect();

    debug!(frames = boundaries.len(); "Resolved frame boundaries");
    boundaries
}

//! Export configuration.
//!
//! The geometric heuristics that reconstruct note attachment and frame
//! membership depend on a handful of distance constants. They are collected
//! here with the observed host values as defaults so alternate thresholds can
//! be supplied (e.g. from a TOML file at the CLI) without touching the
//! resolvers.

use serde::Deserialize;

/// Configuration for an export run, loaded from a TOML file or defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Note-attachment heuristic constants
    #[serde(default)]
    pub notes: NoteHeuristics,

    /// Frame-containment constants
    #[serde(default)]
    pub frames: FrameHeuristics,
}

/// Constants steering the geometric note-attachment fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteHeuristics {
    /// Vertical window (position units) within which a note below a message
    /// is considered visually adjacent to it
    #[serde(default = "default_below_window")]
    pub below_window: f32,

    /// Distance weight applied when a note sits below a message inside the
    /// window, biasing selection toward temporally-subsequent placement
    #[serde(default = "default_below_weight")]
    pub below_weight: f32,

    /// Vertical window within which a note to the right of a message is
    /// pinned to the message's destination participant
    #[serde(default = "default_beside_window")]
    pub beside_window: f32,
}

/// Constants steering frame membership tests.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameHeuristics {
    /// Horizontal slack (position units) allowed on each side of a frame's
    /// drawn border when testing message containment
    #[serde(default = "default_x_tolerance")]
    pub x_tolerance: f32,
}

fn default_below_window() -> f32 {
    200.0
}

fn default_below_weight() -> f32 {
    0.5
}

fn default_beside_window() -> f32 {
    50.0
}

fn default_x_tolerance() -> f32 {
    50.0
}

impl Default for NoteHeuristics {
    fn default() -> Self {
        Self {
            below_window: default_below_window(),
            below_weight: default_below_weight(),
            beside_window: default_beside_window(),
        }
    }
}

impl Default for FrameHeuristics {
    fn default() -> Self {
        Self {
            x_tolerance: default_x_tolerance(),
        }
    }
}

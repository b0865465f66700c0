//! Error types for Nixie export operations.
//!
//! This module provides the main error type [`NixieError`]. Exports either
//! complete in full or fail with one of these variants; no partial output is
//! ever produced.

use std::fmt;

use thiserror::Error;

/// The main error type for Nixie operations.
///
/// Missing optional model data (note text, frame operation, message name) is
/// never an error; those degrade to defaults during resolution. The error
/// cases are the fail-fast ones: an unusable numbering configuration and a
/// sequence number that cannot be ordered in the configured mode.
#[derive(Debug, Error)]
pub enum NixieError {
    #[error("diagram does not carry a sequence numbering property")]
    MissingNumberingMode,

    #[error("unrecognized sequence numbering code: {code}")]
    NumberingMode { code: i64 },

    #[error("sequence number {number:?} is not an integer (required by single-level numbering)")]
    SequenceNumber { number: String },

    #[error("formatting error: {0}")]
    Fmt(#[from] fmt::Error),
}

impl From<nixie_core::model::UnknownNumbering> for NixieError {
    fn from(err: nixie_core::model::UnknownNumbering) -> Self {
        Self::NumberingMode { code: err.0 }
    }
}

//! Nixie Core Types and Definitions
//!
//! This crate provides the foundational types for the Nixie sequence-diagram
//! exporter. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Model**: The read-only sequence-diagram model ([`model`] module)

pub mod geometry;
pub mod identifier;
pub mod model;

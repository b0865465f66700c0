//! Serialization of resolved diagrams to textual form.

pub mod mermaid;

//! Position index over a diagram's elements.
//!
//! Built once per export and consulted by the note and frame resolvers for
//! proximity queries. Never mutated after construction.

use std::collections::HashMap;

use nixie_core::{geometry::Point, identifier::Id, model::Diagram};

/// Read-only index of element positions.
///
/// Holds the participant columns sorted left-to-right and the message
/// positions keyed by message id. Proximity queries resolve ties toward the
/// leftmost/first candidate so heuristic outcomes stay deterministic.
#[derive(Debug)]
pub struct GeometryIndex {
    /// Participant columns as (name, x), ascending by x
    columns: Vec<(String, f32)>,
    positions: HashMap<Id, Point>,
}

impl GeometryIndex {
    /// Build the index from a diagram.
    pub fn build(diagram: &Diagram) -> Self {
        let mut columns: Vec<(String, f32)> = diagram
            .participants()
            .map(|participant| (participant.name().to_string(), participant.x()))
            .collect();
        columns.sort_by(|a, b| a.1.total_cmp(&b.1));

        let positions = diagram
            .messages()
            .map(|message| (message.id(), message.position()))
            .collect();

        Self { columns, positions }
    }

    /// Participant columns as (name, x) pairs, ascending by x.
    pub fn columns(&self) -> &[(String, f32)] {
        &self.columns
    }

    /// Position of a message by id, if the diagram contains it.
    pub fn message_position(&self, id: Id) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// X coordinate of the named participant column.
    ///
    /// With duplicate names the leftmost column wins; the model does not
    /// disambiguate duplicates and neither does the index.
    pub fn column_x(&self, name: &str) -> Option<f32> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, x)| *x)
    }

    /// The pair of adjacent columns whose x range contains `x`, if any.
    ///
    /// Scans left to right and returns the first enclosing pair.
    pub fn enclosing_columns(&self, x: f32) -> Option<(&str, &str)> {
        self.columns.windows(2).find_map(|pair| {
            let (ref left, left_x) = pair[0];
            let (ref right, right_x) = pair[1];
            (x >= left_x && x <= right_x).then_some((left.as_str(), right.as_str()))
        })
    }

    /// Name of the column nearest to `x` by horizontal distance.
    ///
    /// The first minimum wins on ties.
    pub fn nearest_column(&self, x: f32) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;
        for (name, column_x) in &self.columns {
            let distance = (x - column_x).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((name.as_str(), distance)),
            }
        }
        best.map(|(name, _)| name)
    }
}

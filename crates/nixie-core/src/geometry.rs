//! Geometric primitives for positionally-encoded diagram data.
//!
//! This module provides the types used to interpret element positions when
//! reconstructing structural relationships (note attachment, frame
//! containment) from a sequence diagram:
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Nixie uses the same coordinate system the source diagrams do:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Lower Y therefore means *earlier* on a sequence diagram's time axis.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates with origin at top-left and Y increasing
/// downward (see [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use nixie_core::geometry::Point;
/// let note = Point::new(120.0, 260.0);
/// let message = Point::new(100.0, 200.0);
///
/// let offset = note.sub_point(message);
/// assert_eq!(offset.x(), 20.0);
/// assert_eq!(offset.y(), 60.0);
///
/// assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning the offset between them
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// Serialized as `{ x, y, width, height }` (top-left corner plus size), the
/// form diagram files carry frame geometry in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

/// Wire form of [`Bounds`]: top-left corner and size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawBounds {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Bounds::new_from_top_left(Point::new(raw.x, raw.y), Size::new(raw.width, raw.height))
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        RawBounds {
            x: bounds.min_x,
            y: bounds.min_y,
            width: bounds.width(),
            height: bounds.height(),
        }
    }
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Checks whether a point lies inside the bounds, with the horizontal
    /// edges relaxed by `x_tolerance` on each side.
    ///
    /// The vertical test is exact because the Y axis carries the temporal
    /// ordering of a sequence diagram; the horizontal test is tolerant so
    /// that elements slightly outside a frame's drawn border still count.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nixie_core::geometry::{Bounds, Point, Size};
    /// let frame = Bounds::new_from_top_left(Point::new(100.0, 100.0), Size::new(200.0, 100.0));
    ///
    /// assert!(frame.contains_with_x_tolerance(Point::new(150.0, 150.0), 0.0));
    /// assert!(frame.contains_with_x_tolerance(Point::new(80.0, 150.0), 50.0));
    /// assert!(!frame.contains_with_x_tolerance(Point::new(80.0, 150.0), 10.0));
    /// assert!(!frame.contains_with_x_tolerance(Point::new(150.0, 250.0), 50.0));
    /// ```
    pub fn contains_with_x_tolerance(self, point: Point, x_tolerance: f32) -> bool {
        point.y >= self.min_y
            && point.y <= self.max_y
            && point.x >= self.min_x - x_tolerance
            && point.x <= self.max_x + x_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_point_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        let result = p1.sub_point(p2);
        assert_eq!(result.x(), 3.0);
        assert_eq!(result.y(), 5.0);
    }

    #[test]
    fn test_point_hypot() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.hypot(), 5.0);

        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.hypot(), 0.0);
    }

    #[test]
    fn test_point_hypot_negative_offsets() {
        let above_left = Point::new(-3.0, -4.0);
        assert_approx_eq!(f32, above_left.hypot(), 5.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 50.0);
        assert_eq!(bounds.width(), 50.0);
        assert_eq!(bounds.height(), 30.0);
    }

    #[test]
    fn test_bounds_contains_exact() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));

        // Interior and edges count as inside
        assert!(bounds.contains_with_x_tolerance(Point::new(50.0, 50.0), 0.0));
        assert!(bounds.contains_with_x_tolerance(Point::new(0.0, 0.0), 0.0));
        assert!(bounds.contains_with_x_tolerance(Point::new(100.0, 100.0), 0.0));

        // Outside on either axis
        assert!(!bounds.contains_with_x_tolerance(Point::new(101.0, 50.0), 0.0));
        assert!(!bounds.contains_with_x_tolerance(Point::new(50.0, 101.0), 0.0));
        assert!(!bounds.contains_with_x_tolerance(Point::new(50.0, -1.0), 0.0));
    }

    #[test]
    fn test_bounds_x_tolerance_is_horizontal_only() {
        let bounds = Bounds::new_from_top_left(Point::new(100.0, 100.0), Size::new(100.0, 100.0));

        // Tolerance relaxes the left and right edges
        assert!(bounds.contains_with_x_tolerance(Point::new(60.0, 150.0), 50.0));
        assert!(bounds.contains_with_x_tolerance(Point::new(240.0, 150.0), 50.0));
        assert!(!bounds.contains_with_x_tolerance(Point::new(40.0, 150.0), 50.0));

        // But never the top and bottom edges
        assert!(!bounds.contains_with_x_tolerance(Point::new(150.0, 90.0), 50.0));
        assert!(!bounds.contains_with_x_tolerance(Point::new(150.0, 210.0), 50.0));
    }

    #[test]
    fn test_bounds_serde_wire_form() {
        let json = r#"{"x": 10.0, "y": 20.0, "width": 30.0, "height": 40.0}"#;
        let bounds: Bounds = serde_json::from_str(json).expect("valid bounds JSON");
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.width(), 30.0);
        assert_eq!(bounds.height(), 40.0);
    }
}

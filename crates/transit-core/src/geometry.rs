//! Geometric primitives for sequence diagram layout.
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by its minimum and maximum corners
//! - [`Insets`] - Per-side spacing (margins and paddings)
//!
//! # Coordinate System
//!
//! Transit uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Boxes are addressed by their top-left corner; widths and heights include
//! both margin and padding, following the CSS box convention.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use transit_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

    /// Returns a copy of this point with a different x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Returns a copy of this point with a different y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

    /// Returns a new Size grown by the given insets on every side
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns a new Size with `extra` added to the width only
    pub fn add_width(self, extra: f32) -> Self {
        Self {
            width: self.width + extra,
            height: self.height,
        }
    }

    /// Returns true if both dimensions are finite numbers
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// A rectangular bounding box with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x(),
            min_y: top_left.y(),
            max_x: top_left.x() + size.width(),
            max_y: top_left.y() + size.height(),
        }
    }

    /// Creates bounds spanning horizontally from `min_x` to `max_x`
    /// and vertically from `min_y` to `max_y`
    pub fn from_extents(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
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

    /// Returns the horizontal center of the bounds
    pub fn center_x(self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(self.center_x(), (self.min_y + self.max_y) / 2.0)
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the dimensions of the bounds
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Moves the bounds so the top-left corner lands on `x`, keeping the size
    pub fn with_x(self, x: f32) -> Self {
        Self::new_from_top_left(self.min_point().with_x(x), self.to_size())
    }

    /// Moves the bounds so the top-left corner lands on `y`, keeping the size
    pub fn with_y(self, y: f32) -> Self {
        Self::new_from_top_left(self.min_point().with_y(y), self.to_size())
    }

    /// Returns a copy with a different height, keeping the top-left corner
    pub fn with_height(self, height: f32) -> Self {
        Self {
            max_y: self.min_y + height,
            ..self
        }
    }

    /// Moves the bounds by the given offset
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x(),
            min_y: self.min_y + offset.y(),
            max_x: self.max_x + offset.x(),
            max_y: self.max_y + offset.y(),
        }
    }

    /// Shrinks the bounds by the given insets
    pub fn inset(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x + insets.left(),
            min_y: self.min_y + insets.top(),
            max_x: self.max_x - insets.right(),
            max_y: self.max_y - insets.bottom(),
        }
    }
}

/// Spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_with_coordinates() {
        let point = Point::new(3.5, 4.0).with_x(1.0).with_y(2.0);
        assert_approx_eq!(f32, point.x(), 1.0);
        assert_approx_eq!(f32, point.y(), 2.0);
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(10.0, 20.0).add_padding(Insets::uniform(3.0));
        assert_approx_eq!(f32, size.width(), 16.0);
        assert_approx_eq!(f32, size.height(), 26.0);
    }

    #[test]
    fn test_size_is_finite() {
        assert!(Size::new(1.0, 2.0).is_finite());
        assert!(!Size::new(f32::NAN, 2.0).is_finite());
        assert!(!Size::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_approx_eq!(f32, bounds.min_x(), 10.0);
        assert_approx_eq!(f32, bounds.max_x(), 40.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
        assert_approx_eq!(f32, bounds.center_x(), 25.0);
        assert_eq!(bounds.to_size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_bounds_with_moves_keep_size() {
        let bounds = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(5.0, 6.0))
            .with_x(10.0)
            .with_y(20.0);
        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
        assert_eq!(bounds.to_size(), Size::new(5.0, 6.0));
    }

    #[test]
    fn test_bounds_inset() {
        let bounds = Bounds::from_extents(0.0, 0.0, 100.0, 50.0).inset(Insets::uniform(10.0));
        assert_approx_eq!(f32, bounds.width(), 80.0);
        assert_approx_eq!(f32, bounds.height(), 30.0);
        assert_approx_eq!(f32, bounds.min_x(), 10.0);
    }
}

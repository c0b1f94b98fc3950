//! Diagram participants.

use std::collections::BTreeMap;

use crate::geometry::{Bounds, Size};

/// Stable handle to an [`Actor`], equal to its left-to-right index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(usize);

impl ActorId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the 0-based position of the actor in first-seen order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named participant drawn as a box with a lifeline.
///
/// Builders set the identity fields once. The layout engine owns the
/// geometry and the spacing bookkeeping: `distances` maps the index of a
/// later actor to the minimum center-to-center gap required between the
/// two, and `padding_right` reserves room after the last actor.
#[derive(Debug, Clone)]
pub struct Actor {
    alias: String,
    name: String,
    index: usize,
    text_size: Size,
    bounds: Bounds,
    distances: BTreeMap<usize, f32>,
    padding_right: f32,
}

impl Actor {
    pub(crate) fn new(alias: String, name: String, index: usize) -> Self {
        Self {
            alias,
            name,
            index,
            text_size: Size::default(),
            bounds: Bounds::default(),
            distances: BTreeMap::new(),
            padding_right: 0.0,
        }
    }

    /// Returns the unique key used to reference this actor.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the label displayed in the actor box.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> ActorId {
        ActorId(self.index)
    }

    /// Returns the measured size of the actor's label.
    pub fn text_size(&self) -> Size {
        self.text_size
    }

    /// Returns the actor box (top row) computed by layout.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn x(&self) -> f32 {
        self.bounds.min_x()
    }

    pub fn y(&self) -> f32 {
        self.bounds.min_y()
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Returns the x-coordinate of the actor's lifeline.
    pub fn center_x(&self) -> f32 {
        self.bounds.center_x()
    }

    /// Returns the recorded minimum gaps to later actors, keyed by index.
    pub fn distances(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.distances.iter().map(|(&index, &distance)| (index, distance))
    }

    /// Returns the recorded minimum gap to the actor at `index`, if any.
    pub fn distance_to(&self, index: usize) -> Option<f32> {
        self.distances.get(&index).copied()
    }

    /// Returns the space reserved to the right of this actor.
    pub fn padding_right(&self) -> f32 {
        self.padding_right
    }

    /// Clears geometry and spacing so layout can run again.
    pub fn reset_layout(&mut self, text_size: Size, bounds: Bounds) {
        self.text_size = text_size;
        self.bounds = bounds;
        self.distances.clear();
        self.padding_right = 0.0;
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Raises the recorded gap to the actor at `index` to at least `distance`.
    pub fn ensure_distance_to(&mut self, index: usize, distance: f32) {
        let entry = self.distances.entry(index).or_insert(0.0);
        *entry = entry.max(distance);
    }

    /// Raises the reserved right padding to at least `padding`.
    pub fn ensure_padding_right(&mut self, padding: f32) {
        self.padding_right = self.padding_right.max(padding);
    }

    /// Moves the actor right so its box starts at `x` or later.
    pub fn ensure_min_x(&mut self, x: f32) {
        if x > self.x() {
            self.bounds = self.bounds.with_x(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geometry::Point;

    fn actor() -> Actor {
        let mut actor = Actor::new("a".to_string(), "Alice".to_string(), 0);
        actor.reset_layout(
            Size::new(10.0, 5.0),
            Bounds::new_from_top_left(Point::default(), Size::new(40.0, 30.0)),
        );
        actor
    }

    #[test]
    fn test_ensure_distance_keeps_maximum() {
        let mut actor = actor();
        actor.ensure_distance_to(2, 50.0);
        actor.ensure_distance_to(2, 30.0);
        actor.ensure_distance_to(1, 10.0);

        assert_eq!(actor.distance_to(2), Some(50.0));
        assert_eq!(actor.distances().collect::<Vec<_>>(), vec![(1, 10.0), (2, 50.0)]);
    }

    #[test]
    fn test_ensure_min_x_never_moves_left() {
        let mut actor = actor();
        actor.ensure_min_x(25.0);
        actor.ensure_min_x(5.0);
        assert_approx_eq!(f32, actor.x(), 25.0);
        assert_approx_eq!(f32, actor.width(), 40.0);
        assert_approx_eq!(f32, actor.center_x(), 45.0);
    }

    #[test]
    fn test_reset_layout_clears_spacing() {
        let mut actor = actor();
        actor.ensure_distance_to(1, 10.0);
        actor.ensure_padding_right(7.0);
        actor.reset_layout(Size::default(), Bounds::default());
        assert_eq!(actor.distances().count(), 0);
        assert_approx_eq!(f32, actor.padding_right(), 0.0);
    }
}

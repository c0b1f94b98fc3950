//! Second layout pass: horizontal actor positions.

use transit_core::model::Diagram;

/// Moves actors right until every recorded gap is met.
///
/// Actors are visited left to right. Each one first clears the previous
/// actor (and its right padding), then pushes later actors out to the
/// distances it recorded. A gap never drops below half of either box, so
/// neighbouring boxes cannot overlap.
///
/// Returns the x-coordinate just past the last actor and its padding.
pub(super) fn relax_actors(diagram: &mut Diagram) -> f32 {
    let mut actors_x: f32 = 0.0;

    for index in 0..diagram.actor_count() {
        let Some(actor) = diagram.actor_at_mut(index) else {
            continue;
        };
        actor.ensure_min_x(actors_x);
        let x = actor.x();
        let width = actor.width();
        let padding_right = actor.padding_right();
        let distances: Vec<_> = actor.distances().collect();

        for (other, distance) in distances {
            if let Some(other) = diagram.actor_at_mut(other) {
                let half = other.width() / 2.0;
                let distance = distance.max(width / 2.0).max(half);
                other.ensure_min_x(x + width / 2.0 + distance - half);
            }
        }

        actors_x = x + width + padding_right;
    }

    actors_x
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use transit_core::{
        builder::DiagramBuilder,
        geometry::{Bounds, Point, Size},
    };

    use super::*;

    fn diagram(widths: &[f32]) -> Diagram {
        let mut builder = DiagramBuilder::new();
        for index in 0..widths.len() {
            builder.get_actor(&format!("A{index}"), None);
        }
        let mut diagram = builder.finish().unwrap();
        for (actor, width) in diagram.actors_mut().zip(widths) {
            let bounds = Bounds::new_from_top_left(Point::default(), Size::new(*width, 10.0));
            actor.reset_layout(Size::default(), bounds);
        }
        diagram
    }

    #[test]
    fn test_actors_pack_without_distances() {
        let mut diagram = diagram(&[20.0, 30.0, 40.0]);
        let width = relax_actors(&mut diagram);

        let xs: Vec<_> = diagram.actors().map(|a| a.x()).collect();
        assert_eq!(xs, vec![0.0, 20.0, 50.0]);
        assert_approx_eq!(f32, width, 90.0);
    }

    #[test]
    fn test_distance_pushes_non_adjacent_actor() {
        let mut diagram = diagram(&[20.0, 20.0, 20.0]);
        diagram.actor_at_mut(0).unwrap().ensure_distance_to(2, 100.0);
        relax_actors(&mut diagram);

        let first = diagram.actor_at(0).unwrap();
        let middle = diagram.actor_at(1).unwrap();
        let last = diagram.actor_at(2).unwrap();
        assert_approx_eq!(f32, last.center_x() - first.center_x(), 100.0);
        assert_approx_eq!(f32, middle.x(), 20.0);
    }

    #[test]
    fn test_padding_right_extends_width() {
        let mut diagram = diagram(&[20.0]);
        diagram.actor_at_mut(0).unwrap().ensure_padding_right(35.0);
        assert_approx_eq!(f32, relax_actors(&mut diagram), 55.0);
    }

    #[test]
    fn test_padding_right_clears_next_actor() {
        let mut diagram = diagram(&[20.0, 20.0]);
        diagram.actor_at_mut(0).unwrap().ensure_padding_right(15.0);
        relax_actors(&mut diagram);
        assert_approx_eq!(f32, diagram.actor_at(1).unwrap().x(), 35.0);
    }
}

use eframe::egui::{Pos2, Rect};

use super::project::ProjectedEntity;

/// An entity is hoverable within this multiple of its radius.
pub const HOVER_RADIUS_FACTOR: f32 = 3.0;

/// Resolves the last known pointer position against the projected set.
///
/// Returns the index into `entities` plus the pixel distance. When several
/// entities qualify, the nearest center wins; `total_cmp` keeps the pick
/// deterministic, so a stationary pointer never flickers between frames.
pub fn resolve_hover(
    pointer: Option<Pos2>,
    rect: Rect,
    entities: &[ProjectedEntity],
) -> Option<(usize, f32)> {
    let pointer = pointer?;

    entities
        .iter()
        .enumerate()
        .filter_map(|(index, entity)| {
            let distance = entity.screen_pos(rect).distance(pointer);
            (distance < entity.radius * HOVER_RADIUS_FACTOR).then_some((index, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 1000.0))
    }

    fn entity(entry_index: usize, x_pct: f32, y_pct: f32, radius: f32) -> ProjectedEntity {
        ProjectedEntity {
            entry_index,
            x_pct,
            y_pct,
            radius,
            brightness: 1.0,
        }
    }

    #[test]
    fn pointer_inside_hit_radius_hovers() {
        let entities = vec![entity(0, 50.0, 50.0, 20.0)];
        // Entity center is (500, 500); hit radius is 60.
        let hit = resolve_hover(Some(pos2(550.0, 500.0)), canvas(), &entities);
        assert_eq!(hit.map(|(index, _)| index), Some(0));

        let miss = resolve_hover(Some(pos2(561.0, 500.0)), canvas(), &entities);
        assert!(miss.is_none());
    }

    #[test]
    fn nearest_center_wins_on_overlap() {
        let entities = vec![
            entity(0, 50.0, 50.0, 30.0),
            entity(1, 52.0, 50.0, 30.0),
        ];
        // (530, 500) is 30 px from the first center, 10 px from the second.
        let hit = resolve_hover(Some(pos2(530.0, 500.0)), canvas(), &entities);
        assert_eq!(hit.map(|(index, _)| index), Some(1));
    }

    #[test]
    fn stationary_pointer_keeps_the_same_entity() {
        let entities = vec![
            entity(0, 50.0, 50.0, 25.0),
            entity(1, 51.0, 51.0, 25.0),
        ];
        let pointer = Some(pos2(505.0, 505.0));
        let first = resolve_hover(pointer, canvas(), &entities);
        for _ in 0..10 {
            assert_eq!(resolve_hover(pointer, canvas(), &entities), first);
        }
    }

    #[test]
    fn no_pointer_or_no_entities_yields_none() {
        assert!(resolve_hover(None, canvas(), &[entity(0, 50.0, 50.0, 20.0)]).is_none());
        assert!(resolve_hover(Some(pos2(500.0, 500.0)), canvas(), &[]).is_none());
    }
}

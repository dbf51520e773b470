use std::f32::consts::PI;

use eframe::egui::{Color32, Painter, Rect, Stroke, vec2};

use crate::board::{CompanyLanes, Entry};
use crate::util::stable_phase;

use super::super::render_utils::{blend_color, dim_color, radial_glow, ring_glow, with_alpha};
use super::project::ProjectedEntity;

/// Engagement pulses start at this count.
pub const PULSE_THRESHOLD: u32 = 10;
const PULSE_PERIOD_SECS: f32 = 6.0;
const PULSE_RING_DELAY_SECS: f32 = 1.2;
const PULSE_COLOR: Color32 = Color32::from_rgb(59, 130, 246);

const HOVER_AURA_FACTOR: f32 = 1.8;
const HOVER_CORE_FACTOR: f32 = 1.5;

/// Aura radius oscillates around 2x the base radius with a per-entity phase,
/// and expands further while hovered.
pub fn aura_radius(base_radius: f32, elapsed: f32, phase: f32, hovered: bool) -> f32 {
    let radius = base_radius * 2.0 + (elapsed * 3.0 + phase).sin() * 5.0;
    if hovered { radius * HOVER_AURA_FACTOR } else { radius }
}

pub fn core_radius(base_radius: f32, hovered: bool) -> f32 {
    if hovered {
        base_radius * HOVER_CORE_FACTOR
    } else {
        base_radius
    }
}

/// 1 to 4 rings once engagement passes the threshold, zero below it.
pub fn pulse_ring_count(engagement: u32) -> usize {
    if engagement < PULSE_THRESHOLD {
        0
    } else {
        (engagement / 15).clamp(1, 4) as usize
    }
}

/// (radius, alpha) of one expanding pulse ring. Rings are staggered by a
/// fixed delay and cycle on a fixed period, so the pulses read as continuous.
pub fn pulse_ring(core_radius: f32, elapsed: f32, ring: usize) -> (f32, f32) {
    let progress =
        ((elapsed + ring as f32 * PULSE_RING_DELAY_SECS).rem_euclid(PULSE_PERIOD_SECS))
            / PULSE_PERIOD_SECS;
    let radius = core_radius * 2.0 + progress * 25.0;
    let alpha = (progress * PI).sin() * 0.6;
    (radius, alpha)
}

/// Draws one entity as composite layers, back to front: field, aura, core,
/// specular highlight, company ring, engagement pulses. Geometry is a pure
/// function of (entity, elapsed, hovered); shared state is never touched.
#[allow(clippy::too_many_arguments)]
pub(super) fn draw_entity(
    painter: &Painter,
    rect: Rect,
    entity: &ProjectedEntity,
    entry: &Entry,
    lanes: &CompanyLanes,
    elapsed: f32,
    hovered: bool,
    dimmed: bool,
) {
    let center = entity.screen_pos(rect);
    let strength = if dimmed {
        entity.brightness * 0.3
    } else {
        entity.brightness
    };
    let category_color = if dimmed {
        dim_color(entry.category.color(), 0.5)
    } else {
        entry.category.color()
    };
    let company_color = if dimmed {
        dim_color(lanes.color(&entry.company), 0.5)
    } else {
        lanes.color(&entry.company)
    };

    // Field: ambient presence, barely above the backdrop.
    let field_radius = entity.radius * 4.0;
    radial_glow(
        painter,
        center,
        &[
            (0.0, with_alpha(category_color, 0.06 * strength)),
            (field_radius * 0.5, with_alpha(category_color, 0.02 * strength)),
            (field_radius, Color32::TRANSPARENT),
        ],
    );

    // Aura: breathing glow.
    let phase = stable_phase(&entry.id);
    let aura = aura_radius(entity.radius, elapsed, phase, hovered);
    radial_glow(
        painter,
        center,
        &[
            (0.0, with_alpha(category_color, 0.38 * strength)),
            (aura * 0.7, with_alpha(category_color, 0.13 * strength)),
            (aura, Color32::TRANSPARENT),
        ],
    );

    // Core with an off-center white bloom suggesting a light source.
    let core = core_radius(entity.radius, hovered);
    painter.circle_filled(center, core, with_alpha(category_color, 0.85 * strength));
    let bloom_center = center - vec2(core / 3.0, core / 3.0);
    radial_glow(
        painter,
        bloom_center,
        &[
            (0.0, with_alpha(Color32::WHITE, 0.9 * strength)),
            (
                core * 0.6,
                with_alpha(blend_color(Color32::WHITE, category_color, 0.6), 0.35 * strength),
            ),
            (core, Color32::TRANSPARENT),
        ],
    );

    // Specular highlight.
    painter.circle_filled(
        center - vec2(core * 0.3, core * 0.3),
        core * 0.25,
        with_alpha(Color32::WHITE, 0.9 * strength),
    );

    // Company identity ring, independent of the category color.
    ring_glow(painter, center, core * 1.3, 2.0, company_color, 0.5 * strength);

    for ring in 0..pulse_ring_count(entry.engagement) {
        let (radius, alpha) = pulse_ring(core, elapsed, ring);
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(1.5, with_alpha(PULSE_COLOR, alpha * strength)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_count_respects_threshold_and_cap() {
        assert_eq!(pulse_ring_count(0), 0);
        assert_eq!(pulse_ring_count(9), 0);
        assert_eq!(pulse_ring_count(10), 1);
        assert_eq!(pulse_ring_count(14), 1);
        assert_eq!(pulse_ring_count(45), 3);
        assert_eq!(pulse_ring_count(1000), 4);
    }

    #[test]
    fn pulse_rings_stay_bounded_over_a_full_cycle() {
        let core = 20.0;
        for ring in 0..4 {
            for step in 0..120 {
                let elapsed = step as f32 * 0.1;
                let (radius, alpha) = pulse_ring(core, elapsed, ring);
                assert!((core * 2.0..=core * 2.0 + 25.0).contains(&radius));
                assert!((0.0..=0.6 + f32::EPSILON).contains(&alpha));
            }
        }
    }

    #[test]
    fn pulse_rings_are_phase_offset() {
        let (r0, _) = pulse_ring(20.0, 0.5, 0);
        let (r1, _) = pulse_ring(20.0, 0.5, 1);
        assert_ne!(r0, r1);
    }

    #[test]
    fn hover_expands_aura_and_core() {
        let calm = aura_radius(20.0, 1.0, 0.0, false);
        let hovered = aura_radius(20.0, 1.0, 0.0, true);
        assert!((hovered - calm * HOVER_AURA_FACTOR).abs() < 1e-5);

        assert_eq!(core_radius(20.0, false), 20.0);
        assert_eq!(core_radius(20.0, true), 30.0);
    }

    #[test]
    fn aura_oscillation_is_bounded() {
        for step in 0..200 {
            let elapsed = step as f32 * 0.05;
            let radius = aura_radius(15.0, elapsed, 2.0, false);
            assert!((25.0..=35.0).contains(&radius));
        }
    }
}

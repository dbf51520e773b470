use eframe::egui::{Color32, Painter, Rect, Stroke, pos2};

use super::super::render_utils::{radial_glow, with_alpha};

const BASE_FILL: Color32 = Color32::from_rgb(3, 3, 10);

struct Nebula {
    center_x_frac: f32,
    center_y_frac: f32,
    radius_frac: f32,
    drift_x: f32,
    drift_y: f32,
    drift_rate: f32,
    color: Color32,
    alpha: f32,
}

/// Slow sinusoidal drift, periods on the order of a minute.
const NEBULAE: [Nebula; 2] = [
    Nebula {
        center_x_frac: 0.3,
        center_y_frac: 0.2,
        radius_frac: 0.6,
        drift_x: 40.0,
        drift_y: 25.0,
        drift_rate: 0.07,
        color: Color32::from_rgb(139, 92, 246),
        alpha: 0.10,
    },
    Nebula {
        center_x_frac: 0.7,
        center_y_frac: 0.8,
        radius_frac: 0.5,
        drift_x: 50.0,
        drift_y: 30.0,
        drift_rate: 0.10,
        color: Color32::from_rgb(6, 182, 212),
        alpha: 0.08,
    },
];

struct StarLayer {
    count: usize,
    /// Leftward drift in pixels per second.
    speed: f32,
    size: f32,
    opacity: f32,
}

const STAR_LAYERS: [StarLayer; 3] = [
    StarLayer {
        count: 100,
        speed: 12.0,
        size: 0.5,
        opacity: 0.3,
    },
    StarLayer {
        count: 50,
        speed: 36.0,
        size: 1.0,
        opacity: 0.6,
    },
    StarLayer {
        count: 25,
        speed: 60.0,
        size: 1.5,
        opacity: 0.9,
    },
];

/// Every Nth star pulses its opacity.
const TWINKLE_STRIDE: usize = 7;

/// Paints the full backdrop: base fill, nebulae, then parallax stars.
/// A function of elapsed time and the canvas rect only.
pub(super) fn draw_backdrop(
    painter: &Painter,
    rect: Rect,
    elapsed: f32,
    star_density: f32,
    trail_strength: f32,
) {
    painter.rect_filled(rect, 0.0, BASE_FILL);

    for nebula in &NEBULAE {
        let center = pos2(
            rect.left()
                + rect.width() * nebula.center_x_frac
                + (elapsed * nebula.drift_rate).sin() * nebula.drift_x,
            rect.top()
                + rect.height() * nebula.center_y_frac
                + (elapsed * nebula.drift_rate).cos() * nebula.drift_y,
        );
        let radius = rect.width() * nebula.radius_frac;
        radial_glow(
            painter,
            center,
            &[
                (0.0, with_alpha(nebula.color, nebula.alpha)),
                (radius, Color32::TRANSPARENT),
            ],
        );
    }

    for (layer_index, layer) in STAR_LAYERS.iter().enumerate() {
        let count = ((layer.count as f32 * star_density) as usize).max(1);
        for star_index in 0..count {
            let (x, y) = star_position(layer_index, star_index, layer.speed, elapsed, rect);
            let center = pos2(x, y);

            if trail_strength > 0.0 {
                let trail_length = layer.speed * 0.18 * trail_strength;
                painter.line_segment(
                    [center, pos2(x + trail_length, y)],
                    Stroke::new(
                        layer.size,
                        with_alpha(Color32::WHITE, layer.opacity * 0.25),
                    ),
                );
            }

            painter.circle_filled(center, layer.size, with_alpha(Color32::WHITE, layer.opacity));

            if star_index % TWINKLE_STRIDE == 0 {
                let twinkle =
                    ((elapsed * 3.0 + star_seed(layer_index, star_index)).sin() * 0.5 + 0.5) * 0.1;
                painter.circle_filled(center, layer.size * 2.0, with_alpha(Color32::WHITE, twinkle));
            }
        }
    }
}

fn star_seed(layer_index: usize, star_index: usize) -> f32 {
    (star_index * 1000 + layer_index * 10_000) as f32
}

/// Deterministic star position: the seeded baseline is fixed per
/// (layer, index), so layout survives resizes modulo the width wrap, and the
/// drift term scrolls the layer leftward with a seamless wrap.
fn star_position(
    layer_index: usize,
    star_index: usize,
    speed: f32,
    elapsed: f32,
    rect: Rect,
) -> (f32, f32) {
    let seed = star_seed(layer_index, star_index);
    let base_x_unit = seed.sin() * 0.5 + 0.5;
    let y_unit = (seed * 1.5).cos() * 0.5 + 0.5;

    let width = rect.width().max(1.0);
    let x = (base_x_unit * width - elapsed * speed).rem_euclid(width);
    (rect.left() + x, rect.top() + y_unit * rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 800.0))
    }

    #[test]
    fn star_positions_are_deterministic() {
        let rect = canvas();
        for star_index in 0..20 {
            let a = star_position(1, star_index, 36.0, 12.5, rect);
            let b = star_position(1, star_index, 36.0, 12.5, rect);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn stars_stay_inside_the_canvas() {
        let rect = canvas();
        for layer_index in 0..STAR_LAYERS.len() {
            for star_index in 0..40 {
                for elapsed in [0.0, 7.3, 1000.0] {
                    let (x, y) =
                        star_position(layer_index, star_index, 60.0, elapsed, rect);
                    assert!((rect.left()..=rect.right()).contains(&x));
                    assert!((rect.top()..=rect.bottom()).contains(&y));
                }
            }
        }
    }

    #[test]
    fn drift_moves_stars_leftward_and_wraps() {
        let rect = canvas();
        let (x0, _) = star_position(0, 3, 12.0, 0.0, rect);
        let (x1, _) = star_position(0, 3, 12.0, 1.0, rect);
        let delta = (x0 - x1).rem_euclid(rect.width());
        assert!((delta - 12.0).abs() < 0.001);
    }

    #[test]
    fn baseline_is_stable_modulo_width_across_resizes() {
        let narrow = Rect::from_min_size(Pos2::ZERO, vec2(600.0, 800.0));
        let wide = canvas();
        let (x_narrow, y_narrow) = star_position(2, 5, 60.0, 0.0, narrow);
        let (x_wide, y_wide) = star_position(2, 5, 60.0, 0.0, wide);

        // Same fractional baseline on both widths.
        assert!((x_narrow / 600.0 - x_wide / 1200.0).abs() < 0.001);
        assert!((y_narrow / 800.0 - y_wide / 800.0).abs() < 0.001);
    }
}

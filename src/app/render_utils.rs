use std::f32::consts::TAU;

use eframe::egui::epaint::Mesh;
use eframe::egui::{Color32, Painter, Pos2, Shape, Stroke, vec2};

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

/// Opaque base color with the given alpha fraction.
pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

const GLOW_SEGMENTS: u32 = 40;

/// Radial gradient as a triangle-fan mesh; the painter has no gradient
/// primitive. `stops` are (radius, color) with the first stop at radius 0.
pub(super) fn radial_glow(painter: &Painter, center: Pos2, stops: &[(f32, Color32)]) {
    if stops.len() < 2 {
        return;
    }

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, stops[0].1);

    for &(radius, color) in &stops[1..] {
        let radius = radius.max(0.0);
        for segment in 0..GLOW_SEGMENTS {
            let angle = segment as f32 / GLOW_SEGMENTS as f32 * TAU;
            mesh.colored_vertex(center + vec2(angle.cos(), angle.sin()) * radius, color);
        }
    }

    for segment in 0..GLOW_SEGMENTS {
        let next = (segment + 1) % GLOW_SEGMENTS;
        mesh.add_triangle(0, 1 + segment, 1 + next);
    }

    for ring in 1..(stops.len() as u32 - 1) {
        let inner = 1 + (ring - 1) * GLOW_SEGMENTS;
        let outer = 1 + ring * GLOW_SEGMENTS;
        for segment in 0..GLOW_SEGMENTS {
            let next = (segment + 1) % GLOW_SEGMENTS;
            mesh.add_triangle(inner + segment, outer + segment, outer + next);
            mesh.add_triangle(inner + segment, outer + next, inner + next);
        }
    }

    painter.add(Shape::mesh(mesh));
}

/// Stroked circle with fading halo strokes in place of canvas shadow blur.
pub(super) fn ring_glow(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    width: f32,
    color: Color32,
    alpha: f32,
) {
    for (offset, falloff) in [(0.0, 1.0), (1.6, 0.45), (3.2, 0.22), (4.8, 0.10)] {
        painter.circle_stroke(
            center,
            radius + offset,
            Stroke::new(width, with_alpha(color, alpha * falloff)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_color_endpoints() {
        let base = Color32::from_rgb(10, 20, 30);
        let overlay = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend_color(base, overlay, 0.0), base);
        assert_eq!(blend_color(base, overlay, 1.0), overlay);
    }

    #[test]
    fn with_alpha_clamps() {
        let color = Color32::from_rgb(255, 0, 0);
        assert_eq!(with_alpha(color, 2.0).a(), 255);
        assert_eq!(with_alpha(color, -1.0).a(), 0);
    }

    #[test]
    fn dim_color_never_brightens() {
        let color = Color32::from_rgb(100, 150, 200);
        let dimmed = dim_color(color, 0.5);
        assert!(dimmed.r() <= color.r());
        assert!(dimmed.g() <= color.g());
        assert!(dimmed.b() <= color.b());
    }
}

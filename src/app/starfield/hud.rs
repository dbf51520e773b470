use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, pos2, vec2,
};

use crate::board::{CompanyLanes, Entry};
use crate::util::truncate_ellipsis;

use super::super::render_utils::with_alpha;
use super::project::{PLOT_MAX_PCT, PLOT_MIN_PCT};

const HUD_COLOR: Color32 = Color32::from_rgb(6, 182, 212);
const CORNER_SIZE: f32 = 25.0;
const TIMELINE_TICKS: usize = 5;

/// Fixed overlay drawn after everything else: scanline sweep, pulsing corner
/// brackets, a status block and the timeline year labels.
pub(super) fn draw_hud(
    painter: &Painter,
    rect: Rect,
    elapsed: f32,
    entity_count: usize,
    link_count: usize,
    (start, end): (i32, i32),
) {
    // Scanline sweep, top to bottom on a fixed cadence.
    let scan_y = rect.top() + (elapsed * 80.0).rem_euclid(rect.height());
    painter.rect_filled(
        Rect::from_min_size(pos2(rect.left(), scan_y - 1.0), vec2(rect.width(), 3.0)),
        0.0,
        with_alpha(HUD_COLOR, 0.08),
    );

    let bracket_alpha = 0.4 + (elapsed * 2.0).sin() * 0.2;
    let stroke = Stroke::new(2.0, with_alpha(HUD_COLOR, bracket_alpha));
    for (corner, toward_x, toward_y) in [
        (rect.left_top(), 1.0, 1.0),
        (rect.right_top(), -1.0, 1.0),
        (rect.left_bottom(), 1.0, -1.0),
        (rect.right_bottom(), -1.0, -1.0),
    ] {
        painter.line_segment(
            [corner, corner + vec2(toward_x * CORNER_SIZE, 0.0)],
            stroke,
        );
        painter.line_segment(
            [corner, corner + vec2(0.0, toward_y * CORNER_SIZE)],
            stroke,
        );
    }

    let status = [
        "STARBOARD".to_owned(),
        format!("ENTRIES: {entity_count}"),
        format!("LINKS: {link_count}"),
        format!("WINDOW: {start}-{end}"),
    ];
    for (line, text) in status.iter().enumerate() {
        painter.text(
            rect.left_top() + vec2(14.0, 14.0 + line as f32 * 14.0),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(11.0),
            with_alpha(HUD_COLOR, 0.6),
        );
    }

    // Year ticks along the bottom, aligned with the plot band.
    if end > start {
        for tick in 0..TIMELINE_TICKS {
            let t = tick as f32 / (TIMELINE_TICKS - 1) as f32;
            let year = start + ((end - start) as f32 * t).round() as i32;
            let x_pct = PLOT_MIN_PCT + (PLOT_MAX_PCT - PLOT_MIN_PCT) * t;
            painter.text(
                pos2(
                    rect.left() + rect.width() * x_pct / 100.0,
                    rect.bottom() - 16.0,
                ),
                Align2::CENTER_CENTER,
                year.to_string(),
                FontId::monospace(11.0),
                with_alpha(Color32::WHITE, 0.4),
            );
        }
    }
}

const CARD_WIDTH: f32 = 280.0;
const CARD_HEIGHT: f32 = 74.0;

/// Painter-drawn preview card next to the pointer for the hovered entry.
pub(super) fn draw_hover_card(
    painter: &Painter,
    rect: Rect,
    pointer: Pos2,
    entry: &Entry,
    lanes: &CompanyLanes,
) {
    let mut origin = pointer + vec2(16.0, -CARD_HEIGHT - 12.0);
    origin.x = origin.x.clamp(rect.left(), rect.right() - CARD_WIDTH);
    origin.y = origin.y.clamp(rect.top(), rect.bottom() - CARD_HEIGHT);
    let card = Rect::from_min_size(origin, vec2(CARD_WIDTH, CARD_HEIGHT));

    painter.rect_filled(card, 6.0, Color32::from_rgba_unmultiplied(0, 0, 0, 210));
    painter.rect_stroke(
        card,
        6.0,
        Stroke::new(1.0, with_alpha(entry.category.color(), 0.5)),
        StrokeKind::Inside,
    );

    painter.text(
        card.left_top() + vec2(10.0, 10.0),
        Align2::LEFT_TOP,
        format!("{} · {}", entry.category.display_name(), entry.year),
        FontId::proportional(12.0),
        entry.category.color(),
    );
    painter.text(
        card.left_top() + vec2(10.0, 28.0),
        Align2::LEFT_TOP,
        truncate_ellipsis(&entry.text, 44),
        FontId::proportional(12.0),
        Color32::from_gray(235),
    );
    painter.text(
        card.left_top() + vec2(10.0, 48.0),
        Align2::LEFT_TOP,
        format!("{} @ {}", entry.author, entry.company),
        FontId::proportional(11.0),
        with_alpha(lanes.color(&entry.company), 0.9),
    );
    painter.text(
        card.right_top() + vec2(-10.0, 48.0),
        Align2::RIGHT_TOP,
        format!("+{}", entry.engagement),
        FontId::proportional(11.0),
        HUD_COLOR,
    );
}

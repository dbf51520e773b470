use eframe::egui::{Color32, Painter, Rect, Stroke};

use crate::board::Entry;

use super::super::render_utils::with_alpha;
use super::project::ProjectedEntity;

/// Links are local: eligible pairs further apart than this are not drawn.
pub const LINK_DISTANCE_CUTOFF: f32 = 300.0;

const LINK_COLOR: Color32 = Color32::from_rgb(6, 182, 212);
const MAX_LINK_ALPHA: f32 = 0.1;

/// Data-based eligibility: same company, or years within two of each other.
/// Symmetric by construction.
pub fn linked(a: &Entry, b: &Entry) -> bool {
    a.company == b.company || (a.year - b.year).abs() <= 2
}

/// Drawn alpha for a link at the given screen distance, `None` past the
/// cutoff so suppressed links skip the draw call entirely.
pub fn link_strength(distance: f32) -> Option<f32> {
    if distance > LINK_DISTANCE_CUTOFF {
        return None;
    }
    Some((1.0 - distance / LINK_DISTANCE_CUTOFF).max(0.0) * MAX_LINK_ALPHA)
}

/// Draws every eligible, close-enough pair; returns how many were drawn.
///
/// Quadratic over the filtered set. That set is expected to stay in the tens
/// of entities; revisit the pairing before feeding thousands through here.
pub(super) fn draw_connections(
    painter: &Painter,
    rect: Rect,
    entities: &[ProjectedEntity],
    entries: &[Entry],
) -> usize {
    let mut drawn = 0usize;

    for (offset, a) in entities.iter().enumerate() {
        let start = a.screen_pos(rect);
        for b in &entities[offset + 1..] {
            if !linked(&entries[a.entry_index], &entries[b.entry_index]) {
                continue;
            }

            let end = b.screen_pos(rect);
            let Some(alpha) = link_strength(start.distance(end)) else {
                continue;
            };

            painter.line_segment([start, end], Stroke::new(1.0, with_alpha(LINK_COLOR, alpha)));
            drawn += 1;
        }
    }

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Category;

    fn entry(company: &str, year: i32) -> Entry {
        Entry {
            id: format!("{company}-{year}"),
            text: String::new(),
            category: Category::Moment,
            author: "tester".to_owned(),
            company: company.to_owned(),
            year,
            engagement: 0,
        }
    }

    #[test]
    fn same_company_links_regardless_of_year() {
        assert!(linked(&entry("orion", 2015), &entry("orion", 2035)));
    }

    #[test]
    fn close_years_link_across_companies() {
        assert!(linked(&entry("orion", 2020), &entry("vega", 2022)));
        assert!(!linked(&entry("orion", 2020), &entry("vega", 2023)));
    }

    #[test]
    fn eligibility_is_symmetric() {
        let pairs = [
            (entry("orion", 2020), entry("orion", 2030)),
            (entry("orion", 2020), entry("vega", 2021)),
            (entry("orion", 2020), entry("vega", 2030)),
        ];
        for (a, b) in &pairs {
            assert_eq!(linked(a, b), linked(b, a));
        }
    }

    #[test]
    fn strength_decays_linearly_to_the_cutoff() {
        assert_eq!(link_strength(0.0), Some(MAX_LINK_ALPHA));
        let mid = link_strength(LINK_DISTANCE_CUTOFF / 2.0).unwrap();
        assert!((mid - MAX_LINK_ALPHA / 2.0).abs() < 1e-6);
        assert_eq!(link_strength(LINK_DISTANCE_CUTOFF), Some(0.0));
    }

    #[test]
    fn links_past_the_cutoff_are_suppressed_not_faded() {
        // Data-eligible pairs still produce no draw beyond the threshold.
        assert!(linked(&entry("orion", 2015), &entry("orion", 2035)));
        assert_eq!(link_strength(1300.0), None);
        assert_eq!(link_strength(LINK_DISTANCE_CUTOFF + 0.1), None);
    }
}

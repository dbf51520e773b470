use eframe::egui::{Pos2, Rect};

use crate::board::{Category, CompanyLanes, Entry};
use crate::util::stable_pair;

/// Active selection state, passed into the projector every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub time_window: (i32, i32),
    pub active_company: Option<String>,
    pub active_category: Option<Category>,
}

impl FilterState {
    pub fn new(time_window: (i32, i32)) -> Self {
        Self {
            time_window,
            active_company: None,
            active_category: None,
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        let (start, end) = self.time_window;
        if entry.year < start || entry.year > end {
            return false;
        }
        if let Some(company) = &self.active_company
            && &entry.company != company
        {
            return false;
        }
        if let Some(category) = self.active_category
            && entry.category != category
        {
            return false;
        }
        true
    }

    pub fn has_selection(&self) -> bool {
        self.active_company.is_some() || self.active_category.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.active_company = None;
        self.active_category = None;
    }
}

/// Screen-space view of one entry, rebuilt from scratch every frame.
#[derive(Clone, Debug)]
pub struct ProjectedEntity {
    pub entry_index: usize,
    /// Plot coordinates in percent of the canvas, both in [10, 90].
    pub x_pct: f32,
    pub y_pct: f32,
    /// Pixel radius in [15, 40].
    pub radius: f32,
    /// Alpha multiplier in [0.3, 1.0].
    pub brightness: f32,
}

impl ProjectedEntity {
    pub fn screen_pos(&self, rect: Rect) -> Pos2 {
        Pos2::new(
            rect.left() + rect.width() * self.x_pct / 100.0,
            rect.top() + rect.height() * self.y_pct / 100.0,
        )
    }
}

/// Horizontal plot band: years map into [PLOT_MIN, PLOT_MAX] percent.
pub const PLOT_MIN_PCT: f32 = 10.0;
pub const PLOT_MAX_PCT: f32 = 90.0;

/// Vertical band holding the company lanes.
const LANE_TOP_PCT: f32 = 15.0;
const LANE_BOTTOM_PCT: f32 = 85.0;

/// Overlap-avoidance jitter amplitude, percent of each axis.
const JITTER_X_PCT: f32 = 2.5;
const JITTER_Y_PCT: f32 = 6.0;

/// Projects the filtered subset of `entries` into plot space.
///
/// Pure in its inputs: dataset order is preserved, jitter is keyed by entry
/// id, and an empty result is a normal outcome for a narrow filter.
pub fn project(entries: &[Entry], filters: &FilterState, lanes: &CompanyLanes) -> Vec<ProjectedEntity> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filters.matches(entry))
        .map(|(entry_index, entry)| {
            let (jitter_x, jitter_y) = stable_pair(&entry.id);
            let x_pct = (time_axis_pct(entry.year, filters.time_window)
                + jitter_x * JITTER_X_PCT)
                .clamp(PLOT_MIN_PCT, PLOT_MAX_PCT);
            let y_pct = (lane_pct(lanes.lane(&entry.company), lanes.len())
                + jitter_y * JITTER_Y_PCT)
                .clamp(PLOT_MIN_PCT, PLOT_MAX_PCT);

            ProjectedEntity {
                entry_index,
                x_pct,
                y_pct,
                radius: entity_radius(entry.engagement),
                brightness: entity_brightness(entry.engagement),
            }
        })
        .collect()
}

/// Linear year-to-percent mapping over the plot band; a zero-width window
/// pins everything to the center instead of dividing by zero.
fn time_axis_pct(year: i32, (start, end): (i32, i32)) -> f32 {
    if start == end {
        return 50.0;
    }

    let t = ((year - start) as f32 / (end - start) as f32).clamp(0.0, 1.0);
    PLOT_MIN_PCT + (PLOT_MAX_PCT - PLOT_MIN_PCT) * t
}

/// Center of the company's lane within [LANE_TOP, LANE_BOTTOM] percent.
fn lane_pct(lane: usize, lane_count: usize) -> f32 {
    let lane_count = lane_count.max(1);
    let lane_height = (LANE_BOTTOM_PCT - LANE_TOP_PCT) / lane_count as f32;
    LANE_TOP_PCT + (lane.min(lane_count - 1) as f32 + 0.5) * lane_height
}

pub fn entity_radius(engagement: u32) -> f32 {
    (engagement as f32 / 2.0 + 15.0).clamp(15.0, 40.0)
}

pub fn entity_brightness(engagement: u32) -> f32 {
    (engagement as f32 / 100.0).clamp(0.3, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn entry(id: &str, company: &str, year: i32, engagement: u32) -> Entry {
        Entry {
            id: id.to_owned(),
            text: format!("entry {id}"),
            category: Category::Moment,
            author: "tester".to_owned(),
            company: company.to_owned(),
            year,
            engagement,
        }
    }

    fn board() -> Board {
        Board::new(vec![
            entry("a", "orion", 2015, 0),
            entry("b", "orion", 2025, 50),
            entry("c", "vega", 2035, 1000),
            entry("d", "lyra", 2040, 10),
        ])
    }

    #[test]
    fn in_window_entries_stay_inside_the_plot_band() {
        let board = board();
        let filters = FilterState::new((2015, 2035));
        let projected = project(&board.entries, &filters, &board.lanes);

        assert_eq!(projected.len(), 3);
        for entity in &projected {
            assert!((PLOT_MIN_PCT..=PLOT_MAX_PCT).contains(&entity.x_pct));
            assert!((PLOT_MIN_PCT..=PLOT_MAX_PCT).contains(&entity.y_pct));
        }
    }

    #[test]
    fn out_of_window_entries_are_excluded_entirely() {
        let board = board();
        let filters = FilterState::new((2015, 2035));
        let projected = project(&board.entries, &filters, &board.lanes);
        assert!(projected.iter().all(|entity| entity.entry_index != 3));
    }

    #[test]
    fn midpoint_year_lands_at_fifty_percent_plus_jitter() {
        let board = board();
        let filters = FilterState::new((2015, 2035));
        let projected = project(&board.entries, &filters, &board.lanes);
        let mid = projected.iter().find(|e| e.entry_index == 1).unwrap();
        assert!((mid.x_pct - 50.0).abs() <= JITTER_X_PCT + f32::EPSILON);
    }

    #[test]
    fn x_is_monotonic_in_year_modulo_jitter() {
        let window = (2015, 2035);
        let mut last = f32::MIN;
        for year in 2015..=2035 {
            let x = time_axis_pct(year, window);
            assert!(x >= last);
            last = x;
        }
    }

    #[test]
    fn zero_width_window_pins_x_to_center() {
        assert_eq!(time_axis_pct(2024, (2024, 2024)), 50.0);
        assert_eq!(time_axis_pct(1990, (2024, 2024)), 50.0);
    }

    #[test]
    fn radius_and_brightness_hit_their_floors_and_caps() {
        assert_eq!(entity_radius(0), 15.0);
        assert_eq!(entity_radius(1000), 40.0);
        assert_eq!(entity_brightness(0), 0.3);
        assert_eq!(entity_brightness(1000), 1.0);
    }

    #[test]
    fn radius_and_brightness_are_non_decreasing() {
        let mut last_radius = 0.0;
        let mut last_brightness = 0.0;
        for engagement in (0..=1200).step_by(3) {
            let radius = entity_radius(engagement);
            let brightness = entity_brightness(engagement);
            assert!(radius >= last_radius && (15.0..=40.0).contains(&radius));
            assert!(brightness >= last_brightness && (0.3..=1.0).contains(&brightness));
            last_radius = radius;
            last_brightness = brightness;
        }
    }

    #[test]
    fn jitter_is_reproducible_across_projections() {
        let board = board();
        let filters = FilterState::new((2015, 2035));
        let first = project(&board.entries, &filters, &board.lanes);
        let second = project(&board.entries, &filters, &board.lanes);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.x_pct, b.x_pct);
            assert_eq!(a.y_pct, b.y_pct);
        }
    }

    #[test]
    fn lanes_stay_stable_when_filters_change() {
        let board = board();
        let all = FilterState::new((2015, 2040));
        let narrowed = FilterState {
            active_category: Some(Category::Moment),
            ..FilterState::new((2015, 2040))
        };

        let full = project(&board.entries, &all, &board.lanes);
        let filtered = project(&board.entries, &narrowed, &board.lanes);

        for entity in &filtered {
            let same = full
                .iter()
                .find(|other| other.entry_index == entity.entry_index)
                .unwrap();
            assert_eq!(entity.y_pct, same.y_pct);
        }
    }

    #[test]
    fn company_and_category_filters_narrow_the_set() {
        let board = board();
        let mut filters = FilterState::new((2015, 2040));
        filters.active_company = Some("orion".to_owned());
        let projected = project(&board.entries, &filters, &board.lanes);
        assert_eq!(projected.len(), 2);

        filters.active_company = Some("no-such-company".to_owned());
        let projected = project(&board.entries, &filters, &board.lanes);
        assert!(projected.is_empty());
    }
}

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use eframe::egui::{self, Sense, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

mod background;
mod connect;
mod entity;
mod hud;
mod interact;
mod project;

pub use connect::{LINK_DISTANCE_CUTOFF, link_strength, linked};
pub use entity::{PULSE_THRESHOLD, aura_radius, core_radius, pulse_ring, pulse_ring_count};
pub use interact::{HOVER_RADIUS_FACTOR, resolve_hover};
pub use project::{
    FilterState, PLOT_MAX_PCT, PLOT_MIN_PCT, ProjectedEntity, entity_brightness, entity_radius,
    project,
};

use super::{SearchMatchCache, ViewModel};

/// Animation clock with first-class start/stop. Elapsed time freezes while
/// stopped, so pausing holds the field still instead of jumping on resume.
#[derive(Clone, Debug)]
pub struct Playback {
    running: bool,
    resumed_at: Instant,
    banked_secs: f32,
}

impl Playback {
    pub fn started() -> Self {
        Self {
            running: true,
            resumed_at: Instant::now(),
            banked_secs: 0.0,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> f32 {
        if self.running {
            self.banked_secs + self.resumed_at.elapsed().as_secs_f32()
        } else {
            self.banked_secs
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.resumed_at = Instant::now();
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.banked_secs = self.elapsed_secs();
            self.running = false;
        }
    }

    pub fn set_running(&mut self, running: bool) {
        if running { self.start() } else { self.stop() }
    }
}

impl ViewModel {
    /// One starfield frame, in fixed order: backdrop, projection,
    /// connections, entities, hover refresh, HUD overlay last.
    ///
    /// The canvas rect comes fresh from egui every frame, so resize and
    /// pixel-density changes need no special handling here.
    pub(in crate::app) fn draw_starfield(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);
        let elapsed = self.playback.elapsed_secs();

        background::draw_backdrop(
            &painter,
            rect,
            elapsed,
            self.star_density,
            self.trail_strength,
        );

        let entities = project(&self.board.entries, &self.filters, &self.board.lanes);
        self.frame_entity_count = entities.len();

        self.frame_link_count = if self.show_connections {
            connect::draw_connections(&painter, rect, &entities, &self.board.entries)
        } else {
            0
        };

        if let Some(pointer) = response.hover_pos() {
            self.last_pointer = Some(pointer);
        }

        // Entities render with the hover state the resolver produced last
        // frame; the resolver itself runs after the entity pass.
        let search_matches = self.search_matches();
        for entity_view in &entities {
            let entry = &self.board.entries[entity_view.entry_index];
            let hovered = self.hovered.as_deref() == Some(entry.id.as_str());
            let dimmed = search_matches
                .as_ref()
                .is_some_and(|matches| !matches.contains(&entity_view.entry_index));
            entity::draw_entity(
                &painter,
                rect,
                entity_view,
                entry,
                &self.board.lanes,
                elapsed,
                hovered,
                dimmed,
            );
        }

        let hover_hit = interact::resolve_hover(self.last_pointer, rect, &entities);
        self.hovered = hover_hit
            .map(|(index, _)| self.board.entries[entities[index].entry_index].id.clone());

        if self.hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        if response.clicked()
            && let Some(id) = self.hovered.clone()
        {
            self.select_entry(Some(id));
        }

        if self.show_hud {
            hud::draw_hud(
                &painter,
                rect,
                elapsed,
                self.frame_entity_count,
                self.frame_link_count,
                self.filters.time_window,
            );
        }

        if let Some(id) = &self.hovered
            && let Some(pointer) = self.last_pointer
            && let Some(entry) = self.board.entry_by_id(id)
        {
            hud::draw_hover_card(&painter, rect, pointer, entry, &self.board.lanes);
        }

        if self.playback.running() {
            ui.ctx().request_repaint();
        }
    }

    /// Entry indices matching the search box, cached per query. `None` while
    /// the query is empty (nothing dims).
    fn search_matches(&mut self) -> Option<Arc<HashSet<usize>>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(cached) = &self.search_match_cache
            && cached.query == query
        {
            return Some(Arc::clone(&cached.matches));
        }

        let matcher = SkimMatcherV2::default();
        let matches = self
            .board
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let hit = matcher.fuzzy_match(&entry.text, query).is_some()
                    || matcher.fuzzy_match(&entry.author, query).is_some()
                    || matcher.fuzzy_match(&entry.company, query).is_some();
                hit.then_some(index)
            })
            .collect::<HashSet<_>>();
        let matches = Arc::new(matches);

        self.search_match_cache = Some(SearchMatchCache {
            query: query.to_owned(),
            matches: Arc::clone(&matches),
        });

        Some(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopping_freezes_elapsed_time() {
        let mut playback = Playback::started();
        playback.stop();
        let first = playback.elapsed_secs();
        let second = playback.elapsed_secs();
        assert_eq!(first, second);
        assert!(!playback.running());
    }

    #[test]
    fn restart_resumes_from_the_banked_time() {
        let mut playback = Playback::started();
        playback.stop();
        let banked = playback.elapsed_secs();
        playback.start();
        assert!(playback.running());
        assert!(playback.elapsed_secs() >= banked);
    }

    #[test]
    fn set_running_is_idempotent() {
        let mut playback = Playback::started();
        playback.set_running(true);
        assert!(playback.running());
        playback.set_running(false);
        playback.set_running(false);
        assert!(!playback.running());
    }
}

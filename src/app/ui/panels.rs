use eframe::egui::{self, Align, Context, Layout};

use crate::board::Board;

use super::super::starfield::{FilterState, Playback};
use super::super::{ViewMode, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(board: Board, initial_window: (i32, i32)) -> Self {
        Self {
            filters: FilterState::new(initial_window),
            board,
            view_mode: ViewMode::Starfield,
            search: String::new(),
            search_match_cache: None,
            selected: None,
            hovered: None,
            last_pointer: None,
            playback: Playback::started(),
            star_density: 1.0,
            trail_strength: 0.5,
            show_connections: true,
            show_hud: true,
            frame_entity_count: 0,
            frame_link_count: 0,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("starboard");
                    ui.separator();
                    ui.label(format!("entries: {}", self.board.entry_count()));
                    ui.label(format!("companies: {}", self.board.lanes.len()));
                    let (start, end) = self.filters.time_window;
                    ui.label(format!("window: {start}-{end}"));
                    ui.separator();

                    ui.selectable_value(&mut self.view_mode, ViewMode::Starfield, "Starfield")
                        .on_hover_text("Animated starfield of the filtered entries.");
                    ui.selectable_value(&mut self.view_mode, ViewMode::List, "List")
                        .on_hover_text("Filtered entries as a flat list, newest first.");
                    ui.selectable_value(&mut self.view_mode, ViewMode::Companies, "Companies")
                        .on_hover_text("Per-company totals over the active time window.");

                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload board"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.view_mode == ViewMode::Starfield {
                            ui.label(format!(
                                "showing {} entries / {} links",
                                self.frame_entity_count, self.frame_link_count
                            ));
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_controls(ui));

        if self.selected.is_some() {
            egui::SidePanel::right("details")
                .resizable(true)
                .default_width(340.0)
                .show(ctx, |ui| self.draw_details(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Loading the board...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
                return;
            }

            match self.view_mode {
                ViewMode::Starfield => self.draw_starfield(ui),
                ViewMode::List => self.draw_list(ui),
                ViewMode::Companies => self.draw_companies(ui),
            }
        });
    }

    /// The starfield's outbound selection notification lands here; the
    /// detail panel is this shell's concern, not the engine's.
    pub(in crate::app) fn select_entry(&mut self, selected: Option<String>) {
        self.selected = selected;
    }
}

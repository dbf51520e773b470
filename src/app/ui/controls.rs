use eframe::egui::{self, RichText, Ui};

use crate::board::Category;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Board Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search (text, author or company)")
            .on_hover_text("Fuzzy-dim entries that do not match, without changing the filter.");
        if ui.text_edit_singleline(&mut self.search).changed() {
            self.search_match_cache = None;
        }

        ui.separator();

        let (slider_min, slider_max) = self.year_slider_bounds();
        let (mut start, mut end) = self.filters.time_window;

        let start_slider = ui
            .add(egui::Slider::new(&mut start, slider_min..=slider_max).text("From year"))
            .on_hover_text("Entries before this year are excluded.");
        let end_slider = ui
            .add(egui::Slider::new(&mut end, slider_min..=slider_max).text("To year"))
            .on_hover_text("Entries after this year are excluded.");

        // Keep the window well formed whichever handle moved.
        if start_slider.changed() {
            end = end.max(start);
        }
        if end_slider.changed() {
            start = start.min(end);
        }
        self.filters.time_window = (start, end);

        ui.add_space(4.0);

        let company_label = self
            .filters
            .active_company
            .clone()
            .unwrap_or_else(|| "All companies".to_owned());
        egui::ComboBox::from_label("Company")
            .selected_text(company_label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filters.active_company, None, "All companies");
                let companies = self.board.lanes.companies().to_vec();
                for company in companies {
                    ui.selectable_value(
                        &mut self.filters.active_company,
                        Some(company.clone()),
                        company,
                    );
                }
            });

        let category_label = self
            .filters
            .active_category
            .map(Category::display_name)
            .unwrap_or("All categories");
        egui::ComboBox::from_label("Category")
            .selected_text(category_label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filters.active_category, None, "All categories");
                for category in Category::ALL {
                    ui.selectable_value(
                        &mut self.filters.active_category,
                        Some(category),
                        category.display_name(),
                    );
                }
            });

        if self.filters.has_selection() && ui.button("Clear filters").clicked() {
            self.filters.clear_selection();
        }

        ui.separator();

        let mut running = self.playback.running();
        if ui
            .checkbox(&mut running, "Run animation")
            .on_hover_text("Pause to freeze the field; elapsed time stops with it.")
            .changed()
        {
            self.playback.set_running(running);
        }

        ui.collapsing("Starfield tuning", |ui| {
            ui.add(
                egui::Slider::new(&mut self.star_density, 0.25..=2.0).text("Star density"),
            )
            .on_hover_text("Scales the number of background stars per layer.");
            ui.add(
                egui::Slider::new(&mut self.trail_strength, 0.0..=1.0).text("Trail length"),
            )
            .on_hover_text("Length of the motion streaks behind drifting stars.");
            ui.checkbox(&mut self.show_connections, "Draw connections")
                .on_hover_text("Edges between entries of one company or adjacent years.");
            ui.checkbox(&mut self.show_hud, "Show HUD overlay")
                .on_hover_text("Scanline, corner brackets and the status readout.");
        });

        ui.separator();

        egui::CollapsingHeader::new("Legend")
            .default_open(true)
            .show(ui, |ui| {
                for category in Category::ALL {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("●").color(category.color()));
                        ui.label(category.display_name());
                    });
                }
            });
    }

    fn year_slider_bounds(&self) -> (i32, i32) {
        let (start, end) = self.filters.time_window;
        let (observed_min, observed_max) = self.board.year_span().unwrap_or((start, end));
        (observed_min.min(start) - 5, observed_max.max(end) + 5)
    }
}

use eframe::egui::{RichText, Ui};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Entry");
            if ui.button("Close").clicked() {
                self.select_entry(None);
            }
        });
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Click an entry in the starfield or the list.");
            return;
        };

        let Some(entry) = self.board.entry_by_id(&selected_id) else {
            ui.label("The selected entry is no longer on the board.");
            return;
        };

        let category = entry.category;
        let company = entry.company.clone();
        let company_color = self.board.lanes.color(&company);

        ui.horizontal(|ui| {
            ui.label(RichText::new("●").color(category.color()));
            ui.label(RichText::new(category.display_name()).color(category.color()));
            ui.label(RichText::new(entry.year.to_string()).weak());
        });
        ui.add_space(6.0);

        ui.label(RichText::new(entry.text.clone()).size(15.0));
        ui.add_space(8.0);

        ui.label(format!("by {}", entry.author));
        ui.horizontal(|ui| {
            ui.label(RichText::new("■").color(company_color));
            ui.label(company.clone());
        });

        ui.separator();

        let engagement = entry.engagement;
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{engagement} endorsements")).strong());
            // The starfield re-reads engagement next frame; rings and size
            // follow without any extra plumbing.
            if ui.button("Endorse").clicked()
                && let Some(entry) = self.board.entry_by_id_mut(&selected_id)
            {
                entry.engagement = entry.engagement.saturating_add(1);
            }
        });
    }
}

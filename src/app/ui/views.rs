use eframe::egui::{self, RichText, Ui};

use crate::util::truncate_ellipsis;

use super::super::{ViewMode, ViewModel};

impl ViewModel {
    /// Filtered entries as a flat list, newest first.
    pub(in crate::app) fn draw_list(&mut self, ui: &mut Ui) {
        let mut rows = self
            .board
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.filters.matches(entry))
            .map(|(index, entry)| (index, entry.year))
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        if rows.is_empty() {
            ui.label("No entries match the current filters.");
            return;
        }

        let mut pending_selection = None;
        egui::ScrollArea::vertical()
            .id_salt("entry_list_scroll")
            .auto_shrink([false, false])
            .show_rows(ui, 44.0, rows.len(), |ui, row_range| {
                for row in row_range {
                    let Some(&(entry_index, _)) = rows.get(row) else {
                        continue;
                    };
                    let Some(entry) = self.board.entries.get(entry_index) else {
                        continue;
                    };

                    let is_selected = self.selected.as_deref() == Some(entry.id.as_str());
                    let row_response = ui
                        .horizontal(|ui| {
                            ui.label(RichText::new("●").color(entry.category.color()));
                            ui.label(RichText::new(entry.year.to_string()).weak());
                            let clicked = ui
                                .selectable_label(
                                    is_selected,
                                    truncate_ellipsis(&entry.text, 72),
                                )
                                .on_hover_text(entry.text.clone())
                                .clicked();
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(format!("+{}", entry.engagement));
                                    ui.label(
                                        RichText::new(format!(
                                            "{} @ {}",
                                            entry.author, entry.company
                                        ))
                                        .weak(),
                                    );
                                },
                            );
                            clicked
                        })
                        .inner;

                    if row_response {
                        pending_selection = Some(entry.id.clone());
                    }
                }
            });

        if let Some(id) = pending_selection {
            self.select_entry(Some(id));
        }
    }

    /// Per-company aggregate over the active time window. The company filter
    /// is ignored here on purpose; the view compares companies side by side.
    pub(in crate::app) fn draw_companies(&mut self, ui: &mut Ui) {
        let (start, end) = self.filters.time_window;
        let mut totals = self
            .board
            .lanes
            .companies()
            .iter()
            .map(|company| (company.clone(), 0usize, 0u64))
            .collect::<Vec<_>>();

        for entry in &self.board.entries {
            if entry.year < start || entry.year > end {
                continue;
            }
            if let Some(row) = totals.iter_mut().find(|(company, _, _)| *company == entry.company) {
                row.1 += 1;
                row.2 += u64::from(entry.engagement);
            }
        }
        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.2.cmp(&a.2)));

        ui.label(format!("Company totals for {start}-{end}"));
        ui.add_space(6.0);

        let mut pending_company = None;
        egui::ScrollArea::vertical()
            .id_salt("company_totals_scroll")
            .auto_shrink([false, false])
            .show_rows(ui, 26.0, totals.len(), |ui, row_range| {
                for row in row_range {
                    let Some((company, count, engagement)) = totals.get(row) else {
                        continue;
                    };

                    let is_active = self.filters.active_company.as_deref() == Some(company);
                    let row_response = ui
                        .horizontal(|ui| {
                            ui.label(RichText::new("■").color(self.board.lanes.color(company)));
                            let clicked = ui.selectable_label(is_active, company).clicked();
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(format!(
                                        "{count} entries · {engagement} endorsements"
                                    ));
                                },
                            );
                            clicked
                        })
                        .inner;

                    if row_response {
                        pending_company = Some(company.clone());
                    }
                }
            });

        if let Some(company) = pending_company {
            // Clicking an active company clears the filter again.
            if self.filters.active_company.as_deref() == Some(company.as_str()) {
                self.filters.active_company = None;
            } else {
                self.filters.active_company = Some(company);
                self.view_mode = ViewMode::Starfield;
            }
        }
    }
}

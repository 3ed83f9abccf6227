use super::{App, Config};
use crate::PATTERNS;
use eframe::egui::{Button, ComboBox, PointerButton, Sense, Ui};

impl App {
    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.playback.is_running() { "Stop" } else { "Start" };
            if ui.button(text).clicked() {
                self.start_stop();
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
            // stepping and running are exclusive
            let stopped = !self.playback.is_running();
            if ui.add_enabled(stopped, Button::new("→")).clicked() {
                self.next_frame();
            }
            if ui.button("Random").clicked() {
                self.randomize();
            }

            ui.separator();

            ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Place").clicked() {
                self.place_selected_pattern();
            }
            if ui.button("Open RLE").clicked() {
                self.open_file_dialog();
            }
            if ui.button("Fit").clicked() {
                self.fit_view();
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.generation));
            ui.separator();
            ui.label(format!("Population: {}", self.board.population()));
            ui.separator();
            ui.label(format!(
                "Last update: {:.3} ms",
                self.last_update_duration * 1e3
            ));
            ui.separator();
            ui.label(format!("Tick: {} ms", self.playback.interval().as_millis()));
            if let Some(cell) = self.hovered {
                ui.separator();
                ui.label(cell.to_string());
            }
        });

        if !self.status.is_empty() {
            ui.label(&self.status);
        }
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);
        self.life_rect.replace(rect);

        painter.rect_filled(rect, 0., Config::DEAD_COLOR);
        let (min, max) = self.viewport.visible_cells(rect.size());
        for cell in self.board.live_cells() {
            if (min.x..=max.x).contains(&cell.x) && (min.y..=max.y).contains(&cell.y) {
                let cell_rect = self.viewport.cell_rect(cell, rect.min);
                painter.rect_filled(cell_rect, 0., Config::LIVE_COLOR);
            }
        }

        self.hovered = response
            .hover_pos()
            .map(|pos| self.viewport.which_cell(pos, rect.min));
        if let Some(cell) = self.hovered {
            painter.rect_filled(
                self.viewport.cell_rect(cell, rect.min),
                0.,
                Config::HIGHLIGHT_COLOR,
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.toggle(self.viewport.which_cell(pos, rect.min));
            }
        }
        if response.dragged_by(PointerButton::Secondary) {
            self.viewport.pan_pixels(response.drag_delta());
        }
        if response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll != 0. {
                self.viewport
                    .zoom(Config::ZOOM_STEP.powf(scroll / Config::SCROLL_SCALE));
            }
        }
    }
}

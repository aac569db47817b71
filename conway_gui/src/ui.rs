// ui.rs - Rendering and input; every change goes through the engine

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use tracing::warn;

use conway::{Command, PATTERNS};
use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame = self.engine.frame();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.frame.running { "⏸ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.frame.running {
                        self.engine.stop();
                    } else {
                        self.engine.start();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.engine.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.engine.send(Command::Randomize(rand::random()));
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.engine.send(Command::LoadPattern(self.selected_pattern));
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.frame.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.label("Click cells to toggle them. Edges wrap around.");

            ui.separator();

            let grid = &self.frame.grid;
            let pitch = self.cell_size + Self::SPACING;
            let (width, height) = self.board_size();

            let start_pos = ui.cursor().min;
            let (response, painter) =
                ui.allocate_painter(Vec2::new(width, height), egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, Vec2::new(width, height)),
                0.0,
                Color32::GRAY,
            );

            for (row, cells) in grid.iter_rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(start_pos.x + col as f32 * pitch, start_pos.y + row as f32 * pitch),
                        Vec2::splat(self.cell_size),
                    );
                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 0.0, cell_color);
                    painter.rect_stroke(rect, 0.0, Stroke::new(0.3, Color32::GRAY));
                }
            }

            // Map the click straight to a cell instead of hit-testing every rect
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let row = (offset.y / pitch) as usize;
                        let col = (offset.x / pitch) as usize;
                        if let Err(err) = self.engine.toggle(row, col) {
                            warn!(%err, "click outside the board");
                        }
                    }
                }
            }

            ui.separator();

            let live_cells = grid.live_count();
            let total = grid.rows() * grid.cols();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep pulling frames while the engine is ticking
        if self.frame.running {
            ctx.request_repaint();
        }
    }
}

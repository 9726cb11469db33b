use eframe::egui::{self, Color32, Sense, Stroke, Vec2};

use crate::color::Color;
use crate::command::Command;
use crate::grid::Grid;
use crate::input::CanvasLayout;
use crate::palette::Palette;

const GRID_LINE_COLOR: Color32 = Color32::from_gray(210);
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(30, 144, 255);
const SWATCH_SIZE: f32 = 28.0;

/// Draws the canvas and palette with egui.
///
/// egui repaints every frame, so the renderer always draws the full grid; the session's repaint hints are
/// only used to decide whether a new frame is needed.
#[derive(Debug, Clone)]
pub struct Renderer {
    show_grid_lines: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            show_grid_lines: true,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    /// Paints every cell of the grid into the layout's rectangle
    pub fn paint_grid(&self, painter: &egui::Painter, layout: &CanvasLayout, grid: &Grid) {
        for (cell, color) in grid.iter() {
            painter.rect_filled(layout.cell_rect(cell), 0.0, color.to_color32());
        }

        if self.show_grid_lines {
            let stroke = Stroke::new(1.0, GRID_LINE_COLOR);
            let rect = layout.rect;
            let step = layout.cell_size();
            for i in 0..=layout.dimension {
                let offset = i as f32 * step;
                painter.line_segment(
                    [
                        egui::pos2(rect.min.x + offset, rect.min.y),
                        egui::pos2(rect.min.x + offset, rect.max.y),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        egui::pos2(rect.min.x, rect.min.y + offset),
                        egui::pos2(rect.max.x, rect.min.y + offset),
                    ],
                    stroke,
                );
            }
        }
    }

    /// Shows the palette as clickable swatches, outlining the current color.
    ///
    /// Returns a `SelectColor` command when a swatch is clicked.
    pub fn palette_ui(
        &self,
        ui: &mut egui::Ui,
        palette: &Palette,
        current: &Color,
    ) -> Option<Command> {
        let mut command = None;

        ui.horizontal_wrapped(|ui| {
            for color in palette.iter() {
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
                let painter = ui.painter();
                painter.rect_filled(rect, 2.0, color.to_color32());

                let outline = if color == current {
                    Stroke::new(3.0, HIGHLIGHT_COLOR)
                } else {
                    Stroke::new(1.0, Color32::DARK_GRAY)
                };
                painter.rect_stroke(rect, 2.0, outline);

                if response.on_hover_text(color.name()).clicked() {
                    command = Some(Command::SelectColor(color.clone()));
                }
            }
        });

        command
    }
}

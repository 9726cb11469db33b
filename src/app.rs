use eframe::egui;

use crate::command::Command;
use crate::config::{MAX_CELL_SIZE, SessionConfig};
use crate::error::{LoadError, PersistenceResult};
use crate::export::export_png;
use crate::input::{CanvasLayout, InputHandler, PointerFrame};
use crate::renderer::Renderer;
use crate::state::{PaintSession, Repaint, SnapshotStore};

/// eframe's key-value storage doubles as the snapshot store
impl<'a> SnapshotStore for dyn eframe::Storage + 'a {
    fn read(&self, key: &str) -> Result<Option<String>, LoadError> {
        Ok(self.get_string(key))
    }

    fn write(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        self.set_string(key, value);
        Ok(())
    }
}

pub struct PaintApp {
    config: SessionConfig,
    session: PaintSession,
    renderer: Renderer,
    input: InputHandler,
    status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SessionConfig, session: PaintSession) -> Self {
        let mut app = Self {
            config,
            session,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            status: None,
        };

        if let Some(storage) = cc.storage {
            match app.session.load_from(storage, &app.config.storage_key) {
                Ok(_) => {}
                Err(LoadError::Missing) => log::info!("No saved canvas, starting blank"),
                Err(err) => {
                    log::warn!("Could not restore saved canvas: {}", err);
                    app.status = Some(format!("Could not restore saved canvas: {}", err));
                }
            }
        }

        app
    }

    fn execute(&mut self, command: Command, ctx: &egui::Context) {
        let name = command.name();
        match self.session.apply(command) {
            Ok(Repaint::Nothing) => {}
            Ok(repaint) => {
                if let Repaint::Cells(changes) = &repaint {
                    log::trace!("{} changed {} cells", name, changes.len());
                }
                ctx.request_repaint();
            }
            Err(err) => log::warn!("{} failed: {}", name, err),
        }
    }

    fn export(&mut self) {
        let cell_size = self.config.cell_size.round().clamp(1.0, MAX_CELL_SIZE) as u32;
        self.status = Some(
            match export_png(self.session.grid(), &self.config.export_path, cell_size) {
                Ok(()) => format!("Exported to {}", self.config.export_path.display()),
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    format!("Export failed: {}", err)
                }
            },
        );
    }

    fn side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("palette").show(ctx, |ui| {
            ui.heading("Palette");
            let palette_command =
                self.renderer
                    .palette_ui(ui, self.session.palette(), self.session.current_color());
            if let Some(command) = palette_command {
                self.execute(command, ctx);
            }

            ui.separator();
            ui.label(format!("Current: {}", self.session.current_color()));
            ui.label("Hold Ctrl, Cmd or Alt while clicking to fill");

            if ui.button("Clear (Del)").clicked() {
                self.execute(Command::ClearCanvas, ctx);
            }
            if ui.button("Export PNG").clicked() {
                self.export();
            }

            let mut show_lines = self.renderer.show_grid_lines();
            if ui.checkbox(&mut show_lines, "Grid lines").changed() {
                self.renderer.set_show_grid_lines(show_lines);
            }

            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status.as_str());
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(err) = self.session.save_to(storage, &self.config.storage_key) {
            log::error!("Failed to save canvas: {}", err);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.side_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let dimension = self.session.grid().dimension();
            let side = self.config.cell_size * dimension as f32;
            let (response, painter) =
                ui.allocate_painter(egui::Vec2::splat(side), egui::Sense::click_and_drag());
            let layout = CanvasLayout::new(response.rect.min, self.config.cell_size, dimension);

            let frame = PointerFrame::from_egui(ctx);
            for command in self.input.translate(&frame, &layout) {
                self.execute(command, ctx);
            }

            self.renderer.paint_grid(&painter, &layout, self.session.grid());
        });
    }
}

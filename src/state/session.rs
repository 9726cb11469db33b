//! The paint session owns the grid, the palette and the current color, and turns interaction intents into
//! grid mutations.
//!
//! Every operation runs to completion before returning and reports what the render side should redraw as a
//! [`Repaint`]. The session never pushes notifications itself.

use crate::color::Color;
use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::{LoadError, PaletteError, PersistenceResult, SessionError, SessionResult};
use crate::fill::flood_fill;
use crate::grid::{CellChange, Grid};
use crate::palette::Palette;

use super::{SessionState, Snapshot, SnapshotStore};

/// What the render side needs to redraw after an operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Repaint {
    /// Nothing visible changed
    #[default]
    Nothing,
    /// Only these cells changed
    Cells(Vec<CellChange>),
    /// The current color changed; only the palette highlight moves
    Palette,
    /// Redraw the whole canvas
    Canvas,
}

impl Repaint {
    fn from_cells(changes: Vec<CellChange>) -> Self {
        if changes.is_empty() {
            Repaint::Nothing
        } else {
            Repaint::Cells(changes)
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaintSession {
    grid: Grid,
    palette: Palette,
    background: Color,
    current_color: Color,
    state: SessionState,
}

impl PaintSession {
    /// Creates a session with a blank canvas from a configuration
    pub fn new(config: &SessionConfig) -> SessionResult<Self> {
        let palette = Palette::new(config.palette.clone())?;
        Self::with_palette(
            config.dimension,
            palette,
            config.background.clone(),
            config.initial_color.clone(),
        )
    }

    pub fn with_palette(
        dimension: usize,
        palette: Palette,
        background: Color,
        initial_color: Color,
    ) -> SessionResult<Self> {
        if !palette.contains(&background) {
            return Err(PaletteError::MissingBackground(background).into());
        }
        if !palette.contains(&initial_color) {
            return Err(PaletteError::MissingInitialColor(initial_color).into());
        }

        let grid = Grid::new(dimension, background.clone())?;
        log::debug!(
            "Created {}x{} session with {} colors",
            dimension,
            dimension,
            palette.len()
        );

        Ok(Self {
            grid,
            palette,
            background,
            current_color: initial_color,
            state: SessionState::Idle,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn current_color(&self) -> &Color {
        &self.current_color
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn transition_to(&mut self, new_state: SessionState) {
        if !self.state.can_transition_to(new_state) {
            return;
        }
        log::debug!(
            "Session state {} -> {}",
            self.state.name(),
            new_state.name()
        );
        self.state = new_state;
    }

    /// Executes a single command
    pub fn apply(&mut self, command: Command) -> SessionResult<Repaint> {
        log::trace!("Applying {:?}", command);
        match command {
            Command::SelectColor(color) => self.select_color(&color),
            Command::PointerDown {
                row,
                col,
                modifier_active,
            } => self.pointer_down(row, col, modifier_active),
            Command::PointerMove {
                row,
                col,
                button_pressed,
            } => self.pointer_move(row, col, button_pressed),
            Command::PointerUp => Ok(self.pointer_up()),
            Command::ClearCanvas => Ok(self.clear_canvas()),
        }
    }

    /// Makes `color` the current color. Fails with `UnknownColor` if it is not in the palette.
    pub fn select_color(&mut self, color: &Color) -> SessionResult<Repaint> {
        if !self.palette.contains(color) {
            return Err(SessionError::UnknownColor(color.clone()));
        }
        if self.current_color == *color {
            return Ok(Repaint::Nothing);
        }
        self.current_color = color.clone();
        Ok(Repaint::Palette)
    }

    /// Paints the cell and starts a drag, or flood fills from it when the modifier is held
    pub fn pointer_down(
        &mut self,
        row: usize,
        col: usize,
        modifier_active: bool,
    ) -> SessionResult<Repaint> {
        if modifier_active {
            let filled = flood_fill(&mut self.grid, row, col, &self.current_color)?;
            let changes = filled
                .into_iter()
                .map(|cell| CellChange {
                    cell,
                    color: self.current_color.clone(),
                })
                .collect();
            return Ok(Repaint::from_cells(changes));
        }

        let change = self.grid.set(row, col, self.current_color.clone())?;
        self.transition_to(SessionState::Dragging);
        Ok(Repaint::from_cells(change.into_iter().collect()))
    }

    /// Paints the cell under the pointer while the button is held
    pub fn pointer_move(
        &mut self,
        row: usize,
        col: usize,
        button_pressed: bool,
    ) -> SessionResult<Repaint> {
        if !button_pressed {
            return Ok(Repaint::Nothing);
        }
        let change = self.grid.set(row, col, self.current_color.clone())?;
        Ok(Repaint::from_cells(change.into_iter().collect()))
    }

    /// Ends a drag. Does nothing when no drag is in progress.
    pub fn pointer_up(&mut self) -> Repaint {
        self.transition_to(SessionState::Idle);
        Repaint::Nothing
    }

    /// Resets every cell to the background color. The current color is left alone.
    pub fn clear_canvas(&mut self) -> Repaint {
        let changed = self.grid.clear(&self.background);
        log::debug!("Cleared {} cells", changed);
        if changed == 0 {
            Repaint::Nothing
        } else {
            Repaint::Canvas
        }
    }

    pub fn save(&self) -> Snapshot {
        Snapshot::from_grid(&self.grid)
    }

    /// Restores a saved grid. On any error the grid is left exactly as it was.
    pub fn load(&mut self, snapshot: Option<Snapshot>) -> Result<Repaint, LoadError> {
        let snapshot = snapshot.ok_or(LoadError::Missing)?;

        if snapshot.dimension != self.grid.dimension() {
            return Err(LoadError::DimensionMismatch {
                expected: self.grid.dimension(),
                found: snapshot.dimension,
            });
        }
        if let Some(color) = snapshot.cells.iter().find(|c| !self.palette.contains(c)) {
            return Err(LoadError::Corrupt(format!(
                "color `{}` is not in the palette",
                color
            )));
        }

        self.grid.replace_all(snapshot)?;
        self.state = SessionState::Idle;
        Ok(Repaint::Canvas)
    }

    pub fn save_to<S>(&self, store: &mut S, key: &str) -> PersistenceResult<()>
    where
        S: SnapshotStore + ?Sized,
    {
        store.write(key, self.save().to_json()?)?;
        log::info!("Saved canvas under `{}`", key);
        Ok(())
    }

    pub fn load_from<S>(&mut self, store: &S, key: &str) -> Result<Repaint, LoadError>
    where
        S: SnapshotStore + ?Sized,
    {
        let snapshot = store
            .read(key)?
            .map(|json| Snapshot::from_json(&json))
            .transpose()?;
        let repaint = self.load(snapshot)?;
        log::info!("Restored canvas from `{}`", key);
        Ok(repaint)
    }
}

use egui::{Context, Key, Modifiers, Pos2, Rect, Vec2};

use crate::command::Command;
use crate::grid::Cell;

/// Keys that clear the canvas
pub const CLEAR_KEYS: [Key; 2] = [Key::Delete, Key::Backspace];

/// Returns true if the modifiers select the fill action instead of painting
pub fn is_fill_modifier(modifiers: &Modifiers) -> bool {
    modifiers.command || modifiers.ctrl || modifiers.alt || modifiers.mac_cmd
}

/// Where the grid sits on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub rect: Rect,
    pub dimension: usize,
}

impl CanvasLayout {
    pub fn new(origin: Pos2, cell_size: f32, dimension: usize) -> Self {
        let side = cell_size * dimension as f32;
        Self {
            rect: Rect::from_min_size(origin, Vec2::splat(side)),
            dimension,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.rect.width() / self.dimension.max(1) as f32
    }

    /// Resolves a screen position to the cell under it, `None` outside the grid
    pub fn cell_at(&self, pos: Pos2) -> Option<Cell> {
        if !self.rect.contains(pos) {
            return None;
        }
        let cell_size = self.cell_size();
        let col = ((pos.x - self.rect.min.x) / cell_size) as usize;
        let row = ((pos.y - self.rect.min.y) / cell_size) as usize;

        // The right and bottom edges are inside the rect but past the last cell
        (row < self.dimension && col < self.dimension).then(|| Cell::new(row, col))
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let cell_size = self.cell_size();
        let min = self.rect.min + Vec2::new(cell.col as f32, cell.row as f32) * cell_size;
        Rect::from_min_size(min, Vec2::splat(cell_size))
    }
}

/// The slice of one frame's raw input that matters to the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub pos: Option<Pos2>,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button is held
    pub down: bool,
    /// Primary button went up this frame
    pub released: bool,
    pub modifiers: Modifiers,
    pub clear_requested: bool,
}

impl PointerFrame {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            pos: i.pointer.interact_pos(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
            modifiers: i.modifiers,
            clear_requested: CLEAR_KEYS.iter().any(|key| i.key_pressed(*key)),
        })
    }
}

/// Turns per-frame pointer state into paint session commands
#[derive(Debug, Default)]
pub struct InputHandler {
    last_cell: Option<Cell>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, frame: &PointerFrame, layout: &CanvasLayout) -> Vec<Command> {
        let mut commands = Vec::new();
        let cell = frame.pos.and_then(|pos| layout.cell_at(pos));

        if frame.pressed {
            if let Some(cell) = cell {
                commands.push(Command::PointerDown {
                    row: cell.row,
                    col: cell.col,
                    modifier_active: is_fill_modifier(&frame.modifiers),
                });
            }
        } else if cell != self.last_cell {
            // Only report cell changes; moves within a cell cannot change anything
            if let Some(cell) = cell {
                commands.push(Command::PointerMove {
                    row: cell.row,
                    col: cell.col,
                    button_pressed: frame.down,
                });
            }
        }

        // Releases count even off the canvas so a drag always ends
        if frame.released {
            commands.push(Command::PointerUp);
        }

        if frame.clear_requested {
            commands.push(Command::ClearCanvas);
        }

        self.last_cell = cell;
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CanvasLayout {
        CanvasLayout::new(Pos2::new(10.0, 20.0), 10.0, 5)
    }

    #[test]
    fn test_cell_at_resolves_grid_positions() {
        let layout = layout();
        assert_eq!(layout.cell_at(Pos2::new(10.0, 20.0)), Some(Cell::new(0, 0)));
        assert_eq!(layout.cell_at(Pos2::new(35.0, 41.0)), Some(Cell::new(2, 2)));
        assert_eq!(layout.cell_at(Pos2::new(59.9, 69.9)), Some(Cell::new(4, 4)));
    }

    #[test]
    fn test_cell_at_rejects_outside_and_far_edge() {
        let layout = layout();
        assert_eq!(layout.cell_at(Pos2::new(5.0, 25.0)), None);
        assert_eq!(layout.cell_at(Pos2::new(60.0, 70.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips() {
        let layout = layout();
        let rect = layout.cell_rect(Cell::new(1, 3));
        assert_eq!(rect.min, Pos2::new(40.0, 30.0));
        assert_eq!(layout.cell_at(rect.center()), Some(Cell::new(1, 3)));
    }

    #[test]
    fn test_press_with_modifier_requests_fill() {
        let mut handler = InputHandler::new();
        let frame = PointerFrame {
            pos: Some(Pos2::new(15.0, 25.0)),
            pressed: true,
            down: true,
            modifiers: Modifiers::ALT,
            ..Default::default()
        };

        let commands = handler.translate(&frame, &layout());

        assert_eq!(
            commands,
            vec![Command::PointerDown {
                row: 0,
                col: 0,
                modifier_active: true
            }]
        );
    }

    #[test]
    fn test_drag_reports_each_new_cell_once() {
        let mut handler = InputHandler::new();
        let layout = layout();
        let press = PointerFrame {
            pos: Some(Pos2::new(15.0, 25.0)),
            pressed: true,
            down: true,
            ..Default::default()
        };
        let same_cell = PointerFrame {
            pos: Some(Pos2::new(18.0, 28.0)),
            down: true,
            ..Default::default()
        };
        let next_cell = PointerFrame {
            pos: Some(Pos2::new(25.0, 28.0)),
            down: true,
            ..Default::default()
        };

        assert_eq!(handler.translate(&press, &layout).len(), 1);
        assert!(handler.translate(&same_cell, &layout).is_empty());
        assert_eq!(
            handler.translate(&next_cell, &layout),
            vec![Command::PointerMove {
                row: 0,
                col: 1,
                button_pressed: true
            }]
        );
    }

    #[test]
    fn test_release_off_canvas_still_ends_drag() {
        let mut handler = InputHandler::new();
        let frame = PointerFrame {
            pos: Some(Pos2::new(500.0, 500.0)),
            released: true,
            ..Default::default()
        };
        assert_eq!(handler.translate(&frame, &layout()), vec![Command::PointerUp]);
    }

    #[test]
    fn test_clear_key() {
        let mut handler = InputHandler::new();
        let frame = PointerFrame {
            clear_requested: true,
            ..Default::default()
        };
        assert_eq!(handler.translate(&frame, &layout()), vec![Command::ClearCanvas]);
    }
}

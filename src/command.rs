use serde::{Deserialize, Serialize};

use crate::color::Color;

/// User intents the paint session understands.
///
/// The input layer produces these from raw pointer and key events; [`crate::PaintSession::apply`]
/// executes them one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Make `color` the current color
    SelectColor(Color),

    /// Primary button pressed over a cell. With the modifier held this flood fills instead of painting.
    PointerDown {
        row: usize,
        col: usize,
        modifier_active: bool,
    },

    /// Pointer entered a new cell
    PointerMove {
        row: usize,
        col: usize,
        button_pressed: bool,
    },

    /// Primary button released
    PointerUp,

    /// Reset every cell to the background color
    ClearCanvas,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectColor(_) => "SelectColor",
            Command::PointerDown { .. } => "PointerDown",
            Command::PointerMove { .. } => "PointerMove",
            Command::PointerUp => "PointerUp",
            Command::ClearCanvas => "ClearCanvas",
        }
    }
}

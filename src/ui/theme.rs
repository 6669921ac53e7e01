//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const SQUARE_BG: Color32 = Color32::from_rgb(235, 232, 224);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Symbol colors
pub const X_COLOR: Color32 = Color32::from_rgb(52, 101, 164);
pub const O_COLOR: Color32 = Color32::from_rgb(204, 72, 63);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(150, 230, 150);
pub const WIN_HINT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WINNER: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const SQUARE_GAP: f32 = 4.0;
pub const SYMBOL_RATIO: f32 = 0.3;
pub const SYMBOL_STROKE: f32 = 6.0;
pub const MAX_BOARD_SIZE: f32 = 420.0;

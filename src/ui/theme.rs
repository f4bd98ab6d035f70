//! Theme constants for the Mancala GUI

use egui::Color32;

// Board colors - warm sand tones
pub const BOARD_BG: Color32 = Color32::from_rgb(244, 216, 185);
pub const BOARD_FRAME: Color32 = Color32::from_rgb(139, 90, 43);

// Side colors
pub const HUMAN_COLOR: Color32 = Color32::from_rgb(70, 119, 207);
pub const COMPUTER_COLOR: Color32 = Color32::from_rgb(190, 0, 30);

// Seeds cycle through these
pub const SEED_COLORS: [Color32; 4] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 255, 0),
];
pub const SEED_OUTLINE: Color32 = Color32::from_rgb(40, 30, 20);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 255, 255);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIT_GAP: f32 = 16.0;
/// Store width as a multiple of pit width
pub const STORE_WIDTH_RATIO: f32 = 1.4;
/// Pit height as a multiple of pit width
pub const PIT_HEIGHT_RATIO: f32 = 1.4;
pub const SEEDS_PER_ROW: usize = 4;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

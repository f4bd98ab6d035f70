//! Board rendering and pit hit testing for the Mancala GUI

use crate::board::{Board, Pit, Position, Side, PITS_PER_SIDE};
use egui::{pos2, vec2, Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Vec2};

use super::theme::*;

/// What the board view needs to know about the current turn
pub struct BoardInput<'a> {
    pub board: &'a Board,
    pub human_side: Side,
    /// Pits the human may click right now (empty when it is not their turn)
    pub clickable: &'a [Pit],
    pub last_landing: Option<Position>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
    pit_size: Vec2,
    store_size: Vec2,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
            pit_size: vec2(100.0, 140.0),
            store_size: vec2(140.0, 296.0),
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked pit, if any
    pub fn show(&mut self, ui: &mut egui::Ui, input: &BoardInput<'_>) -> Option<Pit> {
        let available = ui.available_size();

        // Columns: store, six pits, store, with gaps between each
        let columns = PITS_PER_SIDE as f32 + 2.0 * STORE_WIDTH_RATIO;
        let gaps = (PITS_PER_SIDE + 1) as f32 * PIT_GAP + 2.0 * BOARD_MARGIN;
        let by_width = (available.x - gaps) / columns;
        let by_height = (available.y - 2.0 * BOARD_MARGIN - PIT_GAP) / (2.0 * PIT_HEIGHT_RATIO);
        let pit_w = by_width.min(by_height).max(20.0);

        self.pit_size = vec2(pit_w, pit_w * PIT_HEIGHT_RATIO);
        self.store_size = vec2(pit_w * STORE_WIDTH_RATIO, 2.0 * self.pit_size.y + PIT_GAP);

        let board_size = vec2(
            columns * pit_w + gaps,
            2.0 * BOARD_MARGIN + self.store_size.y,
        );
        let (response, painter) = ui.allocate_painter(board_size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(12), BOARD_FRAME);
        painter.rect_filled(self.board_rect.shrink(6.0), CornerRadius::same(10), BOARD_BG);

        let hovered = response
            .hover_pos()
            .and_then(|p| self.pit_at(p))
            .filter(|pit| input.clickable.contains(pit));

        if let Some(pit) = hovered {
            painter.rect_filled(self.pit_rect(pit).expand(5.0), CornerRadius::same(10), hover_valid());
        }

        for side in [Side::South, Side::North] {
            let color = side_color(side, input.human_side);
            self.draw_store(&painter, side, input.board.store(side), color);
            for pit in side.pits() {
                self.draw_pit(&painter, pit, input.board.pit(pit), color);
            }
        }

        if let Some(landing) = input.last_landing {
            let rect = self.position_rect(landing);
            painter.circle_filled(
                rect.center_top() + vec2(0.0, 10.0),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Pit under a screen position
    fn pit_at(&self, pos: Pos2) -> Option<Pit> {
        [Side::South, Side::North]
            .into_iter()
            .flat_map(|side| side.pits())
            .find(|&pit| self.pit_rect(pit).contains(pos))
    }

    fn pits_left(&self) -> f32 {
        self.board_rect.min.x + BOARD_MARGIN + self.store_size.x + PIT_GAP
    }

    /// North runs right-to-left on the top row so opposite pits line up
    fn pit_rect(&self, pit: Pit) -> Rect {
        let (column, top) = match pit.side() {
            Side::South => (pit.column(), self.board_rect.min.y + BOARD_MARGIN + self.pit_size.y + PIT_GAP),
            Side::North => (PITS_PER_SIDE - 1 - pit.column(), self.board_rect.min.y + BOARD_MARGIN),
        };
        let left = self.pits_left() + column as f32 * (self.pit_size.x + PIT_GAP);
        Rect::from_min_size(pos2(left, top), self.pit_size)
    }

    /// Store 2 sits on the left, store 1 on the right
    fn store_rect(&self, side: Side) -> Rect {
        let top = self.board_rect.min.y + BOARD_MARGIN;
        let left = match side {
            Side::North => self.board_rect.min.x + BOARD_MARGIN,
            Side::South => {
                self.pits_left() + PITS_PER_SIDE as f32 * (self.pit_size.x + PIT_GAP)
            }
        };
        Rect::from_min_size(pos2(left, top), self.store_size)
    }

    fn position_rect(&self, pos: Position) -> Rect {
        match pos.to_pit() {
            Some(pit) => self.pit_rect(pit),
            None => self.store_rect(pos.owner()),
        }
    }

    fn draw_pit(&self, painter: &Painter, pit: Pit, seeds: u8, color: Color32) {
        let rect = self.pit_rect(pit);
        painter.rect_filled(rect, CornerRadius::same(8), color);
        draw_seeds(painter, rect, seeds);

        let font = FontId::proportional(14.0);
        painter.text(
            rect.left_bottom() + vec2(8.0, -10.0),
            Align2::LEFT_CENTER,
            pit.label(),
            font.clone(),
            TEXT_PRIMARY,
        );
        painter.text(
            rect.right_bottom() + vec2(-8.0, -10.0),
            Align2::RIGHT_CENTER,
            seeds.to_string(),
            font,
            TEXT_PRIMARY,
        );
    }

    fn draw_store(&self, painter: &Painter, side: Side, seeds: u8, color: Color32) {
        let rect = self.store_rect(side);
        painter.rect_filled(rect, CornerRadius::same(12), color);
        draw_seeds(painter, rect, seeds);

        painter.text(
            rect.center_bottom() + vec2(0.0, -16.0),
            Align2::CENTER_CENTER,
            seeds.to_string(),
            FontId::proportional(22.0),
            TEXT_PRIMARY,
        );
    }
}

fn side_color(side: Side, human_side: Side) -> Color32 {
    if side == human_side {
        HUMAN_COLOR
    } else {
        COMPUTER_COLOR
    }
}

/// Seeds as colored dots, rows of [`SEEDS_PER_ROW`] growing from the center
fn draw_seeds(painter: &Painter, rect: Rect, seeds: u8) {
    let spacing = (rect.width() / (SEEDS_PER_ROW as f32 + 1.0)).min(18.0);
    let radius = spacing * 0.4;
    let rows = (seeds as usize).div_ceil(SEEDS_PER_ROW);
    let max_rows = ((rect.height() - 40.0) / spacing).floor().max(1.0) as usize;
    let shown_rows = rows.min(max_rows);

    let origin = rect.center()
        - vec2(
            (SEEDS_PER_ROW as f32 - 1.0) * spacing / 2.0,
            (shown_rows as f32 - 1.0) * spacing / 2.0,
        );

    for i in 0..(seeds as usize).min(shown_rows * SEEDS_PER_ROW) {
        let row = i / SEEDS_PER_ROW;
        let col = i % SEEDS_PER_ROW;
        let center = origin + vec2(col as f32 * spacing, row as f32 * spacing);
        painter.circle_filled(center, radius + 1.0, SEED_OUTLINE);
        painter.circle_filled(center, radius, SEED_COLORS[i % SEED_COLORS.len()]);
    }
}

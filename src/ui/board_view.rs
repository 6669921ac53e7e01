//! Board rendering for the tic-tac-toe GUI

use crate::board::{Board, Cell, CellIndex, Player, Pos, BOARD_SIZE};
use crate::rules::completes_line;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached square size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any.
    ///
    /// Clicks on occupied squares are still reported; the game state
    /// decides whether they have an effect.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next_player: Player,
        winning_line: &[usize],
        game_over: bool,
    ) -> Option<CellIndex> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y).min(MAX_BOARD_SIZE) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        for idx in CellIndex::all() {
            let highlight = winning_line.contains(&idx.get());
            self.draw_square(&painter, idx, board.get(idx), highlight);
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));

        if !game_over {
            if let Some(idx) = hovered.filter(|&idx| board.is_empty(idx)) {
                let winning = completes_line(board, idx, next_player);
                self.draw_hover_preview(&painter, idx, next_player, winning);
            }
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Square rectangle with the gap already removed
    fn square_rect(&self, idx: CellIndex) -> Rect {
        let pos = idx.pos();
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(SQUARE_GAP / 2.0)
    }

    fn draw_square(&self, painter: &Painter, idx: CellIndex, cell: Cell, highlight: bool) {
        let rect = self.square_rect(idx);
        let fill = if highlight { WIN_HIGHLIGHT } else { SQUARE_BG };
        painter.rect_filled(rect, CornerRadius::same(4), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(1.0, GRID_LINE),
            egui::StrokeKind::Inside,
        );

        if let Some(player) = cell.player() {
            self.draw_symbol(painter, rect.center(), player, symbol_color(player));
        }
    }

    /// Draw X as two strokes, O as a ring
    fn draw_symbol(&self, painter: &Painter, center: Pos2, player: Player, color: Color32) {
        let r = self.cell_size * SYMBOL_RATIO;
        let stroke = Stroke::new(SYMBOL_STROKE, color);
        match player {
            Player::X => {
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(r, -r), center + Vec2::new(-r, r)], stroke);
            }
            Player::O => {
                painter.circle_stroke(center, r, stroke);
            }
        }
    }

    /// Faint preview of the next symbol; green if it would win
    fn draw_hover_preview(&self, painter: &Painter, idx: CellIndex, player: Player, winning: bool) {
        let rect = self.square_rect(idx);
        painter.rect_filled(rect, CornerRadius::same(4), hover_valid());
        let color = if winning {
            WIN_HINT
        } else {
            symbol_color(player).gamma_multiply(0.35)
        };
        self.draw_symbol(painter, rect.center(), player, color);
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<CellIndex> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(CellIndex::from(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }
}

fn symbol_color(player: Player) -> Color32 {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

//! Win detection for 3x3 tic-tac-toe
//!
//! The detector only ever reports a win or no result. A draw is not a
//! board property here: it is derived from the step count by the game
//! state (nine moves played, nobody won).

use crate::board::{Board, CellIndex, Player};
use tracing::instrument;

/// The 8 winning triples, in priority order:
/// rows top-to-bottom, columns left-to-right, then the
/// top-left and top-right diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    NoResult,
    Win {
        player: Player,
        line: [usize; 3],
    },
}

impl Outcome {
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::NoResult => None,
        }
    }

    /// Indices of the winning triple, empty when there is no winner
    #[inline]
    pub fn winning_line(&self) -> &[usize] {
        match self {
            Outcome::Win { line, .. } => &line[..],
            Outcome::NoResult => &[],
        }
    }

    #[inline]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win { .. })
    }
}

/// Evaluate a board. First complete line in `WINNING_LINES` order wins.
#[instrument(level = "trace", skip(board), ret)]
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(player) = cells[a].player() {
            if cells[a] == cells[b] && cells[a] == cells[c] {
                return Outcome::Win { player, line };
            }
        }
    }
    Outcome::NoResult
}

/// Check whether playing `player` at `idx` would complete a line.
/// Only the lines through `idx` are inspected.
pub fn completes_line(board: &Board, idx: CellIndex, player: Player) -> bool {
    let next = board.with_move(idx, player);
    let target = next.get(idx);
    WINNING_LINES
        .iter()
        .filter(|line| line.contains(&idx.get()))
        .any(|line| line.iter().all(|&i| next.cells()[i] == target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    fn board_from(x: &[usize], o: &[usize]) -> Board {
        let mut cells = [Cell::Empty; 9];
        for &i in x {
            cells[i] = Cell::X;
        }
        for &i in o {
            cells[i] = Cell::O;
        }
        Board::from(cells)
    }

    #[test]
    fn test_empty_board_has_no_result() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoResult);
    }

    #[test]
    fn test_row_win() {
        let board = board_from(&[3, 4, 5], &[0, 8]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win { player: Player::X, line: [3, 4, 5] }
        );
    }

    #[test]
    fn test_column_win() {
        let board = board_from(&[0, 4], &[2, 5, 8]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win { player: Player::O, line: [2, 5, 8] }
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from(&[2, 4, 6], &[0, 1]);
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.winning_line(), &[2, 4, 6]);
    }

    #[test]
    fn test_priority_order_rows_first() {
        // Row 0 and column 0 both complete; the row is checked first
        let board = board_from(&[0, 1, 2, 3, 6], &[]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win { player: Player::X, line: [0, 1, 2] }
        );
    }

    #[test]
    fn test_full_board_without_line_is_no_result() {
        let board = board_from(&[0, 1, 5, 6, 8], &[2, 3, 4, 7]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::NoResult);
        assert!(evaluate(&board).winning_line().is_empty());
    }

    #[test]
    fn test_completes_line() {
        let board = board_from(&[0, 4], &[1]);
        assert!(completes_line(&board, CellIndex::from(Pos::new(2, 2)), Player::X));
        assert!(!completes_line(&board, CellIndex::from(Pos::new(2, 2)), Player::O));
        assert!(!completes_line(&board, CellIndex::from(Pos::new(0, 2)), Player::X));
    }
}

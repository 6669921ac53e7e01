//! Property-based tests for the game-state transitions.

use proptest::prelude::*;
use tictactoe::{evaluate, Cell, CellIndex, GameState, Intent, Outcome, Player, WINNING_LINES};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// A raw intent; jump targets are reduced modulo the history length
#[derive(Debug, Clone, Copy)]
enum RawIntent {
    Click(usize),
    Jump(usize),
    Toggle,
}

fn arb_raw_intent() -> impl Strategy<Value = RawIntent> {
    prop_oneof![
        6 => (0usize..9).prop_map(RawIntent::Click),
        2 => any::<usize>().prop_map(RawIntent::Jump),
        1 => Just(RawIntent::Toggle),
    ]
}

fn resolve(state: &GameState, raw: RawIntent) -> Intent {
    match raw {
        RawIntent::Click(i) => Intent::ClickCell(CellIndex::new(i).unwrap()),
        RawIntent::Jump(step) => Intent::JumpTo(step % state.len()),
        RawIntent::Toggle => Intent::ToggleSort,
    }
}

/// Generate a reachable state by replaying random intents
fn arb_state() -> impl Strategy<Value = GameState> {
    prop::collection::vec(arb_raw_intent(), 0..40).prop_map(|intents| {
        intents.into_iter().fold(GameState::new(), |state, raw| {
            let intent = resolve(&state, raw);
            state.dispatch(intent)
        })
    })
}

fn complete_lines(cells: &[Cell; 9]) -> Vec<(Cell, [usize; 3])> {
    WINNING_LINES
        .iter()
        .filter(|[a, b, c]| !cells[*a].is_empty() && cells[*a] == cells[*b] && cells[*a] == cells[*c])
        .map(|&line| (cells[line[0]], line))
        .collect()
}

proptest! {
    /// Reachable boards never hold complete lines for both players
    #[test]
    fn prop_at_most_one_winner(state in arb_state()) {
        for snap in state.history().iter() {
            let lines = complete_lines(snap.board.cells());
            if let Some((first, _)) = lines.first() {
                prop_assert!(lines.iter().all(|(c, _)| c == first));
            }
            match evaluate(&snap.board) {
                Outcome::Win { line, .. } => prop_assert_eq!(Some(&line), lines.first().map(|(_, l)| l)),
                Outcome::NoResult => prop_assert!(lines.is_empty()),
            }
        }
    }

    /// X to move exactly on even steps
    #[test]
    fn prop_parity(state in arb_state()) {
        prop_assert_eq!(state.next_player() == Player::X, state.current_step() % 2 == 0);
        prop_assert!(state.current_step() < state.len());
    }

    /// History always starts at the empty board and grows one square per step
    #[test]
    fn prop_history_shape(state in arb_state()) {
        let history = state.history();
        prop_assert!(history[0].board.is_board_empty());
        prop_assert!(history[0].last_move.is_none());
        prop_assert_eq!(history[0].outcome, Outcome::NoResult);

        for i in 1..history.len() {
            let prev = history[i - 1].board;
            let next = history[i].board;
            let changed: Vec<_> = CellIndex::all().filter(|&c| prev.get(c) != next.get(c)).collect();
            prop_assert_eq!(changed.len(), 1);
            prop_assert_eq!(prev.get(changed[0]), Cell::Empty);

            let mv = history[i].last_move.unwrap();
            prop_assert_eq!(next.get(changed[0]), Cell::from(mv.player));
            prop_assert_eq!(changed[0].pos().row, mv.row);
            prop_assert_eq!(changed[0].pos().col, mv.col);
            prop_assert_eq!(mv.player, Player::for_step(i - 1));
        }
    }

    /// Clicking an occupied square twice yields the same state both times
    #[test]
    fn prop_rejection_idempotent(state in arb_state(), cell in 0usize..9) {
        let idx = CellIndex::new(cell).unwrap();
        if !state.current().board.is_empty(idx) {
            let once = state.apply_move(idx);
            let twice = once.apply_move(idx);
            prop_assert_eq!(&once, &state);
            prop_assert_eq!(&twice, &state);
        }
    }

    /// No move is accepted from a won position
    #[test]
    fn prop_won_state_is_frozen(state in arb_state(), cell in 0usize..9) {
        if state.current().outcome.is_win() {
            prop_assert_eq!(state.apply_move(CellIndex::new(cell).unwrap()), state);
        }
    }

    /// Moving after a jump keeps entries 0..=k and appends one
    #[test]
    fn prop_branch_discard(state in arb_state(), k in any::<usize>(), cell in 0usize..9) {
        let k = k % state.len();
        let back = state.jump_to(k);
        let idx = CellIndex::new(cell).unwrap();
        let next = back.apply_move(idx);

        if next != back {
            prop_assert_eq!(next.len(), k + 2);
            prop_assert_eq!(next.current_step(), k + 1);
            for i in 0..=k {
                prop_assert_eq!(next.history()[i], state.history()[i]);
            }
        } else {
            prop_assert_eq!(back.len(), state.len());
        }
    }

    /// Jumping to the current step changes nothing
    #[test]
    fn prop_jump_round_trip(state in arb_state()) {
        prop_assert_eq!(state.jump_to(state.current_step()), state);
    }

    /// Sort toggle is an involution and touches nothing else
    #[test]
    fn prop_toggle_involution(state in arb_state()) {
        let once = state.toggle_sort_order();
        prop_assert_eq!(once.is_ascending(), !state.is_ascending());
        prop_assert_eq!(once.current_step(), state.current_step());
        prop_assert_eq!(once.history(), state.history());
        prop_assert_eq!(once.toggle_sort_order(), state);
    }

    /// Out-of-range checked jumps fail, in-range ones succeed
    #[test]
    fn prop_try_jump_bounds(state in arb_state(), step in 0usize..20) {
        let result = state.try_jump_to(step);
        prop_assert_eq!(result.is_ok(), step < state.len());
    }
}

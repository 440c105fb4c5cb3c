use super::board::{SolverBoard, SolverCell};
use super::traits::{SolverAction, Strategy};
use crate::Position;
use itertools::Itertools;
use rand::rngs::StdRng;

/// The fixed 1-2-1 rule: a horizontal revealed triple numbered 1, 2, 1 with
/// a fully covered three-cell segment directly above or below pins mines to
/// the outer cells of that segment and clears its middle. The row above is
/// checked before the row below; one application per invocation.
pub struct OneTwoOneStrategy;

impl OneTwoOneStrategy {
    fn is_one_two_one(&self, board: &SolverBoard, triple: (Position, Position, Position)) -> bool {
        board.get(triple.0) == Some(SolverCell::Revealed(1))
            && board.get(triple.1) == Some(SolverCell::Revealed(2))
            && board.get(triple.2) == Some(SolverCell::Revealed(1))
    }

    /// The triple's counterpart cells in the row `dr` away, if all three
    /// are covered.
    fn covered_row(
        &self,
        board: &SolverBoard,
        triple: (Position, Position, Position),
        dr: i32,
    ) -> Option<(Position, Position, Position)> {
        let targets = (
            triple.0.offset(dr, 0),
            triple.1.offset(dr, 0),
            triple.2.offset(dr, 0),
        );
        let all_covered = [targets.0, targets.1, targets.2]
            .iter()
            .all(|&pos| board.get(pos) == Some(SolverCell::Covered));
        all_covered.then_some(targets)
    }
}

impl Strategy for OneTwoOneStrategy {
    fn name(&self) -> &str {
        "one-two-one"
    }

    fn propose(&self, board: &SolverBoard, _rng: &mut StdRng) -> Vec<SolverAction> {
        let side = board.side_length() as i32;

        for row in 0..side {
            let cells = (0..side).map(|col| Position::new(row, col));
            for triple in cells.tuple_windows() {
                if !self.is_one_two_one(board, triple) {
                    continue;
                }
                for dr in [-1, 1] {
                    if let Some((left, middle, right)) = self.covered_row(board, triple, dr) {
                        return vec![
                            SolverAction::Flag(left),
                            SolverAction::Flag(right),
                            SolverAction::Reveal(middle),
                        ];
                    }
                }
            }
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, CellState};
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    fn reveal(board: &mut Board, positions: &[Position]) {
        for &pos in positions {
            board.cell_mut(pos).unwrap().state = CellState::Revealed;
        }
    }

    #[test]
    fn test_acts_on_covered_row_above() {
        // Mines above the two 1s:
        //   * . *
        //   1 2 1  (revealed)
        let mut board =
            Board::with_layout(4, &[Position::new(0, 0), Position::new(0, 2)]).unwrap();
        reveal(
            &mut board,
            &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
        );

        let view = SolverBoard::new(&board);
        let actions = OneTwoOneStrategy.propose(&view, &mut rng());
        assert_eq!(
            actions,
            vec![
                SolverAction::Flag(Position::new(0, 0)),
                SolverAction::Flag(Position::new(0, 2)),
                SolverAction::Reveal(Position::new(0, 1)),
            ]
        );
    }

    #[test]
    fn test_falls_back_to_covered_row_below() {
        let mut board =
            Board::with_layout(4, &[Position::new(2, 0), Position::new(2, 2)]).unwrap();
        reveal(
            &mut board,
            &[
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
            ],
        );

        let view = SolverBoard::new(&board);
        let actions = OneTwoOneStrategy.propose(&view, &mut rng());
        assert_eq!(
            actions,
            vec![
                SolverAction::Flag(Position::new(2, 0)),
                SolverAction::Flag(Position::new(2, 2)),
                SolverAction::Reveal(Position::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_triple_on_top_edge_uses_row_below() {
        let mut board =
            Board::with_layout(4, &[Position::new(1, 0), Position::new(1, 2)]).unwrap();
        reveal(
            &mut board,
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );

        let view = SolverBoard::new(&board);
        let actions = OneTwoOneStrategy.propose(&view, &mut rng());
        assert_eq!(
            actions,
            vec![
                SolverAction::Flag(Position::new(1, 0)),
                SolverAction::Flag(Position::new(1, 2)),
                SolverAction::Reveal(Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_requires_fully_covered_segment() {
        let mut board =
            Board::with_layout(4, &[Position::new(0, 0), Position::new(0, 2)]).unwrap();
        reveal(
            &mut board,
            &[
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
                // Breaks the segment above; (2, 1) breaks the one below.
                Position::new(0, 1),
                Position::new(2, 1),
            ],
        );

        let view = SolverBoard::new(&board);
        assert!(OneTwoOneStrategy.propose(&view, &mut rng()).is_empty());
    }

    #[test]
    fn test_no_pattern_yields_nothing() {
        let board = Board::with_layout(4, &[Position::new(3, 3)]).unwrap();
        let view = SolverBoard::new(&board);
        assert!(OneTwoOneStrategy.propose(&view, &mut rng()).is_empty());
    }
}

use super::board::{SolverBoard, SolverCell};
use super::traits::{SolverAction, Strategy};
use crate::Position;
use rand::rngs::StdRng;

/// Implements the two single-constraint counting rules:
/// - a numbered cell with all of its mines already flagged makes every
///   other covered neighbor safe
/// - a numbered cell whose covered neighbors exactly fill its remaining
///   mine count makes them all mines
///
/// Cells are scanned in row-major order and the first deduction wins, one
/// command per invocation.
pub struct CountingStrategy;

impl CountingStrategy {
    fn analyze_cell(&self, board: &SolverBoard, pos: Position) -> Option<SolverAction> {
        // Only revealed cells with a nonzero number carry a constraint.
        let number = match board.get(pos) {
            Some(SolverCell::Revealed(n)) if n > 0 => n as usize,
            _ => return None,
        };

        let mut flagged = 0;
        let mut covered = Vec::new();
        for neighbor in board.neighbors(pos) {
            match board.get(neighbor) {
                Some(SolverCell::Covered) => covered.push(neighbor),
                Some(SolverCell::Flagged) => flagged += 1,
                _ => {}
            }
        }

        if covered.is_empty() {
            return None;
        }

        if number == flagged {
            // Every mine around this number is flagged already.
            return Some(SolverAction::Reveal(covered[0]));
        }
        if number == flagged + covered.len() {
            // The covered neighbors are exactly the missing mines.
            return Some(SolverAction::Flag(covered[0]));
        }

        None
    }
}

impl Strategy for CountingStrategy {
    fn name(&self) -> &str {
        "counting"
    }

    fn propose(&self, board: &SolverBoard, _rng: &mut StdRng) -> Vec<SolverAction> {
        for pos in board.positions() {
            if let Some(action) = self.analyze_cell(board, pos) {
                return vec![action];
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
    fn test_flags_forced_mine() {
        // Single mine at (0, 0), everything else revealed: every adjacent
        // "1" pins the mine. One command comes back, for the first numbered
        // cell in scan order.
        let mut board = Board::with_layout(3, &[Position::new(0, 0)]).unwrap();
        let safe: Vec<Position> = board
            .positions()
            .filter(|&p| !board.cell(p).unwrap().is_mine)
            .collect();
        reveal(&mut board, &safe);

        let view = SolverBoard::new(&board);
        let actions = CountingStrategy.propose(&view, &mut rng());
        assert_eq!(actions, vec![SolverAction::Flag(Position::new(0, 0))]);
    }

    #[test]
    fn test_reveals_when_mines_accounted_for() {
        let mut board = Board::with_layout(3, &[Position::new(0, 0)]).unwrap();
        let safe: Vec<Position> = board
            .positions()
            .filter(|&p| !board.cell(p).unwrap().is_mine && p != Position::new(1, 1))
            .collect();
        reveal(&mut board, &safe);
        board.cell_mut(Position::new(0, 0)).unwrap().state = CellState::Flagged;

        let view = SolverBoard::new(&board);
        let actions = CountingStrategy.propose(&view, &mut rng());
        assert_eq!(actions, vec![SolverAction::Reveal(Position::new(1, 1))]);
    }

    #[test]
    fn test_ambiguous_board_yields_nothing() {
        // A lone "1" facing three covered cells proves nothing.
        let mut board = Board::with_layout(2, &[Position::new(0, 0)]).unwrap();
        reveal(&mut board, &[Position::new(1, 1)]);

        let view = SolverBoard::new(&board);
        assert!(CountingStrategy.propose(&view, &mut rng()).is_empty());
    }

    #[test]
    fn test_zero_cells_are_not_constraints() {
        let mut board = Board::with_layout(3, &[]).unwrap();
        reveal(&mut board, &[Position::new(1, 1)]);

        let view = SolverBoard::new(&board);
        assert!(CountingStrategy.propose(&view, &mut rng()).is_empty());
    }

    #[test]
    fn test_fresh_board_yields_nothing() {
        let board = Board::with_layout(3, &[Position::new(2, 2)]).unwrap();
        let view = SolverBoard::new(&board);
        assert!(CountingStrategy.propose(&view, &mut rng()).is_empty());
    }
}

use crate::{Board, CellState, Position};

/// A view of the game board that hides information the solver shouldn't
/// have access to. Mine placement never crosses this boundary; the solver
/// sees exactly what a player sees.
#[derive(Debug, Clone, Copy)]
pub struct SolverBoard<'a> {
    board: &'a Board,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverCell {
    /// Unknown and unflagged cell
    Covered,
    /// Number of neighboring mines
    Revealed(u8),
    /// Marked as a mine
    Flagged,
}

impl<'a> SolverBoard<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Gets cell state without revealing mine information.
    pub fn get(&self, pos: Position) -> Option<SolverCell> {
        self.board.cell(pos).map(|cell| match cell.state {
            CellState::Covered => SolverCell::Covered,
            CellState::Revealed => SolverCell::Revealed(cell.adjacent_mines),
            CellState::Flagged => SolverCell::Flagged,
        })
    }

    pub fn side_length(&self) -> usize {
        self.board.side_length()
    }

    pub fn total_mines(&self) -> usize {
        self.board.mine_count()
    }

    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors()
            .filter(|p| self.board.is_within_bounds(*p))
            .collect()
    }

    /// Row-major scan order, same as the underlying board.
    pub fn positions(&self) -> impl Iterator<Item = Position> + 'a {
        self.board.positions()
    }

    pub fn covered_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.get(pos) == Some(SolverCell::Covered))
            .collect()
    }
}

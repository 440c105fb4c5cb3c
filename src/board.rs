use crate::{GameError, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// Visibility of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Covered,
    Revealed,
    Flagged,
}

/// One grid cell. `adjacent_mines` is only meaningful for non-mine cells;
/// mines keep it at zero. `ai_marked` records that the automated player,
/// not the human, acted on the cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub state: CellState,
    pub is_mine: bool,
    pub adjacent_mines: u8,
    pub ai_marked: bool,
}

/// Square minefield, stored row-major.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    side_length: usize,
    mine_count: usize,
}

impl Board {
    /// Builds a board with `mine_count` mines placed uniformly at random.
    /// At least one cell must stay mine-free so that a first click can
    /// always land somewhere safe.
    pub fn generate(
        side_length: usize,
        mine_count: usize,
        rng: &mut StdRng,
    ) -> Result<Self, GameError> {
        let total = side_length * side_length;
        if mine_count >= total {
            return Err(GameError::InvalidConfiguration {
                side_length,
                mine_count,
                max: total.saturating_sub(1),
            });
        }

        let mut board = Board {
            cells: vec![Cell::default(); total],
            side_length,
            mine_count,
        };

        let mut indices: Vec<usize> = (0..total).collect();
        indices.shuffle(rng);
        for &idx in indices.iter().take(mine_count) {
            board.cells[idx].is_mine = true;
        }

        board.recompute_adjacency();
        Ok(board)
    }

    /// Builds a board with mines exactly at `mines`. Out-of-bounds entries
    /// are ignored and duplicates count once.
    pub fn with_layout(side_length: usize, mines: &[Position]) -> Result<Self, GameError> {
        let total = side_length * side_length;
        let mut board = Board {
            cells: vec![Cell::default(); total],
            side_length,
            mine_count: 0,
        };

        for &pos in mines {
            if let Some(idx) = board.index(pos) {
                if !board.cells[idx].is_mine {
                    board.cells[idx].is_mine = true;
                    board.mine_count += 1;
                }
            }
        }

        if board.mine_count >= total {
            return Err(GameError::InvalidConfiguration {
                side_length,
                mine_count: board.mine_count,
                max: total.saturating_sub(1),
            });
        }

        board.recompute_adjacency();
        Ok(board)
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        let side = self.side_length as i32;
        pos.row >= 0 && pos.row < side && pos.col >= 0 && pos.col < side
    }

    /// Every position in row-major order, top-left to bottom-right.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.side_length as i32;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(move |idx| &mut self.cells[idx])
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_within_bounds(pos) {
            Some(pos.row as usize * self.side_length + pos.col as usize)
        } else {
            None
        }
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter_map(|p| self.cell(p))
            .filter(|cell| cell.is_mine)
            .count() as u8
    }

    fn recompute_adjacency(&mut self) {
        let positions: Vec<Position> = self.positions().collect();
        for pos in positions {
            let count = self.count_adjacent_mines(pos);
            if let Some(cell) = self.cell_mut(pos) {
                cell.adjacent_mines = if cell.is_mine { 0 } else { count };
            }
        }
    }

    /// Moves the mine at `pos` to the first mine-free cell in row-major
    /// order and recomputes every adjacency count. Runs before the first
    /// reveal of a session so the opening click never detonates. No-op when
    /// `pos` holds no mine.
    pub(crate) fn relocate_mine(&mut self, pos: Position) {
        let source = match self.index(pos) {
            Some(idx) if self.cells[idx].is_mine => idx,
            _ => {
                debug!(?pos, "relocation skipped: not a mine");
                return;
            }
        };

        match self.cells.iter().position(|cell| !cell.is_mine) {
            Some(target) => {
                self.cells[source].is_mine = false;
                self.cells[target].is_mine = true;
                debug!(from = source, to = target, "relocated first-click mine");
            }
            None => {
                // Unreachable through the validated constructors; they all
                // keep at least one cell mine-free.
                warn!(?pos, "relocation skipped: no mine-free cell");
            }
        }
        self.recompute_adjacency();
    }

    /// Reveals `pos`, then floods outward: every revealed zero-adjacency
    /// cell reveals its covered neighbors in turn. Flagged cells block the
    /// flood. Safe to call with any coordinate in any state.
    pub(crate) fn reveal_from(&mut self, pos: Position) {
        let mut stack = vec![pos];

        while let Some(current) = stack.pop() {
            let cell = match self.cell_mut(current) {
                Some(cell) => cell,
                None => continue,
            };
            if cell.state != CellState::Covered {
                continue;
            }
            cell.state = CellState::Revealed;

            if !cell.is_mine && cell.adjacent_mines == 0 {
                stack.extend(current.neighbors());
            }
        }
    }

    /// Uncovers every mine. Called once when a session is lost.
    pub(crate) fn reveal_all_mines(&mut self) {
        for cell in &mut self.cells {
            if cell.is_mine {
                cell.state = CellState::Revealed;
            }
        }
    }

    /// The winning condition: no non-mine cell left covered or flagged.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine || cell.state == CellState::Revealed)
    }
}

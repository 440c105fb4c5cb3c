use crate::solver::Difficulty;
use crate::{Board, CellState, GameConfig, GameError, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// How the automated player participates in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoPlayMode {
    #[default]
    Off,
    /// One automated move after every human command.
    Alternating,
    /// The automated player drives the session to completion on its own.
    Solver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoPlayOptions {
    pub mode: AutoPlayMode,
    pub difficulty: Difficulty,
}

/// What one cell looks like from the outside. `is_mine` is masked (`None`)
/// until the cell is revealed or the session has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub state: CellState,
    pub is_mine: Option<bool>,
    pub adjacent_mines: u8,
    pub ai_marked: bool,
}

/// Row-major board view for presentation layers.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub side_length: usize,
    pub cells: Vec<CellView>,
}

impl BoardSnapshot {
    pub fn cell(&self, pos: Position) -> Option<&CellView> {
        let side = self.side_length as i32;
        if pos.row < 0 || pos.row >= side || pos.col < 0 || pos.col >= side {
            return None;
        }
        self.cells
            .get(pos.row as usize * self.side_length + pos.col as usize)
    }
}

/// One playthrough: a board, its terminal state, the session RNG and the
/// automated-player settings. A finished session never mutates again; the
/// way forward is `restart`, which builds the successor session.
pub struct Game {
    board: Board,
    state: GameState,
    first_click_taken: bool,
    config: GameConfig,
    rng: StdRng,
    auto_play: AutoPlayOptions,
    ai_turn: bool,
}

impl Game {
    /// Fresh session with an entropy-seeded RNG.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut rng = StdRng::from_entropy();
        let board = Board::generate(config.side_length, config.mine_count, &mut rng)?;
        Ok(Self::assemble(board, config, rng))
    }

    /// Reproducible session: the seed drives mine placement and every guess
    /// the automated player will make.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate(config.side_length, config.mine_count, &mut rng)?;
        Ok(Self::assemble(board, config, rng))
    }

    /// Wraps a prepared layout, e.g. a fixed puzzle.
    pub fn with_board(board: Board, seed: u64) -> Self {
        let config = GameConfig::new(board.side_length(), board.mine_count());
        Self::assemble(board, config, StdRng::seed_from_u64(seed))
    }

    fn assemble(board: Board, config: GameConfig, rng: StdRng) -> Self {
        Self {
            board,
            state: GameState::Playing,
            first_click_taken: false,
            config,
            rng,
            auto_play: AutoPlayOptions::default(),
            ai_turn: false,
        }
    }

    /// Builds the successor session: fresh board, same configuration, same
    /// automated-player settings. The successor's seed is drawn from this
    /// session's RNG, so seeded runs restart reproducibly. The caller
    /// replaces its session with the returned one.
    pub fn restart(&mut self) -> Result<Game, GameError> {
        let seed = self.rng.gen();
        let mut next = Game::with_seed(self.config, seed)?;
        next.auto_play = self.auto_play;
        Ok(next)
    }

    /// Reveal command. Order matters: the first click relocates a mine
    /// under it before anything else looks at the cell, and a flagged or
    /// revealed target is a no-op even when that relocation happened.
    pub fn click(&mut self, pos: Position) {
        if self.is_over() || !self.board.is_within_bounds(pos) {
            return;
        }

        if !self.first_click_taken {
            if matches!(self.board.cell(pos), Some(cell) if cell.is_mine) {
                self.board.relocate_mine(pos);
            }
            self.first_click_taken = true;
        }

        let ai_turn = self.ai_turn;
        let is_mine = {
            let cell = match self.board.cell_mut(pos) {
                Some(cell) => cell,
                None => return,
            };
            if cell.state != CellState::Covered {
                return;
            }
            if ai_turn {
                cell.ai_marked = true;
            }
            cell.is_mine
        };

        if is_mine {
            self.state = GameState::Lost;
            self.board.reveal_all_mines();
            debug!(?pos, "mine detonated, session lost");
            return;
        }

        self.board.reveal_from(pos);
        self.check_win();
    }

    /// Flag command: flips `Covered ↔ Flagged`. Finished sessions, invalid
    /// targets and revealed cells are no-ops.
    pub fn toggle_flag(&mut self, pos: Position) {
        if self.is_over() {
            return;
        }

        let ai_turn = self.ai_turn;
        let cell = match self.board.cell_mut(pos) {
            Some(cell) => cell,
            None => return,
        };

        match cell.state {
            CellState::Covered => cell.state = CellState::Flagged,
            CellState::Flagged => cell.state = CellState::Covered,
            CellState::Revealed => return,
        }
        if ai_turn {
            cell.ai_marked = true;
        }

        self.check_win();
    }

    fn check_win(&mut self) {
        if self.state == GameState::Playing && self.board.all_safe_revealed() {
            self.state = GameState::Won;
            debug!("all safe cells revealed, session won");
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn did_win(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn first_click_taken(&self) -> bool {
        self.first_click_taken
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn auto_play(&self) -> AutoPlayOptions {
        self.auto_play
    }

    pub fn set_auto_play(&mut self, options: AutoPlayOptions) {
        self.auto_play = options;
    }

    /// True while the automated player is issuing commands. Frontends must
    /// hold human input while this is set; the commands themselves do not
    /// check it.
    pub fn is_ai_turn(&self) -> bool {
        self.ai_turn
    }

    pub(crate) fn set_ai_turn(&mut self, on: bool) {
        self.ai_turn = on;
    }

    /// Disjoint borrows for the solver: the board to read, the session RNG
    /// to guess with.
    pub(crate) fn solver_parts(&mut self) -> (&Board, &mut StdRng) {
        (&self.board, &mut self.rng)
    }

    /// Presentation view. Mine placement stays hidden while the session is
    /// running, except on cells already revealed.
    pub fn snapshot(&self) -> BoardSnapshot {
        let over = self.is_over();
        let cells = self
            .board
            .positions()
            .filter_map(|pos| self.board.cell(pos))
            .map(|cell| CellView {
                state: cell.state,
                is_mine: if over || cell.state == CellState::Revealed {
                    Some(cell.is_mine)
                } else {
                    None
                },
                adjacent_mines: cell.adjacent_mines,
                ai_marked: cell.ai_marked,
            })
            .collect();

        BoardSnapshot {
            side_length: self.board.side_length(),
            cells,
        }
    }
}

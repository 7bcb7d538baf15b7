use super::board::{self, Board, Cell, BOARD_SIZE};
use super::cube::Cube;
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::OutOfBounds => MoveError::OutOfBounds,
            board::MoveError::Occupied => MoveError::Occupied,
        }
    }
}

/// State of the 4x4 game: board, player to move, and cached outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    mover: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            mover: Player::X, // X starts
            outcome: None,
        }
    }

    /// Build a state from an arbitrary position
    pub fn from_board(board: Board, mover: Player) -> Self {
        let outcome = outcome_of(
            board.has_won(Player::X.to_cell()),
            board.has_won(Player::O.to_cell()),
            board.is_full(),
        );
        GameState { board, mover, outcome }
    }

    /// Get the player whose turn it is
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply a placement and return the new state (immutable)
    pub fn place(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut board = self.board;
        let mark = self.mover.to_cell();
        board.place(row, col, mark)?;

        let outcome = if board.has_won(mark) {
            Some(GameOutcome::Winner(self.mover))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board,
            mover: self.mover.other(),
            outcome,
        })
    }

    /// All states reachable by one legal placement, one per empty cell in
    /// row-major order. Empty exactly when the mover has nothing to play.
    pub fn successors(&self) -> Vec<GameState> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mut states = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.board.get(row, col) == Cell::Empty {
                    states.push(self.place(row, col).expect("empty cell is placeable"));
                }
            }
        }
        states
    }

    /// The canonical pass successor: same board, turn handed over
    pub fn pass(&self) -> GameState {
        GameState {
            board: self.board,
            mover: self.mover.other(),
            outcome: self.outcome,
        }
    }
}

/// State of the 4x4x4 game: cube, player to move, and cached outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeState {
    cube: Cube,
    mover: Player,
    outcome: Option<GameOutcome>,
}

impl CubeState {
    /// Create initial game state
    pub fn initial() -> Self {
        CubeState {
            cube: Cube::new(),
            mover: Player::X, // X starts
            outcome: None,
        }
    }

    /// Build a state from an arbitrary position
    pub fn from_cube(cube: Cube, mover: Player) -> Self {
        let outcome = outcome_of(
            cube.has_won(Player::X.to_cell()),
            cube.has_won(Player::O.to_cell()),
            cube.is_full(),
        );
        CubeState { cube, mover, outcome }
    }

    /// Get the player whose turn it is
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Get reference to cube
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply a placement and return the new state (immutable)
    pub fn place(&self, x: usize, y: usize, z: usize) -> Result<CubeState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut cube = self.cube;
        let mark = self.mover.to_cell();
        cube.place(x, y, z, mark)?;

        let outcome = if cube.has_won(mark) {
            Some(GameOutcome::Winner(self.mover))
        } else if cube.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(CubeState {
            cube,
            mover: self.mover.other(),
            outcome,
        })
    }

    /// All states reachable by one legal placement, one per empty cell in
    /// x, y, z lexicographic order. Empty exactly when nothing is playable.
    pub fn successors(&self) -> Vec<CubeState> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mut states = Vec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                for z in 0..BOARD_SIZE {
                    if self.cube.get(x, y, z) == Cell::Empty {
                        states.push(self.place(x, y, z).expect("empty cell is placeable"));
                    }
                }
            }
        }
        states
    }

    /// The canonical pass successor: same cube, turn handed over
    pub fn pass(&self) -> CubeState {
        CubeState {
            cube: self.cube,
            mover: self.mover.other(),
            outcome: self.outcome,
        }
    }
}

fn outcome_of(x_won: bool, o_won: bool, full: bool) -> Option<GameOutcome> {
    if x_won {
        Some(GameOutcome::Winner(Player::X))
    } else if o_won {
        Some(GameOutcome::Winner(Player::O))
    } else if full {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

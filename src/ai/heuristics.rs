use crate::game::{Cell, CubeState, GameState, Line, Player, BOARD_SIZE};

/// Trait for evaluating a position from a player's perspective.
///
/// The player passed in is always the fixed root maximizer of the running
/// search, never the mover at the evaluated node.
pub trait Heuristic<S>: Send {
    fn evaluate(&self, state: &S, player: Player) -> f64;
}

/// States whose win lines can be enumerated for line-fold evaluators.
pub trait LineSource {
    fn lines(&self) -> Vec<Line>;
}

impl LineSource for GameState {
    fn lines(&self) -> Vec<Line> {
        self.board().lines()
    }
}

impl LineSource for CubeState {
    fn lines(&self) -> Vec<Line> {
        self.cube().lines()
    }
}

/// Marks of each side within one line.
fn line_counts(line: &Line, mark: Cell, opponent: Cell) -> (u32, u32) {
    let mut own = 0;
    let mut opp = 0;
    for &cell in line {
        if cell == mark {
            own += 1;
        } else if cell == opponent {
            opp += 1;
        }
    }
    (own, opp)
}

/// Baseline evaluator: one point per cell the player occupies.
pub struct CountHeuristic;

impl Heuristic<GameState> for CountHeuristic {
    fn evaluate(&self, state: &GameState, player: Player) -> f64 {
        let mark = player.to_cell();
        let mut eval = 0.0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if state.board().get(row, col) == mark {
                    eval += 1.0;
                }
            }
        }
        eval
    }
}

/// 10^count per win line: rewards concentrating marks in a single line
/// super-linearly, without caring whether the line is still winnable.
pub struct LinePowerHeuristic;

impl<S: LineSource> Heuristic<S> for LinePowerHeuristic {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        let mark = player.to_cell();
        let opponent = player.other().to_cell();
        let mut eval = 0.0;
        for line in state.lines() {
            let (own, _) = line_counts(&line, mark, opponent);
            eval += 10f64.powi(own as i32);
        }
        eval
    }
}

/// base^count per win line, counted only while the line holds no opponent
/// mark. A blocked line contributes nothing no matter how many marks the
/// player has in it.
pub struct OpenLineHeuristic {
    pub base: f64,
}

impl Default for OpenLineHeuristic {
    fn default() -> Self {
        OpenLineHeuristic { base: 10.0 }
    }
}

impl<S: LineSource> Heuristic<S> for OpenLineHeuristic {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        let mark = player.to_cell();
        let opponent = player.other().to_cell();
        let mut eval = 0.0;
        for line in state.lines() {
            let (own, opp) = line_counts(&line, mark, opponent);
            if opp == 0 {
                eval += self.base.powi(own as i32);
            }
        }
        eval
    }
}

/// Attack/defense evaluator: an open line with `att` own marks is worth
/// `att * base^(2*att)`, and a line the opponent is one mark away from
/// completing costs `base^(2*len - 1)`. The base is a tuned constant.
pub struct ThreatHeuristic {
    pub base: f64,
}

impl Default for ThreatHeuristic {
    fn default() -> Self {
        ThreatHeuristic { base: 80.0 }
    }
}

impl<S: LineSource> Heuristic<S> for ThreatHeuristic {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        let mark = player.to_cell();
        let opponent = player.other().to_cell();
        let len = BOARD_SIZE as u32;
        let mut eval = 0.0;
        for line in state.lines() {
            let (att, def) = line_counts(&line, mark, opponent);
            if def == 0 {
                eval += att as f64 * self.base.powi(2 * att as i32);
            }
            if def == len - 1 && att == 0 {
                eval -= self.base.powi(2 * len as i32 - 1);
            }
        }
        eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cube};

    fn diagonal_board(cell: Cell) -> Board {
        let mut board = Board::new();
        for pos in 0..BOARD_SIZE {
            board.place(pos, pos, cell).unwrap();
        }
        board
    }

    /// Same position with the two sides' marks exchanged.
    fn mirrored(board: &Board) -> Board {
        let mut mirror = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match board.get(row, col) {
                    Cell::X => mirror.place(row, col, Cell::O).unwrap(),
                    Cell::O => mirror.place(row, col, Cell::X).unwrap(),
                    Cell::Empty => {}
                }
            }
        }
        mirror
    }

    #[test]
    fn count_scores_one_per_occupied_cell() {
        let state = GameState::from_board(diagonal_board(Cell::X), Player::O);
        assert_eq!(CountHeuristic.evaluate(&state, Player::X), 4.0);
        assert_eq!(CountHeuristic.evaluate(&state, Player::O), 0.0);
    }

    #[test]
    fn line_power_full_diagonal() {
        // 10^4 for the diagonal plus 10^0 for each of the 9 other lines
        let state = GameState::from_board(diagonal_board(Cell::X), Player::O);
        assert_eq!(LinePowerHeuristic.evaluate(&state, Player::X), 10009.0);
    }

    #[test]
    fn line_power_empty_board() {
        let state = GameState::initial();
        assert_eq!(LinePowerHeuristic.evaluate(&state, Player::X), 10.0);
    }

    #[test]
    fn open_line_empty_board() {
        let state = GameState::initial();
        assert_eq!(OpenLineHeuristic::default().evaluate(&state, Player::X), 10.0);
    }

    #[test]
    fn open_line_blocked_line_contributes_nothing() {
        // Row 0 holds three X and one O: the row is dead. Remaining open
        // lines for X: cols 0..2 at 10^1 each, rows 1..3 at 10^0 each, and
        // the main diagonal at 10^1. Col 3 and the anti-diagonal hold the O.
        let mut board = Board::new();
        for col in 0..3 {
            board.place(0, col, Cell::X).unwrap();
        }
        board.place(0, 3, Cell::O).unwrap();

        let state = GameState::from_board(board, Player::O);
        assert_eq!(OpenLineHeuristic::default().evaluate(&state, Player::X), 43.0);
    }

    #[test]
    fn evaluators_are_symmetric_under_player_swap() {
        let mut board = Board::new();
        board.place(0, 0, Cell::X).unwrap();
        board.place(1, 1, Cell::O).unwrap();
        board.place(0, 1, Cell::X).unwrap();
        board.place(2, 3, Cell::O).unwrap();
        board.place(3, 0, Cell::X).unwrap();

        let state = GameState::from_board(board, Player::O);
        let swapped = GameState::from_board(mirrored(&board), Player::X);

        assert_eq!(
            CountHeuristic.evaluate(&state, Player::X),
            CountHeuristic.evaluate(&swapped, Player::O)
        );
        assert_eq!(
            LinePowerHeuristic.evaluate(&state, Player::X),
            LinePowerHeuristic.evaluate(&swapped, Player::O)
        );
        assert_eq!(
            OpenLineHeuristic::default().evaluate(&state, Player::X),
            OpenLineHeuristic::default().evaluate(&swapped, Player::O)
        );
    }

    #[test]
    fn cube_open_line_empty_cube() {
        // Every entry of the 124-line decomposition is open at 10^0
        let state = CubeState::initial();
        assert_eq!(OpenLineHeuristic::default().evaluate(&state, Player::X), 124.0);
    }

    #[test]
    fn threat_empty_cube_is_zero() {
        let state = CubeState::initial();
        assert_eq!(ThreatHeuristic::default().evaluate(&state, Player::X), 0.0);
    }

    #[test]
    fn threat_penalty_on_space_diagonal() {
        // Three O marks on the space diagonal, which appears once in the
        // decomposition: X's evaluation is exactly -80^7. X has no marks, so
        // every attack term is zero.
        let mut cube = Cube::new();
        for p in 0..3 {
            cube.place(p, p, p, Cell::O).unwrap();
        }
        let state = CubeState::from_cube(cube, Player::X);
        assert_eq!(
            ThreatHeuristic::default().evaluate(&state, Player::X),
            -(80f64.powi(7))
        );
    }

    #[test]
    fn threat_penalty_doubles_on_axis_lines() {
        // The z-axis line through (0,0,*) appears twice in the layer
        // decomposition, so the one-move-from-loss penalty lands twice.
        let mut cube = Cube::new();
        for z in 0..3 {
            cube.place(0, 0, z, Cell::O).unwrap();
        }
        let state = CubeState::from_cube(cube, Player::X);
        assert_eq!(
            ThreatHeuristic::default().evaluate(&state, Player::X),
            -2.0 * 80f64.powi(7)
        );
    }

    #[test]
    fn threat_attack_term_is_gated_by_opponent_mark() {
        // X holds three cells of the space diagonal: that line is worth
        // 3 * 80^6 while open. An O mark on the remaining cell removes the
        // term and touches no line holding an X mark, so the evaluation
        // drops by exactly that amount.
        let mut cube = Cube::new();
        for p in 0..3 {
            cube.place(p, p, p, Cell::X).unwrap();
        }
        let open = ThreatHeuristic::default()
            .evaluate(&CubeState::from_cube(cube, Player::O), Player::X);

        cube.place(3, 3, 3, Cell::O).unwrap();
        let blocked = ThreatHeuristic::default()
            .evaluate(&CubeState::from_cube(cube, Player::O), Player::X);

        assert_eq!(open - blocked, 3.0 * 80f64.powi(6));
    }

    #[test]
    fn threat_is_symmetric_under_player_swap() {
        let mut cube = Cube::new();
        cube.place(0, 0, 0, Cell::X).unwrap();
        cube.place(1, 1, 1, Cell::O).unwrap();
        cube.place(0, 1, 2, Cell::X).unwrap();

        let mut swapped_cube = Cube::new();
        swapped_cube.place(0, 0, 0, Cell::O).unwrap();
        swapped_cube.place(1, 1, 1, Cell::X).unwrap();
        swapped_cube.place(0, 1, 2, Cell::O).unwrap();

        let state = CubeState::from_cube(cube, Player::O);
        let swapped = CubeState::from_cube(swapped_cube, Player::X);
        assert_eq!(
            ThreatHeuristic::default().evaluate(&state, Player::X),
            ThreatHeuristic::default().evaluate(&swapped, Player::O)
        );
    }
}

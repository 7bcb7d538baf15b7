use super::board::{Cell, Line, MoveError, BOARD_SIZE};

/// The 4x4x4 board. Coordinates are (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cube {
    cells: [[[Cell; BOARD_SIZE]; BOARD_SIZE]; BOARD_SIZE],
}

impl Cube {
    /// Create a new empty cube
    pub fn new() -> Self {
        Cube {
            cells: [[[Cell::Empty; BOARD_SIZE]; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, x: usize, y: usize, z: usize) -> Cell {
        self.cells[x][y][z]
    }

    /// Place a mark on an empty cell
    pub fn place(&mut self, x: usize, y: usize, z: usize, cell: Cell) -> Result<(), MoveError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE || z >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if self.cells[x][y][z] != Cell::Empty {
            return Err(MoveError::Occupied);
        }
        self.cells[x][y][z] = cell;
        Ok(())
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|plane| plane.iter().all(|row| row.iter().all(|&c| c != Cell::Empty)))
    }

    /// Check if the given mark occupies a complete win line
    pub fn has_won(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        self.lines().iter().any(|line| line.iter().all(|&c| c == cell))
    }

    /// The win lines as seen by the layer decomposition: each of the three
    /// axis orientations is sliced into 4 layers contributing their 10
    /// in-layer lines, then the four space diagonals are appended — 124
    /// entries in total. Every axis-aligned line belongs to two orientations
    /// and therefore appears twice; evaluators fold over the multiset as-is,
    /// so axis lines carry double weight.
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(3 * BOARD_SIZE * (2 * BOARD_SIZE + 2) + 4);

        for x in 0..BOARD_SIZE {
            self.layer_lines(&mut lines, |u, v| (x, u, v));
        }
        for y in 0..BOARD_SIZE {
            self.layer_lines(&mut lines, |u, v| (u, y, v));
        }
        for z in 0..BOARD_SIZE {
            self.layer_lines(&mut lines, |u, v| (u, v, z));
        }

        let n = BOARD_SIZE - 1;
        lines.push(std::array::from_fn(|p| self.cells[p][p][p]));
        lines.push(std::array::from_fn(|p| self.cells[p][n - p][n - p]));
        lines.push(std::array::from_fn(|p| self.cells[n - p][p][n - p]));
        lines.push(std::array::from_fn(|p| self.cells[p][p][n - p]));

        lines
    }

    /// The 10 lines of one layer: 4 along each in-layer axis plus the two
    /// layer diagonals. `at` maps layer coordinates (u, v) to cube cells.
    fn layer_lines(&self, lines: &mut Vec<Line>, at: impl Fn(usize, usize) -> (usize, usize, usize)) {
        for u in 0..BOARD_SIZE {
            lines.push(std::array::from_fn(|v| self.at(at(u, v))));
        }
        for v in 0..BOARD_SIZE {
            lines.push(std::array::from_fn(|u| self.at(at(u, v))));
        }
        lines.push(std::array::from_fn(|p| self.at(at(p, p))));
        lines.push(std::array::from_fn(|p| self.at(at(p, BOARD_SIZE - 1 - p))));
    }

    fn at(&self, (x, y, z): (usize, usize, usize)) -> Cell {
        self.cells[x][y][z]
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cube_is_empty() {
        let cube = Cube::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                for z in 0..BOARD_SIZE {
                    assert_eq!(cube.get(x, y, z), Cell::Empty);
                }
            }
        }
    }

    #[test]
    fn test_place_mark() {
        let mut cube = Cube::new();
        cube.place(1, 2, 3, Cell::O).unwrap();
        assert_eq!(cube.get(1, 2, 3), Cell::O);
    }

    #[test]
    fn test_place_on_occupied_cell() {
        let mut cube = Cube::new();
        cube.place(0, 0, 0, Cell::X).unwrap();
        assert_eq!(cube.place(0, 0, 0, Cell::O), Err(MoveError::Occupied));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut cube = Cube::new();
        assert_eq!(cube.place(4, 0, 0, Cell::X), Err(MoveError::OutOfBounds));
        assert_eq!(cube.place(0, 0, 4, Cell::X), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_line_decomposition_has_124_entries() {
        // 3 orientations * 4 layers * 10 lines + 4 space diagonals
        assert_eq!(Cube::new().lines().len(), 124);
    }

    #[test]
    fn test_axis_lines_appear_twice() {
        // A single mark sits on 3 axis lines (each listed twice), 3 layer
        // diagonals, and 1 space diagonal: 10 entries in the multiset.
        let mut cube = Cube::new();
        cube.place(0, 0, 0, Cell::X).unwrap();
        let containing = cube
            .lines()
            .iter()
            .filter(|line| line.contains(&Cell::X))
            .count();
        assert_eq!(containing, 10);
    }

    #[test]
    fn test_axis_win() {
        let mut cube = Cube::new();
        for x in 0..BOARD_SIZE {
            cube.place(x, 1, 2, Cell::X).unwrap();
        }
        assert!(cube.has_won(Cell::X));
        assert!(!cube.has_won(Cell::O));
    }

    #[test]
    fn test_space_diagonal_win() {
        let mut cube = Cube::new();
        for p in 0..BOARD_SIZE {
            cube.place(p, p, p, Cell::O).unwrap();
        }
        assert!(cube.has_won(Cell::O));
    }

    #[test]
    fn test_layer_diagonal_win() {
        let mut cube = Cube::new();
        for p in 0..BOARD_SIZE {
            cube.place(2, p, p, Cell::X).unwrap();
        }
        assert!(cube.has_won(Cell::X));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut cube = Cube::new();
        for p in 0..3 {
            cube.place(p, p, p, Cell::X).unwrap();
        }
        assert!(!cube.has_won(Cell::X));
    }
}

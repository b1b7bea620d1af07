use std::fmt;

use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-owner cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Largest supported number of rows or columns.
pub const MAX_DIMENSION: usize = 16;

/// The four axes a winning line can run along: vertical, horizontal and the
/// two diagonals, as (row delta, column delta).
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// Parse a cell from its position-string glyph (`R`, `B`, `.` or space).
    pub fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            'R' | 'r' => Some(Cell::Red),
            'B' | 'b' => Some(Cell::Blue),
            '.' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Glyph used in position strings.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Blue => 'B',
        }
    }

    fn display_glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => 'O',
            Cell::Blue => 'X',
        }
    }
}

/// A `rows x cols` grid stored row-major. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                max: MAX_DIMENSION,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        // Find the lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.set(row, col, cell);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if the piece at (row, col) is part of a winning line
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(row, col, dr, dc, cell) >= CONNECT)
    }

    /// Length of the contiguous run of `cell` through (row, col) along one
    /// axis, counting both directions.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        1 + self.count_from(row, col, dr, dc, cell) + self.count_from(row, col, -dr, -dc, cell)
    }

    fn count_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.cols
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Owners of every winning line currently on the board.
    pub(crate) fn line_owners(&self) -> (bool, bool) {
        let mut red = false;
        let mut blue = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.check_win(row, col) {
                    match self.get(row, col) {
                        Cell::Red => red = true,
                        Cell::Blue => blue = true,
                        Cell::Empty => {}
                    }
                }
            }
        }
        (red, blue)
    }

    /// Parse a board from text rows, top row first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut board = Board::new(height, width)?;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row,
                    found,
                    expected: width,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(BoardError::UnknownGlyph { glyph, row, col })?;
                board.set(row, col, cell);
            }
        }

        // Pieces must rest on the bottom or on another piece.
        for row in 0..height.saturating_sub(1) {
            for col in 0..width {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    /// Render the board as `/`-separated position rows.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.get(row, col).glyph()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "- ".repeat(self.cols + 2);
        writeln!(f, "{border}")?;
        for row in 0..self.rows {
            write!(f, "|")?;
            for col in 0..self.cols {
                write!(f, "{} ", self.get(row, col).display_glyph())?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "{border}")?;
        write!(f, " ")?;
        for col in 0..self.cols {
            write!(f, "{:>2}", col % 10)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Board::new(0, 7),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(Board::new(6, MAX_DIMENSION + 1).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Blue).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Blue);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Blue), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Cell::Red),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.check_win(5, 2)); // Check middle of the line
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Blue).unwrap();
        }
        assert!(board.check_win(2, 3));
        // A vertical line is found from its lowest piece too.
        assert!(board.check_win(5, 3));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...R...",
            "..RB...",
            ".RBB...",
            "RBBB...",
        ])
        .unwrap();
        assert!(board.check_win(2, 3));
        assert!(board.check_win(5, 0));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...R...",
            "...BR..",
            "...BBR.",
            "...BBBR",
        ])
        .unwrap();
        assert!(board.check_win(2, 3));
        assert!(board.check_win(4, 5));
    }

    #[test]
    fn test_win_in_every_direction_on_every_size() {
        for rows in 4..=7 {
            for cols in 4..=8 {
                for &(dr, dc) in &DIRECTIONS {
                    let mut board = Board::new(rows, cols).unwrap();
                    // Anchor the line so all four cells stay on the board.
                    let start_row = if dr < 0 { 3 } else { 0 };
                    for i in 0..CONNECT as isize {
                        let r = (start_row + dr * i) as usize;
                        let c = (dc * i) as usize;
                        board.set(r, c, Cell::Red);
                    }
                    for i in 0..CONNECT as isize {
                        let r = (start_row + dr * i) as usize;
                        let c = (dc * i) as usize;
                        assert!(
                            board.check_win(r, c),
                            "{rows}x{cols} direction ({dr},{dc}) cell ({r},{c})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.check_win(5, 1)); // Only 3 in a row
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows(&["....", "....", "....", "RRBR"]).unwrap();
        for col in 0..4 {
            assert!(!board.check_win(3, col));
        }
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = ["....", "....", ".B..", "RRB."];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.get(3, 0), Cell::Red);
        assert_eq!(board.get(2, 1), Cell::Blue);
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(&["....", "..."]),
            Err(BoardError::RaggedRow {
                row: 1,
                found: 3,
                expected: 4
            })
        );
        assert_eq!(
            Board::from_rows(&["....", "..x."]),
            Err(BoardError::UnknownGlyph {
                glyph: 'x',
                row: 1,
                col: 2
            })
        );
        assert_eq!(
            Board::from_rows(&["R...", "...."]),
            Err(BoardError::FloatingPiece { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_display_layout() {
        let board = Board::from_rows(&["....", "R..B"]).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "- - - - - - ");
        assert_eq!(lines[1], "|         |");
        assert_eq!(lines[2], "|O     X  |");
        assert_eq!(lines[4], "  0 1 2 3");
    }
}

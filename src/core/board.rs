//! Attempt board
//!
//! A `MAX_ATTEMPTS` x `WORD_LEN` grid of letters plus a cursor. Cells fill
//! left to right within the active row only; rows before the cursor are
//! frozen once evaluated.

use super::{MAX_ATTEMPTS, WORD_LEN};

/// Mutable grid of submitted and in-progress letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<char>; WORD_LEN]; MAX_ATTEMPTS],
    row: usize,
    col: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the cursor at the first cell
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [[None; WORD_LEN]; MAX_ATTEMPTS],
            row: 0,
            col: 0,
        }
    }

    /// Write a letter at the cursor and advance
    ///
    /// Returns the column written, or `None` when the active row is already
    /// full, the board is exhausted, or `ch` is not an ASCII letter. The
    /// no-op cases are silent: a letter is never written past the row end.
    pub fn push_letter(&mut self, ch: char) -> Option<usize> {
        if self.row == MAX_ATTEMPTS || self.col == WORD_LEN || !ch.is_ascii_alphabetic() {
            return None;
        }

        let col = self.col;
        self.grid[self.row][col] = Some(ch.to_ascii_uppercase());
        self.col += 1;
        Some(col)
    }

    /// Clear the cell before the cursor
    ///
    /// Returns the column cleared, or `None` when the active row is empty.
    pub fn pop_letter(&mut self) -> Option<usize> {
        if self.row == MAX_ATTEMPTS || self.col == 0 {
            return None;
        }

        self.col -= 1;
        self.grid[self.row][self.col] = None;
        Some(self.col)
    }

    /// Letters of the active row, in column order
    #[must_use]
    pub fn current_guess(&self) -> String {
        if self.row == MAX_ATTEMPTS {
            return String::new();
        }
        self.grid[self.row].iter().flatten().collect()
    }

    /// Move the cursor to the start of the next row
    ///
    /// The caller is responsible for having evaluated the finished row first.
    pub fn advance_row(&mut self) {
        self.col = 0;
        if self.row < MAX_ATTEMPTS {
            self.row += 1;
        }
    }

    /// Active row index
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Cursor column within the active row
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Whether the active row holds a full word
    #[inline]
    #[must_use]
    pub const fn is_row_full(&self) -> bool {
        self.col == WORD_LEN
    }

    /// Letter at a cell, `None` when empty or out of range
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        *self.grid.get(row)?.get(col)?
    }

    /// Clear the grid and reset the cursor
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(board: &mut Board, word: &str) {
        for ch in word.chars() {
            board.push_letter(ch);
        }
    }

    #[test]
    fn push_fills_left_to_right() {
        let mut board = Board::new();
        assert_eq!(board.push_letter('c'), Some(0));
        assert_eq!(board.push_letter('R'), Some(1));
        assert_eq!(board.letter(0, 0), Some('C'));
        assert_eq!(board.letter(0, 1), Some('R'));
        assert_eq!(board.col(), 2);
        assert_eq!(board.row(), 0);
    }

    #[test]
    fn push_past_row_end_is_noop() {
        let mut board = Board::new();
        type_word(&mut board, "CRANE");
        assert!(board.is_row_full());

        // Repeated pushes at a full row change nothing
        assert_eq!(board.push_letter('X'), None);
        assert_eq!(board.push_letter('X'), None);
        assert_eq!(board.current_guess(), "CRANE");
        assert_eq!(board.col(), WORD_LEN);
    }

    #[test]
    fn push_rejects_non_letters() {
        let mut board = Board::new();
        assert_eq!(board.push_letter('3'), None);
        assert_eq!(board.push_letter(' '), None);
        assert_eq!(board.push_letter('é'), None);
        assert_eq!(board.col(), 0);
    }

    #[test]
    fn pop_clears_last_cell() {
        let mut board = Board::new();
        type_word(&mut board, "CRA");
        assert_eq!(board.pop_letter(), Some(2));
        assert_eq!(board.letter(0, 2), None);
        assert_eq!(board.current_guess(), "CR");
    }

    #[test]
    fn pop_at_row_start_is_noop() {
        let mut board = Board::new();
        assert_eq!(board.pop_letter(), None);
        assert_eq!(board.pop_letter(), None);
        assert_eq!(board.col(), 0);

        // Also after advancing: the previous row is frozen
        type_word(&mut board, "CRANE");
        board.advance_row();
        assert_eq!(board.pop_letter(), None);
        assert_eq!(board.letter(0, 4), Some('E'));
    }

    #[test]
    fn advance_resets_column() {
        let mut board = Board::new();
        type_word(&mut board, "CRANE");
        board.advance_row();

        assert_eq!(board.row(), 1);
        assert_eq!(board.col(), 0);
        assert_eq!(board.current_guess(), "");

        type_word(&mut board, "SL");
        assert_eq!(board.letter(1, 0), Some('S'));
        assert_eq!(board.letter(0, 0), Some('C')); // Frozen row untouched
    }

    #[test]
    fn exhausted_board_ignores_input() {
        let mut board = Board::new();
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut board, "CRANE");
            board.advance_row();
        }

        assert_eq!(board.row(), MAX_ATTEMPTS);
        assert_eq!(board.push_letter('A'), None);
        assert_eq!(board.pop_letter(), None);
        assert_eq!(board.current_guess(), "");
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Board::new();
        type_word(&mut board, "CRANE");
        board.advance_row();
        board.reset();

        assert_eq!(board.row(), 0);
        assert_eq!(board.col(), 0);
        assert_eq!(board.letter(0, 0), None);
    }

    #[test]
    fn letter_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.letter(MAX_ATTEMPTS, 0), None);
        assert_eq!(board.letter(0, WORD_LEN), None);
    }
}

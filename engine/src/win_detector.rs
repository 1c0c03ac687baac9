use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Rows, then columns, then diagonals. The scan order is part of the
/// contract: the first line in this order is the one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<WinningLine> {
    for line in WIN_LINES {
        let mark = board.cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if board.cells[line[1]] == mark && board.cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(line) = check_win(board) {
        return Outcome::Won(line);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    #[test]
    fn test_top_row_win_reports_line() {
        let board = Board::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            evaluate_outcome(&board),
            Outcome::Won(WinningLine::new(X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_marks([O, X, E, O, X, E, O, E, X]);
        assert_eq!(check_win(&board), Some(WinningLine::new(O, [0, 3, 6])));
    }

    #[test]
    fn test_diagonal_wins() {
        let board = Board::from_marks([X, O, E, O, X, E, E, E, X]);
        assert_eq!(check_win(&board), Some(WinningLine::new(X, [0, 4, 8])));

        let board = Board::from_marks([X, X, O, E, O, E, O, E, E]);
        assert_eq!(check_win(&board), Some(WinningLine::new(O, [2, 4, 6])));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_marks([X, O, E, E, X, E, E, E, E]);
        assert_eq!(evaluate_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_multiple_lines_report_first_in_scan_order() {
        // Unreachable under alternating play, but the enumeration order
        // keeps the reported line deterministic: row 0 beats column 0.
        let board = Board::from_marks([X, X, X, X, E, E, X, E, E]);
        assert_eq!(check_win(&board), Some(WinningLine::new(X, [0, 1, 2])));
    }

    #[test]
    fn test_outcome_is_deterministic_after_move() {
        let mut first = Board::from_marks([X, X, E, O, O, E, E, E, E]);
        let mut second = first;
        first.apply_move(2, X).unwrap();
        second.apply_move(2, X).unwrap();
        assert_eq!(evaluate_outcome(&first), evaluate_outcome(&second));
    }
}

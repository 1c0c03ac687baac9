use super::board::Board;
use super::config::{Difficulty, FirstPlayer, GameConfig};
use super::types::{GameStatus, Mark, Outcome, WinningLine};
use super::win_detector::{check_win, evaluate_outcome};

/// Current-game state owned by the presentation layer. X always moves
/// first; the first-player selection decides which seat holds X.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub bot_mark: Mark,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let bot_mark = match config.first_player {
            FirstPlayer::Bot => Mark::X,
            FirstPlayer::Human => Mark::O,
        };

        Self {
            board: Board::new(),
            current_mark: Mark::X,
            bot_mark,
            difficulty: config.difficulty,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        self.board
            .apply_move(index, self.current_mark)
            .map_err(|e| e.to_string())?;
        self.last_move = Some(index);

        self.check_game_over();
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.bot_mark
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if matches!(self.status, GameStatus::XWon | GameStatus::OWon) {
            check_win(&self.board)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        match evaluate_outcome(&self.board) {
            Outcome::Won(line) => {
                self.status = match line.mark {
                    Mark::X => GameStatus::XWon,
                    Mark::O => GameStatus::OWon,
                    Mark::Empty => unreachable!(),
                };
                crate::log!("Game over: {:?} wins on {:?}", line.mark, line.cells);
            }
            Outcome::Draw => {
                self.status = GameStatus::Draw;
                crate::log!("Game over: draw");
            }
            Outcome::InProgress => {}
        }
    }
}

pub mod board;
pub mod bot;
pub mod config;
pub mod game_state;
pub mod logger;
pub mod rng;
pub mod types;
pub mod win_detector;

pub use board::{Board, CELL_COUNT, IllegalMoveError, row_col};
pub use bot::{BotInput, calculate_minimax_move, calculate_move};
pub use config::{Difficulty, FirstPlayer, GameConfig};
pub use game_state::GameState;
pub use rng::GameRng;
pub use types::{GameStatus, Mark, Outcome, WinningLine};
pub use win_detector::{WIN_LINES, check_win, evaluate_outcome};

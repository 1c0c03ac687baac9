use super::board::{Board, CELL_COUNT};
use super::config::Difficulty;
use super::game_state::GameState;
use super::rng::GameRng;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate_outcome;

/// Chance that the Medium policy plays the optimal move instead of a
/// random one, drawn once per move request.
const MEDIUM_OPTIMAL_CHANCE: f64 = 0.6;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.bot_mark,
        }
    }
}

pub fn calculate_move(
    input: &BotInput,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<usize> {
    if evaluate_outcome(&input.board).is_terminal() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            if rng.random::<f64>() < MEDIUM_OPTIMAL_CHANCE {
                calculate_minimax_move(input)
            } else {
                calculate_random_move(input, rng)
            }
        }
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut GameRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let index = rng.random_range(0..available_moves.len());
    Some(available_moves[index])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let opponent_mark = input.bot_mark.opponent()?;
    if input.board.available_moves().is_empty() {
        return None;
    }

    let mut board = input.board;
    let (_, best_move) = minimax(
        &mut board,
        true,
        input.bot_mark,
        opponent_mark,
        i32::MIN,
        i32::MAX,
    );
    best_move
}

/// Full-depth search. Leaves score +1 when the bot's mark has won, -1 when
/// the opponent has, 0 for a draw. Moves are tried in ascending index
/// order and only a strictly better score replaces the best move, so ties
/// resolve to the lowest index.
fn minimax(
    board: &mut Board,
    maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<usize>) {
    match evaluate_outcome(board) {
        Outcome::Won(line) => {
            let score = if line.mark == bot_mark { 1 } else { -1 };
            return (score, None);
        }
        Outcome::Draw => return (0, None),
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best_score = i32::MIN;
        let mut best_move = None;
        for index in 0..CELL_COUNT {
            if board.cells[index] != Mark::Empty {
                continue;
            }

            board.cells[index] = bot_mark;
            let (score, _) = minimax(board, false, bot_mark, opponent_mark, alpha, beta);
            board.cells[index] = Mark::Empty;

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = i32::MAX;
        let mut best_move = None;
        for index in 0..CELL_COUNT {
            if board.cells[index] != Mark::Empty {
                continue;
            }

            board.cells[index] = opponent_mark;
            let (score, _) = minimax(board, true, bot_mark, opponent_mark, alpha, beta);
            board.cells[index] = Mark::Empty;

            if score < best_score {
                best_score = score;
                best_move = Some(index);
            }
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }
}

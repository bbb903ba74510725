//! Minimax with alpha-beta pruning.
//!
//! The search branches by cloning the state and applying one legal move
//! per child, so there is no undo machinery and no way for a bad branch
//! to corrupt the parent. Every recursion level returns the score
//! together with the move that achieves it, so callers never re-derive
//! the best line from a bare score.
//!
//! The evaluator is injected as a closure. The search fixes no
//! perspective of its own: `maximizing` says whether the side to move
//! at this node is the side the evaluator scores for.

use crate::game_repr::{GameState, Move};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Depth-limited alpha-beta search.
///
/// Returns the evaluator's score for the best reachable line and the
/// root move that starts it. The move is `None` at leaves: depth zero,
/// a finished game, or no legal moves.
pub fn minimax<E>(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    eval: &E,
) -> (i32, Option<Move>)
where
    E: Fn(&GameState) -> i32,
{
    if depth == 0 || state.is_over() {
        return (eval(state), None);
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return (eval(state), None);
    }

    let mut best_move = None;
    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let mut child = state.clone();
            child.apply_move(mv).expect("legal move rejected");
            let (score, _) = minimax(&child, depth - 1, alpha, beta, false, eval);
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let mut child = state.clone();
            child.apply_move(mv).expect("legal move rejected");
            let (score, _) = minimax(&child, depth - 1, alpha, beta, true, eval);
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    }
}

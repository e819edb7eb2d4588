use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

use super::plays::{generate_plays, Play};
use super::search::{rotate_to, settle_trick, solve_step, unrotate_remaining, TrickOutcome};
use super::SearchState;

/// Solve with the first trick fanned out across rayon's worker pool (one
/// worker per core). Each candidate first trick gets a sequential recursion;
/// the first witness to arrive wins, in whatever order workers finish.
/// Outstanding workers notice the shared cancel flag and wind down.
pub fn solve_parallel(state: &SearchState, cancel: &AtomicBool) -> Option<Vec<Play>> {
    let player_count = state.hands.len();
    let rotated = rotate_to(&state.hands, state.leader);
    let first_tricks: Vec<Play> = generate_plays(&rotated, None).collect();

    first_tricks.into_par_iter().find_map_any(|play| {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        match settle_trick(&play, &state.objectives, state.leader, player_count) {
            TrickOutcome::Violates => None,
            TrickOutcome::AllDone => Some(vec![play]),
            TrickOutcome::Continue { objectives, winner } => {
                let next_hands = unrotate_remaining(&play, state.leader, player_count);
                solve_step(&next_hands, &objectives, winner, cancel).map(|mut witness| {
                    witness.insert(0, play);
                    witness
                })
            }
        }
    })
}

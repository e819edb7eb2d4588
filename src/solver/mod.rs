//! The cooperative trick-taking solver: legal-play enumeration, the
//! objective engine, the depth-first search driver, and the parallel front
//! that fans the first trick out over the worker pool.

pub mod input;
pub mod objective;
pub mod parallel;
pub mod plays;
pub mod search;

use std::sync::atomic::AtomicBool;

use crate::game::hand::Hand;
use self::objective::Objective;
use self::plays::Play;

/// A validated solver input: global-frame hands, the live objective set,
/// and the player leading the next trick.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub hands: Vec<Hand>,
    pub objectives: Vec<Objective>,
    pub leader: usize,
}

/// Solve a position, fanning the first trick out over the worker pool.
/// Returns the tricks of a witness, or None when the objectives cannot be
/// satisfied by any legal line.
pub fn solve(state: &SearchState) -> Option<Vec<Play>> {
    let cancel = AtomicBool::new(false);
    solve_with_cancel(state, &cancel)
}

/// `solve` with an external cancellation flag. The search checks the flag
/// between trick evaluations and gives up promptly once it is set.
pub fn solve_with_cancel(state: &SearchState, cancel: &AtomicBool) -> Option<Vec<Play>> {
    parallel::solve_parallel(state, cancel)
}

use std::sync::atomic::{AtomicBool, Ordering};

use crate::game::card::Card;
use crate::game::hand::Hand;
use crate::game::trick::winner_index;

use super::objective::{Objective, ObjectiveOutcome};
use super::plays::{generate_plays, Play};

/// Outcome of folding one candidate trick into the live objective set
pub(crate) enum TrickOutcome {
    /// Some objective failed; prune this line
    Violates,
    /// Every objective is satisfied; the play completes a witness
    AllDone,
    /// Search continues with the surviving objectives and the new leader
    Continue {
        objectives: Vec<Objective>,
        winner: usize,
    },
}

/// Rotate `items` so that `new_leader` sits at index 0
pub(crate) fn rotate_to<T: Clone>(items: &[T], new_leader: usize) -> Vec<T> {
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(&items[new_leader..]);
    rotated.extend_from_slice(&items[..new_leader]);
    rotated
}

/// Post-trick hands, mapped back from the leader-first frame into the
/// global player-index frame.
pub(crate) fn unrotate_remaining(play: &Play, leader: usize, player_count: usize) -> Vec<Hand> {
    let mut hands = vec![Hand::default(); player_count];
    for (offset, turn) in play.iter().enumerate() {
        hands[(leader + offset) % player_count] = turn.remaining.clone();
    }
    hands
}

/// Evaluate one candidate trick: find its winner in the global frame and
/// fold it through every objective. Task player indices are global, so the
/// leader-relative winner offset is translated before objectives see it.
pub(crate) fn settle_trick(
    play: &Play,
    objectives: &[Objective],
    leader: usize,
    player_count: usize,
) -> TrickOutcome {
    let played: Vec<Card> = play.iter().map(|turn| turn.card).collect();
    let Some(offset) = winner_index(&played) else {
        return TrickOutcome::Violates;
    };
    let winner = (leader + offset) % player_count;

    let mut surviving = Vec::with_capacity(objectives.len());
    for objective in objectives {
        match objective.apply_play(&played, winner) {
            ObjectiveOutcome::Failure => return TrickOutcome::Violates,
            ObjectiveOutcome::Success => {}
            ObjectiveOutcome::Updated(next) => surviving.push(next),
        }
    }

    if surviving.is_empty() {
        TrickOutcome::AllDone
    } else {
        TrickOutcome::Continue {
            objectives: surviving,
            winner,
        }
    }
}

/// Depth-first search for a witness from `leader`'s lead.
///
/// Hands arrive in the global frame and are rotated leader-first for
/// enumeration; post-trick hands are rotated back before the recursion so
/// player identities never drift. Objective failure is the only pruning.
/// Returns the tricks of a witness, or None when no legal line satisfies
/// every objective.
pub fn solve_step(
    hands: &[Hand],
    objectives: &[Objective],
    leader: usize,
    cancel: &AtomicBool,
) -> Option<Vec<Play>> {
    let player_count = hands.len();
    let rotated = rotate_to(hands, leader);

    for play in generate_plays(&rotated, None) {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        match settle_trick(&play, objectives, leader, player_count) {
            TrickOutcome::Violates => continue,
            TrickOutcome::AllDone => return Some(vec![play]),
            TrickOutcome::Continue {
                objectives: surviving,
                winner,
            } => {
                let next_hands = unrotate_remaining(&play, leader, player_count);
                if let Some(mut witness) = solve_step(&next_hands, &surviving, winner, cancel) {
                    witness.insert(0, play);
                    return Some(witness);
                }
            }
        }
    }
    None
}

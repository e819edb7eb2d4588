use crate::game::card::Card;

/// The obligation that `player` wins the trick containing `card`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub player: usize,
    pub card: Card,
}

/// A cooperative objective. Only task objectives exist today; new kinds go
/// here and in the `apply_play` dispatch below without touching the search
/// driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Objective {
    Task(TaskObjective),
}

/// Task buckets with different scheduling disciplines.
///
/// `absolute` tasks complete strictly in listed order before everything
/// else; `relative` tasks complete in listed order once all absolutes are
/// done; `anytime` tasks complete whenever no absolute is pending; `last`
/// must be the final task completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskObjective {
    pub absolute: Vec<Task>,
    pub relative: Vec<Task>,
    pub anytime: Vec<Task>,
    pub last: Option<Task>,
}

/// Result of folding one completed trick into an objective
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectiveOutcome {
    /// Some tasks remain; carry the shrunken objective forward
    Updated(Objective),
    /// Every task is done
    Success,
    /// The trick made the objective impossible; prune this line
    Failure,
}

impl Objective {
    /// Fold a completed trick (its cards and the global index of its
    /// winner) into this objective.
    pub fn apply_play(&self, played: &[Card], winner: usize) -> ObjectiveOutcome {
        match self {
            Objective::Task(tasks) => tasks.apply_play(played, winner),
        }
    }
}

impl TaskObjective {
    /// Single pass over the four buckets. A task completes the instant its
    /// card is played; the `no_more_*` flags record that an earlier task in
    /// the sequence is still pending, so any later completion observed
    /// under a raised flag is an ordering violation.
    pub fn apply_play(&self, played: &[Card], winner: usize) -> ObjectiveOutcome {
        let mut next = TaskObjective::default();

        let mut no_more_absolute = false;
        for task in &self.absolute {
            if played.contains(&task.card) {
                if no_more_absolute || winner != task.player {
                    return ObjectiveOutcome::Failure;
                }
            } else {
                no_more_absolute = true;
                next.absolute.push(*task);
            }
        }

        let mut no_more_relative = false;
        for task in &self.relative {
            if played.contains(&task.card) {
                if no_more_absolute || no_more_relative || winner != task.player {
                    return ObjectiveOutcome::Failure;
                }
            } else {
                no_more_relative = true;
                next.relative.push(*task);
            }
        }

        for task in &self.anytime {
            if played.contains(&task.card) {
                if no_more_absolute || winner != task.player {
                    return ObjectiveOutcome::Failure;
                }
            } else {
                next.anytime.push(*task);
            }
        }

        if let Some(last) = self.last {
            if played.contains(&last.card) {
                // The last task may only complete once every other bucket
                // has drained.
                let others_remain = !next.absolute.is_empty()
                    || !next.relative.is_empty()
                    || !next.anytime.is_empty();
                if others_remain || winner != last.player {
                    return ObjectiveOutcome::Failure;
                }
            } else {
                next.last = Some(last);
            }
        }

        if next.is_done() {
            ObjectiveOutcome::Success
        } else {
            ObjectiveOutcome::Updated(Objective::Task(next))
        }
    }

    fn is_done(&self) -> bool {
        self.absolute.is_empty()
            && self.relative.is_empty()
            && self.anytime.is_empty()
            && self.last.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::Suit;

    fn card(code: &str) -> Card {
        Card::from_code(code).unwrap()
    }

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|code| card(code)).collect()
    }

    fn task(player: usize, code: &str) -> Task {
        Task {
            player,
            card: card(code),
        }
    }

    #[test]
    fn test_anytime_task_drains_to_success() {
        let objective = TaskObjective {
            anytime: vec![task(0, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Success);
    }

    #[test]
    fn test_untouched_task_is_retained() {
        let objective = TaskObjective {
            anytime: vec![task(0, "B6")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(
            outcome,
            ObjectiveOutcome::Updated(Objective::Task(objective))
        );
    }

    #[test]
    fn test_wrong_taker_fails() {
        let objective = TaskObjective {
            anytime: vec![task(1, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_completed_task_is_dropped_from_update() {
        let objective = TaskObjective {
            anytime: vec![task(0, "B5"), task(2, "B8")],
            ..TaskObjective::default()
        };
        let expected = TaskObjective {
            anytime: vec![task(2, "B8")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Updated(Objective::Task(expected)));
    }

    #[test]
    fn test_absolute_out_of_order_fails() {
        // The first absolute is still pending when the second one's card
        // shows up.
        let objective = TaskObjective {
            absolute: vec![task(0, "Y9"), task(0, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_absolutes_may_complete_together_in_listed_order() {
        let objective = TaskObjective {
            absolute: vec![task(0, "B3"), task(0, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Success);
    }

    #[test]
    fn test_relative_blocked_by_pending_absolute() {
        let objective = TaskObjective {
            absolute: vec![task(0, "Y9")],
            relative: vec![task(0, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_relative_out_of_order_fails() {
        let objective = TaskObjective {
            relative: vec![task(0, "Y9"), task(0, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_relative_completes_once_absolutes_are_done() {
        let objective = TaskObjective {
            relative: vec![task(0, "B5"), task(1, "Y9")],
            ..TaskObjective::default()
        };
        let expected = TaskObjective {
            relative: vec![task(1, "Y9")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Updated(Objective::Task(expected)));
    }

    #[test]
    fn test_anytime_blocked_by_pending_absolute() {
        let objective = TaskObjective {
            absolute: vec![task(0, "Y9")],
            anytime: vec![task(0, "B5")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_anytime_may_complete_while_relative_pending() {
        let objective = TaskObjective {
            relative: vec![task(1, "Y9")],
            anytime: vec![task(0, "B5")],
            ..TaskObjective::default()
        };
        let expected = TaskObjective {
            relative: vec![task(1, "Y9")],
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Updated(Objective::Task(expected)));
    }

    #[test]
    fn test_last_task_with_others_remaining_fails() {
        let objective = TaskObjective {
            anytime: vec![task(0, "Y9")],
            last: Some(task(0, "B5")),
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_last_task_alone_succeeds() {
        let objective = TaskObjective {
            last: Some(task(0, "B5")),
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Success);
    }

    #[test]
    fn test_last_task_wrong_taker_fails() {
        let objective = TaskObjective {
            last: Some(task(2, "B5")),
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(outcome, ObjectiveOutcome::Failure);
    }

    #[test]
    fn test_last_task_is_retained_until_played() {
        let objective = TaskObjective {
            last: Some(task(0, "R4")),
            ..TaskObjective::default()
        };
        let outcome = objective.apply_play(&cards(&["B3", "G7", "B5"]), 0);
        assert_eq!(
            outcome,
            ObjectiveOutcome::Updated(Objective::Task(objective))
        );
    }

    #[test]
    fn test_empty_objective_is_immediate_success() {
        let objective = TaskObjective::default();
        let outcome = objective.apply_play(&[Card::new(Suit::Blue, 1)], 0);
        assert_eq!(outcome, ObjectiveOutcome::Success);
    }
}

//! Wire format of the solve endpoint and its validation. Every
//! malformation is rejected here, before the search begins; inside the
//! search, objective failure is a normal pruning signal and never an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

use crate::game::card::Card;
use crate::game::hand::Hand;
use crate::game::trick::winner_index;

use super::objective::{Objective, Task, TaskObjective};
use super::plays::Play;
use super::SearchState;

/// Scheduling discipline a task carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Absolute,
    Relative,
    Anytime,
    Last,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskType::Absolute => write!(f, "absolute"),
            TaskType::Relative => write!(f, "relative"),
            TaskType::Anytime => write!(f, "anytime"),
            TaskType::Last => write!(f, "last"),
        }
    }
}

/// One task line of a solve request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskSpec {
    /// Scheduling discipline: "absolute", "relative", "anytime" or "last"
    pub task_type: TaskType,
    /// In-bucket position for absolute/relative tasks, smallest first
    pub order: u32,
    /// Card code the task is about (e.g. "B3")
    pub card: String,
    /// Player who must win the trick containing the card
    pub player_num: usize,
}

/// A full deal plus objectives, as posted to the solve endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SolveRequest {
    /// One array of card codes per player, all the same length
    pub hands: Vec<Vec<String>>,
    /// Task objectives to satisfy
    pub tasks: Vec<TaskSpec>,
    /// Player leading the first trick
    pub curr_leader: usize,
}

/// One witness trick on the wire: who led and the cards in leader-first order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WitnessTrick {
    pub leader: usize,
    pub cards: Vec<String>,
}

/// Verdict returned by the solve endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SolveResponse {
    /// Did a witness exist?
    pub success: bool,
    /// Satisfiability verdict, mirrors `success` (kept for schema compatibility)
    pub result: bool,
    /// Wall time spent searching, in milliseconds
    pub duration: u64,
    /// Witness tricks when the deal is solvable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<WitnessTrick>>,
}

/// Ways a solve request can be malformed
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0}")]
    BadCard(String),
    #[error("duplicate card {0} in the deal")]
    DuplicateCard(Card),
    #[error("hands must all have the same length")]
    UnevenHands,
    #[error("curr_leader {0} is out of range")]
    LeaderOutOfRange(usize),
    #[error("task player {0} is out of range")]
    PlayerOutOfRange(usize),
    #[error("task card {0} is not in any hand")]
    UnknownTaskCard(Card),
    #[error("duplicate {0} task order {1}")]
    DuplicateOrder(TaskType, u32),
    #[error("more than one last task")]
    DuplicateLastTask,
}

/// Validate a wire request into a search state
pub fn build_state(request: &SolveRequest) -> Result<SearchState, InputError> {
    let mut hands = Vec::with_capacity(request.hands.len());
    for codes in &request.hands {
        hands.push(Hand::from_codes(codes).map_err(InputError::BadCard)?);
    }

    if let Some(first) = hands.first() {
        if hands.iter().any(|hand| hand.len() != first.len()) {
            return Err(InputError::UnevenHands);
        }
    }

    let mut seen: Vec<Card> = Vec::new();
    for hand in &hands {
        for card in &hand.cards {
            if seen.contains(card) {
                return Err(InputError::DuplicateCard(*card));
            }
            seen.push(*card);
        }
    }

    if request.curr_leader >= hands.len() {
        return Err(InputError::LeaderOutOfRange(request.curr_leader));
    }

    let objective = build_objective(&request.tasks, &hands)?;

    Ok(SearchState {
        hands,
        objectives: vec![Objective::Task(objective)],
        leader: request.curr_leader,
    })
}

/// Sort the ordered buckets by their wire order and reject order ties
fn build_objective(specs: &[TaskSpec], hands: &[Hand]) -> Result<TaskObjective, InputError> {
    let mut absolute: Vec<(u32, Task)> = Vec::new();
    let mut relative: Vec<(u32, Task)> = Vec::new();
    let mut objective = TaskObjective::default();

    for spec in specs {
        let card = Card::from_code(&spec.card).map_err(InputError::BadCard)?;
        if spec.player_num >= hands.len() {
            return Err(InputError::PlayerOutOfRange(spec.player_num));
        }
        if !hands.iter().any(|hand| hand.has_card(&card)) {
            return Err(InputError::UnknownTaskCard(card));
        }
        let task = Task {
            player: spec.player_num,
            card,
        };

        match spec.task_type {
            TaskType::Absolute => {
                if absolute.iter().any(|(order, _)| *order == spec.order) {
                    return Err(InputError::DuplicateOrder(TaskType::Absolute, spec.order));
                }
                absolute.push((spec.order, task));
            }
            TaskType::Relative => {
                if relative.iter().any(|(order, _)| *order == spec.order) {
                    return Err(InputError::DuplicateOrder(TaskType::Relative, spec.order));
                }
                relative.push((spec.order, task));
            }
            TaskType::Anytime => objective.anytime.push(task),
            TaskType::Last => {
                if objective.last.is_some() {
                    return Err(InputError::DuplicateLastTask);
                }
                objective.last = Some(task);
            }
        }
    }

    absolute.sort_by_key(|(order, _)| *order);
    relative.sort_by_key(|(order, _)| *order);
    objective.absolute = absolute.into_iter().map(|(_, task)| task).collect();
    objective.relative = relative.into_iter().map(|(_, task)| task).collect();
    Ok(objective)
}

/// Serialize a witness for the wire, following the winner-leads-next chain
pub fn witness_to_wire(witness: &[Play], start_leader: usize, player_count: usize) -> Vec<WitnessTrick> {
    let mut leader = start_leader;
    let mut tricks = Vec::with_capacity(witness.len());
    for play in witness {
        let cards: Vec<Card> = play.iter().map(|turn| turn.card).collect();
        tricks.push(WitnessTrick {
            leader,
            cards: cards.iter().map(|card| card.code()).collect(),
        });
        if let Some(offset) = winner_index(&cards) {
            leader = (leader + offset) % player_count;
        }
    }
    tricks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|code| code.to_string()).collect()
    }

    fn request() -> SolveRequest {
        SolveRequest {
            hands: vec![
                codes(&["B7", "Y5"]),
                codes(&["B2", "M7"]),
                codes(&["Y9", "M6"]),
                codes(&["B3", "M3"]),
            ],
            tasks: vec![TaskSpec {
                task_type: TaskType::Anytime,
                order: 0,
                card: "M3".to_string(),
                player_num: 2,
            }],
            curr_leader: 0,
        }
    }

    #[test]
    fn test_good_request_builds() {
        let state = build_state(&request()).unwrap();
        assert_eq!(state.hands.len(), 4);
        assert_eq!(state.leader, 0);
        let Objective::Task(objective) = &state.objectives[0];
        assert_eq!(objective.anytime.len(), 1);
        assert_eq!(objective.anytime[0].player, 2);
    }

    #[test]
    fn test_ordered_buckets_are_sorted_by_order() {
        let mut req = request();
        req.tasks = vec![
            TaskSpec {
                task_type: TaskType::Absolute,
                order: 2,
                card: "M3".to_string(),
                player_num: 0,
            },
            TaskSpec {
                task_type: TaskType::Absolute,
                order: 1,
                card: "B3".to_string(),
                player_num: 1,
            },
        ];
        let state = build_state(&req).unwrap();
        let Objective::Task(objective) = &state.objectives[0];
        assert_eq!(objective.absolute[0].card.code(), "B3");
        assert_eq!(objective.absolute[1].card.code(), "M3");
    }

    #[test]
    fn test_bad_card_code_rejected() {
        let mut req = request();
        req.hands[0][0] = "Q7".to_string();
        assert!(matches!(build_state(&req), Err(InputError::BadCard(_))));
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let mut req = request();
        req.hands[1][0] = "B7".to_string();
        assert!(matches!(
            build_state(&req),
            Err(InputError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_uneven_hands_rejected() {
        let mut req = request();
        req.hands[3] = codes(&["B3"]);
        assert!(matches!(build_state(&req), Err(InputError::UnevenHands)));
    }

    #[test]
    fn test_leader_out_of_range_rejected() {
        let mut req = request();
        req.curr_leader = 4;
        assert!(matches!(
            build_state(&req),
            Err(InputError::LeaderOutOfRange(4))
        ));
    }

    #[test]
    fn test_task_player_out_of_range_rejected() {
        let mut req = request();
        req.tasks[0].player_num = 9;
        assert!(matches!(
            build_state(&req),
            Err(InputError::PlayerOutOfRange(9))
        ));
    }

    #[test]
    fn test_task_card_missing_from_deal_rejected() {
        let mut req = request();
        req.tasks[0].card = "G1".to_string();
        assert!(matches!(
            build_state(&req),
            Err(InputError::UnknownTaskCard(_))
        ));
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let mut req = request();
        req.tasks = vec![
            TaskSpec {
                task_type: TaskType::Relative,
                order: 1,
                card: "M3".to_string(),
                player_num: 0,
            },
            TaskSpec {
                task_type: TaskType::Relative,
                order: 1,
                card: "B3".to_string(),
                player_num: 1,
            },
        ];
        assert!(matches!(
            build_state(&req),
            Err(InputError::DuplicateOrder(TaskType::Relative, 1))
        ));
    }

    #[test]
    fn test_second_last_task_rejected() {
        let mut req = request();
        req.tasks = vec![
            TaskSpec {
                task_type: TaskType::Last,
                order: 0,
                card: "M3".to_string(),
                player_num: 0,
            },
            TaskSpec {
                task_type: TaskType::Last,
                order: 0,
                card: "B3".to_string(),
                player_num: 1,
            },
        ];
        assert!(matches!(
            build_state(&req),
            Err(InputError::DuplicateLastTask)
        ));
    }

    #[test]
    fn test_unknown_task_type_rejected_by_serde() {
        let json = r#"{"task_type":"bonus","order":0,"card":"B3","player_num":0}"#;
        assert!(serde_json::from_str::<TaskSpec>(json).is_err());
    }

    #[test]
    fn test_witness_to_wire_follows_winner_chain() {
        use crate::game::hand::Hand;
        use crate::solver::plays::Turn;

        let card = |code: &str| Card::from_code(code).unwrap();
        // Leader 0 plays B4, seat 1 takes it with B9 and leads the next trick.
        let witness = vec![
            vec![
                Turn {
                    card: card("B4"),
                    remaining: Hand::new(vec![card("G2")]),
                },
                Turn {
                    card: card("B9"),
                    remaining: Hand::new(vec![card("Y1")]),
                },
            ],
            vec![
                Turn {
                    card: card("Y1"),
                    remaining: Hand::default(),
                },
                Turn {
                    card: card("G2"),
                    remaining: Hand::default(),
                },
            ],
        ];
        let tricks = witness_to_wire(&witness, 0, 2);
        assert_eq!(tricks[0].leader, 0);
        assert_eq!(tricks[0].cards, vec!["B4", "B9"]);
        assert_eq!(tricks[1].leader, 1);
        assert_eq!(tricks[1].cards, vec!["Y1", "G2"]);
    }
}

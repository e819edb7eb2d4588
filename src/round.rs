//! Round bookkeeping for the editor UI: who holds what, the objective
//! list, the trick grid, and past solver verdicts. A single round lives in
//! the shared application state and every mutation republishes a snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::game::card::{Card, Suit};
use crate::game::hand::Hand;
use crate::game::trick::winner_index;
use crate::solver::input::{SolveRequest, TaskSpec, TaskType};

pub const PLAYER_COUNT: usize = 4;

/// One seat at the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub name: String,
    pub hand: Hand,
}

/// An objective as edited in the UI; card and player may still be unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub order: u32,
    pub card: Option<Card>,
    #[serde(rename = "playerNum")]
    pub player_num: Option<usize>,
}

/// The trick grid: one optional card per seat plus derived bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTrick {
    pub turns: Vec<Option<Card>>,
    pub lead_player_num: usize,
    pub winner_player_num: Option<usize>,
    pub next_turn_player_num: Option<usize>,
}

impl RoundTrick {
    pub fn new(lead_player_num: usize) -> Self {
        Self {
            turns: vec![None; PLAYER_COUNT],
            lead_player_num,
            winner_player_num: None,
            next_turn_player_num: None,
        }
    }
}

/// One solver verdict shown on the solver page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRecord {
    pub id: u64,
    pub success: bool,
    pub result: bool,
    pub duration: u64,
}

/// The editable round state
#[derive(Debug, Clone)]
pub struct Round {
    next_task_id: u64,
    pub players: Vec<PlayerSlot>,
    pub objectives: BTreeMap<u64, TaskEntry>,
    pub tricks: Vec<RoundTrick>,
    pub solves: Vec<SolveRecord>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        let players = (0..PLAYER_COUNT)
            .map(|num| PlayerSlot {
                name: format!("Player {}", num + 1),
                hand: Hand::new(vec![Card::new(
                    [Suit::Blue, Suit::Yellow, Suit::Magenta, Suit::Green][num],
                    num as u8 + 1,
                )]),
            })
            .collect();

        Self {
            next_task_id: 1,
            players,
            objectives: BTreeMap::new(),
            tricks: vec![RoundTrick::new(0)],
            solves: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Round::new();
    }

    pub fn set_player_name(&mut self, player_num: usize, name: String) -> Result<(), String> {
        let player = self
            .players
            .get_mut(player_num)
            .ok_or_else(|| "Bad player number".to_string())?;
        player.name = name;
        Ok(())
    }

    pub fn set_player_hand(&mut self, player_num: usize, cards: Vec<Card>) -> Result<(), String> {
        if cards.iter().any(|card| !card.is_legal()) {
            return Err("Bad card value".to_string());
        }
        let player = self
            .players
            .get_mut(player_num)
            .ok_or_else(|| "Bad player number".to_string())?;
        player.hand = Hand::new(cards);
        Ok(())
    }

    /// Next valid in-bucket order for an ordered objective (current max + 1)
    pub fn next_order(&self, task_type: TaskType) -> u32 {
        1 + self
            .objectives
            .values()
            .filter(|entry| entry.task_type == task_type)
            .map(|entry| entry.order)
            .max()
            .unwrap_or(0)
    }

    pub fn add_objective(
        &mut self,
        task_type: TaskType,
        order: u32,
        card: Option<Card>,
        player_num: Option<usize>,
    ) -> Result<u64, String> {
        match task_type {
            TaskType::Absolute | TaskType::Relative => {
                if order != self.next_order(task_type) {
                    return Err("Bad objective order".to_string());
                }
            }
            TaskType::Anytime | TaskType::Last => {
                if order != 0 {
                    return Err("Bad objective order".to_string());
                }
            }
        }
        if let Some(card) = &card {
            if !card.is_legal() {
                return Err("Bad card value".to_string());
            }
        }
        if let Some(player_num) = player_num {
            if player_num >= self.players.len() {
                return Err("Bad player number".to_string());
            }
        }

        let id = self.next_task_id;
        self.next_task_id += 1;
        self.objectives.insert(
            id,
            TaskEntry {
                task_type,
                order,
                card,
                player_num,
            },
        );
        Ok(id)
    }

    /// Remove an objective; later ordered tasks in the same bucket shift
    /// down to close the gap.
    pub fn remove_objective(&mut self, id: u64) -> Result<(), String> {
        let removed = self
            .objectives
            .remove(&id)
            .ok_or_else(|| "Bad task id".to_string())?;
        if matches!(removed.task_type, TaskType::Absolute | TaskType::Relative) {
            for entry in self.objectives.values_mut() {
                if entry.task_type == removed.task_type && entry.order > removed.order {
                    entry.order -= 1;
                }
            }
        }
        Ok(())
    }

    pub fn set_objective_card(&mut self, id: u64, card: Card) -> Result<(), String> {
        if !card.is_legal() {
            return Err("Bad card value".to_string());
        }
        let entry = self
            .objectives
            .get_mut(&id)
            .ok_or_else(|| "Bad task id".to_string())?;
        entry.card = Some(card);
        Ok(())
    }

    pub fn set_objective_player(&mut self, id: u64, player_num: usize) -> Result<(), String> {
        if player_num >= self.players.len() {
            return Err("Bad player number".to_string());
        }
        let entry = self
            .objectives
            .get_mut(&id)
            .ok_or_else(|| "Bad task id".to_string())?;
        entry.player_num = Some(player_num);
        Ok(())
    }

    /// Record a card into the trick grid and recompute who plays next, or
    /// the winner once the trick is full.
    pub fn set_trick_turn_card(
        &mut self,
        trick_index: usize,
        turn_index: usize,
        card: Card,
    ) -> Result<(), String> {
        if !card.is_legal() {
            return Err("Bad card value".to_string());
        }
        let trick = self
            .tricks
            .get_mut(trick_index)
            .ok_or_else(|| "Bad trick index".to_string())?;
        let turn = trick
            .turns
            .get_mut(turn_index)
            .ok_or_else(|| "Bad turn index".to_string())?;
        *turn = Some(card);

        match trick.turns.iter().position(|turn| turn.is_none()) {
            Some(next) => {
                trick.next_turn_player_num = Some(next);
                trick.winner_player_num = None;
            }
            None => {
                trick.next_turn_player_num = None;
                let cards: Vec<Card> = trick.turns.iter().flatten().copied().collect();
                trick.winner_player_num = winner_index(&cards);
            }
        }
        Ok(())
    }

    pub fn add_solve(&mut self, record: SolveRecord) {
        self.solves.push(record);
    }

    /// The current round as a solve request, or why it is not solvable yet
    pub fn solver_input(&self) -> Result<SolveRequest, String> {
        let mut tasks = Vec::with_capacity(self.objectives.len());
        for entry in self.objectives.values() {
            let card = entry
                .card
                .ok_or_else(|| "Objective has no card".to_string())?;
            let player_num = entry
                .player_num
                .ok_or_else(|| "Objective has no player".to_string())?;
            tasks.push(TaskSpec {
                task_type: entry.task_type,
                order: entry.order,
                card: card.code(),
                player_num,
            });
        }

        let curr_leader = self
            .tricks
            .last()
            .map(|trick| trick.lead_player_num)
            .unwrap_or(0);

        Ok(SolveRequest {
            hands: self.players.iter().map(|p| p.hand.to_codes()).collect(),
            tasks,
            curr_leader,
        })
    }

    fn player_json(&self, player_num: usize) -> Value {
        let player = &self.players[player_num];
        json!({
            "num": player_num,
            "name": &player.name,
            "isCommander": player.hand.has_card(&Card::new(Suit::Rocket, 4)),
        })
    }

    fn task_json(&self, id: u64, entry: &TaskEntry) -> Value {
        json!({
            "id": id,
            "type": entry.task_type,
            "order": entry.order,
            "card": entry.card,
            "player": entry.player_num.map(|num| self.player_json(num)),
        })
    }

    fn tricks_json(&self) -> Value {
        json!(self
            .tricks
            .iter()
            .map(|trick| json!({
                "turns": trick
                    .turns
                    .iter()
                    .enumerate()
                    .map(|(player_num, card)| json!({
                        "player": self.player_json(player_num),
                        "card": card,
                        "isLeader": player_num == trick.lead_player_num,
                        "isWinner": Some(player_num) == trick.winner_player_num,
                        "isNextToPlay": Some(player_num) == trick.next_turn_player_num,
                    }))
                    .collect::<Vec<_>>(),
            }))
            .collect::<Vec<_>>())
    }

    /// Full snapshot for the UI and the WebSocket feed
    pub fn to_appstate(&self) -> Value {
        json!({
            "handPage": {
                "heldCards": self.players.iter().map(|p| &p.hand).collect::<Vec<_>>(),
            },
            "objectivePage": {
                "tasks": self
                    .objectives
                    .iter()
                    .map(|(id, entry)| self.task_json(*id, entry))
                    .collect::<Vec<_>>(),
                "nextAbsolute": self.next_order(TaskType::Absolute),
                "nextRelative": self.next_order(TaskType::Relative),
                "haveLast": self
                    .objectives
                    .values()
                    .any(|entry| entry.task_type == TaskType::Last),
                "players": (0..self.players.len())
                    .map(|num| self.player_json(num))
                    .collect::<Vec<_>>(),
            },
            "tricksPage": {
                "tricks": self.tricks_json(),
            },
            "controlPanel": {
                "players": (0..self.players.len())
                    .map(|num| json!({
                        "player": self.player_json(num),
                        "hand": &self.players[num].hand,
                        "tasks": self
                            .objectives
                            .iter()
                            .filter(|(_, entry)| entry.player_num == Some(num))
                            .map(|(id, entry)| self.task_json(*id, entry))
                            .collect::<Vec<_>>(),
                    }))
                    .collect::<Vec<_>>(),
                "tricks": self.tricks_json(),
            },
            "solverPage": {
                "solves": &self.solves,
            },
        })
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::game::card::Card;
use crate::solver::input::TaskType;

/// Standard error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Optional additional details about the error (can be null)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Plain acknowledgement for editor mutations
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Operation success message
    pub message: String,
}

/// Request to rename a player
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetNameRequest {
    pub name: String,
}

/// Request to replace a player's hand
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetHandRequest {
    /// The full replacement hand as card objects
    pub cards: Vec<Card>,
}

/// Request to add an objective to the round
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddObjectiveRequest {
    /// Scheduling discipline of the new objective
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// In-bucket position; must be the next free slot for ordered kinds,
    /// 0 otherwise
    pub order: u32,
    /// Target card, may be filled in later
    #[serde(default)]
    pub card: Option<Card>,
    /// Designated winner, may be filled in later
    #[serde(default, rename = "playerNum")]
    pub player_num: Option<usize>,
}

/// Request to point an objective at a card
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetObjectiveCardRequest {
    pub card: Card,
}

/// Request to assign an objective's designated winner
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetObjectivePlayerRequest {
    #[serde(rename = "playerNum")]
    pub player_num: usize,
}

/// Request to record a card in the trick grid
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetTrickCardRequest {
    pub card: Card,
}

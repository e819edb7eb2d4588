use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::api::schemas::{
    AddObjectiveRequest, ErrorResponse, SetHandRequest, SetNameRequest, SetObjectiveCardRequest,
    SetObjectivePlayerRequest, SetTrickCardRequest, SuccessResponse,
};
use crate::state::SharedState;

/// Editor mutations share one shape: apply the change under the write
/// lock, then either broadcast the new snapshot or report a 400.
fn respond_after_edit(state: &SharedState, result: Result<Value, String>) -> Response {
    match result {
        Ok(snapshot) => {
            state.publish(snapshot);
            (
                StatusCode::OK,
                Json(SuccessResponse {
                    message: "Success".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e,
                message: None,
            }),
        )
            .into_response(),
    }
}

/// Rename a player
#[utoipa::path(
    put,
    path = "/api/player/{player_num}/name",
    tag = "Round Editor",
    params(("player_num" = usize, Path, description = "Player position (0-3)")),
    request_body = SetNameRequest,
    responses(
        (status = 200, description = "Name updated", body = SuccessResponse),
        (status = 400, description = "Bad player number", body = ErrorResponse)
    )
)]
pub async fn set_player_name_handler(
    State(state): State<SharedState>,
    Path(player_num): Path<usize>,
    Json(request): Json<SetNameRequest>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round
            .set_player_name(player_num, request.name)
            .map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

/// Replace a player's hand
#[utoipa::path(
    put,
    path = "/api/player/{player_num}/hand",
    tag = "Round Editor",
    params(("player_num" = usize, Path, description = "Player position (0-3)")),
    request_body = SetHandRequest,
    responses(
        (status = 200, description = "Hand updated", body = SuccessResponse),
        (status = 400, description = "Bad player number or card", body = ErrorResponse)
    )
)]
pub async fn set_player_hand_handler(
    State(state): State<SharedState>,
    Path(player_num): Path<usize>,
    Json(request): Json<SetHandRequest>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round
            .set_player_hand(player_num, request.cards)
            .map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

/// Add an objective to the round
#[utoipa::path(
    post,
    path = "/api/objective/add",
    tag = "Round Editor",
    request_body = AddObjectiveRequest,
    responses(
        (status = 200, description = "Objective added", body = SuccessResponse),
        (status = 400, description = "Bad objective", body = ErrorResponse)
    )
)]
pub async fn add_objective_handler(
    State(state): State<SharedState>,
    Json(request): Json<AddObjectiveRequest>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round
            .add_objective(
                request.task_type,
                request.order,
                request.card,
                request.player_num,
            )
            .map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

/// Remove an objective
#[utoipa::path(
    delete,
    path = "/api/objective/{id}",
    tag = "Round Editor",
    params(("id" = u64, Path, description = "Objective id")),
    responses(
        (status = 200, description = "Objective removed", body = SuccessResponse),
        (status = 400, description = "Bad task id", body = ErrorResponse)
    )
)]
pub async fn remove_objective_handler(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round.remove_objective(id).map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

/// Point an objective at a card
#[utoipa::path(
    put,
    path = "/api/objective/{id}/card",
    tag = "Round Editor",
    params(("id" = u64, Path, description = "Objective id")),
    request_body = SetObjectiveCardRequest,
    responses(
        (status = 200, description = "Objective updated", body = SuccessResponse),
        (status = 400, description = "Bad task id or card", body = ErrorResponse)
    )
)]
pub async fn set_objective_card_handler(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<SetObjectiveCardRequest>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round
            .set_objective_card(id, request.card)
            .map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

/// Assign an objective's designated winner
#[utoipa::path(
    put,
    path = "/api/objective/{id}/player",
    tag = "Round Editor",
    params(("id" = u64, Path, description = "Objective id")),
    request_body = SetObjectivePlayerRequest,
    responses(
        (status = 200, description = "Objective updated", body = SuccessResponse),
        (status = 400, description = "Bad task id or player", body = ErrorResponse)
    )
)]
pub async fn set_objective_player_handler(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<SetObjectivePlayerRequest>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round
            .set_objective_player(id, request.player_num)
            .map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

/// Record a card in the trick grid
#[utoipa::path(
    put,
    path = "/api/trick/{trick_index}/{turn_index}/card",
    tag = "Round Editor",
    params(
        ("trick_index" = usize, Path, description = "Trick number"),
        ("turn_index" = usize, Path, description = "Seat within the trick (0-3)")
    ),
    request_body = SetTrickCardRequest,
    responses(
        (status = 200, description = "Trick updated", body = SuccessResponse),
        (status = 400, description = "Bad index or card", body = ErrorResponse)
    )
)]
pub async fn set_trick_card_handler(
    State(state): State<SharedState>,
    Path((trick_index, turn_index)): Path<(usize, usize)>,
    Json(request): Json<SetTrickCardRequest>,
) -> Response {
    let result = {
        let mut round = state.round.write().await;
        round
            .set_trick_turn_card(trick_index, turn_index, request.card)
            .map(|_| round.to_appstate())
    };
    respond_after_edit(&state, result)
}

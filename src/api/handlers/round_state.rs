use std::sync::atomic::Ordering;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::round::SolveRecord;
use crate::solver::input::build_state;
use crate::state::SharedState;

use super::solve::run_search;

/// Get the full application state snapshot
///
/// Returns the round exactly as the UI renders it: hands, objectives, the
/// trick grid, and past solver verdicts.
#[utoipa::path(
    get,
    path = "/api/appstate",
    tag = "Round Editor",
    responses(
        (status = 200, description = "Current round snapshot", content_type = "application/json")
    )
)]
pub async fn get_appstate_handler(State(state): State<SharedState>) -> Response {
    let snapshot = state.round.read().await.to_appstate();
    (StatusCode::OK, Json(snapshot)).into_response()
}

/// Reset the round to its initial state
#[utoipa::path(
    post,
    path = "/api/reset",
    tag = "Round Editor",
    responses(
        (status = 200, description = "Round reset", body = SuccessResponse)
    )
)]
pub async fn reset_handler(State(state): State<SharedState>) -> Response {
    let snapshot = {
        let mut round = state.round.write().await;
        round.reset();
        round.to_appstate()
    };
    state.publish(snapshot);
    (
        StatusCode::OK,
        Json(SuccessResponse {
            message: "Success".to_string(),
        }),
    )
        .into_response()
}

/// Submit the current round to the solver
///
/// Converts the round into a solve request and runs the search in the
/// background; the verdict lands on the solver page and is broadcast to
/// WebSocket clients. Responds immediately.
#[utoipa::path(
    post,
    path = "/api/solve",
    tag = "Round Editor",
    responses(
        (status = 200, description = "Solver started", body = SuccessResponse),
        (status = 400, description = "Round is not solvable yet", body = ErrorResponse)
    )
)]
pub async fn solve_round_handler(State(state): State<SharedState>) -> Response {
    let request = {
        let round = state.round.read().await;
        round.solver_input()
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e,
                    message: None,
                }),
            )
                .into_response();
        }
    };

    let search = match build_state(&request) {
        Ok(search) => search,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Round is not a valid solver input".to_string(),
                    message: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    };

    let id = state.next_solve_id.fetch_add(1, Ordering::SeqCst);
    let budget = state.solve_timeout;
    let worker_state = state.clone();
    tokio::spawn(async move {
        let record = match run_search(search, budget).await {
            Ok(response) => SolveRecord {
                id,
                success: response.success,
                result: response.result,
                duration: response.duration,
            },
            // Timeouts and crashes land as an unsuccessful verdict with
            // the full budget as the duration.
            Err(_) => SolveRecord {
                id,
                success: false,
                result: false,
                duration: budget.as_millis() as u64,
            },
        };
        let snapshot = {
            let mut round = worker_state.round.write().await;
            round.add_solve(record);
            round.to_appstate()
        };
        worker_state.publish(snapshot);
    });

    (
        StatusCode::OK,
        Json(SuccessResponse {
            message: "Success".to_string(),
        }),
    )
        .into_response()
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::schemas::ErrorResponse;
use crate::solver::input::{build_state, witness_to_wire, SolveRequest, SolveResponse};
use crate::solver::{self, SearchState};
use crate::state::SharedState;

/// Why a search run produced no verdict
pub enum SearchError {
    Timeout,
    Crashed,
}

/// Solve a deal
///
/// Accepts a full deal plus task objectives and decides whether some legal
/// play sequence satisfies every task. Returns the verdict and, when the
/// deal is solvable, a witness play sequence.
#[utoipa::path(
    post,
    path = "/solve",
    tag = "Solver",
    request_body = SolveRequest,
    responses(
        (status = 200, description = "Search finished", body = SolveResponse),
        (status = 400, description = "Malformed solve request", body = ErrorResponse),
        (status = 504, description = "Search timed out", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn solve_handler(
    State(state): State<SharedState>,
    Json(request): Json<SolveRequest>,
) -> Response {
    let search = match build_state(&request) {
        Ok(search) => search,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Malformed solve request".to_string(),
                    message: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    };

    match run_search(search, state.solve_timeout).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(SearchError::Timeout) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(ErrorResponse {
                error: "Solver timed out".to_string(),
                message: None,
            }),
        )
            .into_response(),
        Err(SearchError::Crashed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Solver failed".to_string(),
                message: None,
            }),
        )
            .into_response(),
    }
}

/// Run the solver on the blocking pool under a wall-clock budget. On
/// timeout the cancel flag is raised so the workers wind down promptly.
pub async fn run_search(
    search: SearchState,
    budget: Duration,
) -> Result<SolveResponse, SearchError> {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    let leader = search.leader;
    let player_count = search.hands.len();
    let started = Instant::now();

    let worker = tokio::task::spawn_blocking(move || solver::solve_with_cancel(&search, &flag));

    let witness = match tokio::time::timeout(budget, worker).await {
        Ok(Ok(witness)) => witness,
        Ok(Err(join_error)) => {
            tracing::error!(target: "solver", %join_error, "solver task failed");
            return Err(SearchError::Crashed);
        }
        Err(_) => {
            cancel.store(true, Ordering::Relaxed);
            return Err(SearchError::Timeout);
        }
    };

    let duration = started.elapsed().as_millis() as u64;
    let success = witness.is_some();
    tracing::info!(
        target: "solver",
        success,
        duration_ms = duration,
        "search finished"
    );

    Ok(SolveResponse {
        success,
        result: success,
        duration,
        witness: witness.map(|plays| witness_to_wire(&plays, leader, player_count)),
    })
}

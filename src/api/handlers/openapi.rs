use axum::response::IntoResponse;
use axum::Json;
use utoipa::OpenApi;

use crate::api::schemas::*;
use crate::game::card::{Card, Suit};
use crate::solver::input::{SolveRequest, SolveResponse, TaskSpec, TaskType, WitnessTrick};

/// OpenAPI specification for the Crew solver backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crew Solver Backend",
        version = "0.1.0",
        description = "Round editor and cooperative trick-taking solver for The Crew"
    ),
    paths(
        crate::api::handlers::solve::solve_handler,
        crate::api::handlers::round_state::get_appstate_handler,
        crate::api::handlers::round_state::reset_handler,
        crate::api::handlers::round_state::solve_round_handler,
        crate::api::handlers::round_edit::set_player_name_handler,
        crate::api::handlers::round_edit::set_player_hand_handler,
        crate::api::handlers::round_edit::add_objective_handler,
        crate::api::handlers::round_edit::remove_objective_handler,
        crate::api::handlers::round_edit::set_objective_card_handler,
        crate::api::handlers::round_edit::set_objective_player_handler,
        crate::api::handlers::round_edit::set_trick_card_handler,
        get_openapi_json
    ),
    components(schemas(
        ErrorResponse,
        SuccessResponse,
        SetNameRequest,
        SetHandRequest,
        AddObjectiveRequest,
        SetObjectiveCardRequest,
        SetObjectivePlayerRequest,
        SetTrickCardRequest,
        SolveRequest,
        SolveResponse,
        TaskSpec,
        TaskType,
        WitnessTrick,
        Card,
        Suit
    )),
    tags(
        (name = "Solver", description = "One-shot cooperative solver"),
        (name = "Round Editor", description = "Shared round bookkeeping for the UI"),
        (name = "Documentation", description = "API documentation endpoints")
    )
)]
pub struct ApiDoc;

/// Get OpenAPI specification in JSON format
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "Documentation",
    responses(
        (
            status = 200,
            description = "OpenAPI specification retrieved successfully",
            content_type = "application/json"
        )
    )
)]
pub async fn get_openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{openapi, round_edit, round_state, solve};
use crate::state::SharedState;
use crate::websocket;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .route("/openapi.json", get(openapi::get_openapi_json))
        .route("/solve", post(solve::solve_handler))
        .route("/ws", get(websocket::ws_handler))
        .route("/api/appstate", get(round_state::get_appstate_handler))
        .route("/api/reset", post(round_state::reset_handler))
        .route("/api/solve", post(round_state::solve_round_handler))
        .route(
            "/api/player/:player_num/name",
            put(round_edit::set_player_name_handler),
        )
        .route(
            "/api/player/:player_num/hand",
            put(round_edit::set_player_hand_handler),
        )
        .route("/api/objective/add", post(round_edit::add_objective_handler))
        .route(
            "/api/objective/:id",
            delete(round_edit::remove_objective_handler),
        )
        .route(
            "/api/objective/:id/card",
            put(round_edit::set_objective_card_handler),
        )
        .route(
            "/api/objective/:id/player",
            put(round_edit::set_objective_player_handler),
        )
        .route(
            "/api/trick/:trick_index/:turn_index/card",
            put(round_edit::set_trick_card_handler),
        )
        .with_state(state)
}

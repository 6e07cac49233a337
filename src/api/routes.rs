use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    matches::{report_match, reset_matches},
    players::{count_players, register_player, reset_players},
    standings::{get_pairings, get_standings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", post(register_player).delete(reset_players))
        .route("/api/players/count", get(count_players))
        .route("/api/matches", post(report_match).delete(reset_matches))
        .route("/api/standings", get(get_standings))
        .route("/api/pairings", get(get_pairings))
        .with_state(state)
}

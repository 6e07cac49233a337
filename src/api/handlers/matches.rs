use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{MatchResponse, ReportMatchRequest};
use super::{error_response, AppState};

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> impl IntoResponse {
    let result = state
        .service
        .report_match_in_round(request.winner_id, request.loser_id, request.round);

    match result {
        Ok(recorded) => (StatusCode::CREATED, Json(MatchResponse::from(recorded))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn reset_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.reset_matches() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::handlers::test_support::{send, test_router};

    #[tokio::test]
    async fn test_report_match() {
        let router = test_router();
        let (_, alice) = send(&router, "POST", "/api/players", Some(json!({ "name": "Alice" }))).await;
        let (_, bob) = send(&router, "POST", "/api/players", Some(json!({ "name": "Bob" }))).await;

        let request = json!({ "winnerId": alice["playerId"], "loserId": bob["playerId"], "round": 1 });
        let (status, body) = send(&router, "POST", "/api/matches", Some(request)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["winnerId"], alice["playerId"]);
        assert_eq!(body["round"], 1);
    }

    #[tokio::test]
    async fn test_self_match_is_bad_request() {
        let router = test_router();
        let (_, alice) = send(&router, "POST", "/api/players", Some(json!({ "name": "Alice" }))).await;

        let request = json!({ "winnerId": alice["playerId"], "loserId": alice["playerId"] });
        let (status, _) = send(&router, "POST", "/api/matches", Some(request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reset_matches() {
        let router = test_router();
        let (status, _) = send(&router, "DELETE", "/api/matches", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorResponse;
use crate::database::SqliteRepository;
use crate::errors::TournamentError;
use crate::services::tournament::TournamentService;

pub mod matches;
pub mod players;
pub mod standings;

pub struct AppState {
    pub service: TournamentService<SqliteRepository>,
}

impl AppState {
    pub fn new(service: TournamentService<SqliteRepository>) -> Self {
        Self { service }
    }
}

/// Bad input is the caller's problem (400), an odd roster blocks pairing
/// until someone registers or leaves (409), anything from storage is ours.
pub fn error_response(err: TournamentError) -> Response {
    let status = match &err {
        TournamentError::Validation(_) => StatusCode::BAD_REQUEST,
        TournamentError::OddPlayerCount(_) => StatusCode::CONFLICT,
        TournamentError::Storage(e) => {
            log::error!("Storage failure: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse { error: err.to_string() })).into_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::AppState;
    use crate::api::create_router;
    use crate::config::settings::PairingSettings;
    use crate::database::SqliteRepository;
    use crate::services::tournament::TournamentService;

    pub fn test_router() -> Router {
        let repository = SqliteRepository::open_in_memory().unwrap();
        let service = TournamentService::new(repository, PairingSettings::default());
        create_router(Arc::new(AppState::new(service)))
    }

    pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

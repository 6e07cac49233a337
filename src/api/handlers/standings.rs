use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PairingItem, PairingsResponse, StandingsResponse};
use super::{error_response, AppState};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.standings() {
        Ok(standings) => Json(StandingsResponse::from(standings)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_pairings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.swiss_pairings() {
        Ok(pairings) => Json(PairingsResponse {
            items: pairings.into_iter().map(PairingItem::from).collect(),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

//! Hooks for records written through the admin surface. They share the wire
//! shapes of the regular game and player records but dispatch under their own
//! categories.

use {
    crate::api::{AppState, ValidationErrorWrapper},
    axum::{
        Json,
        extract::State,
        response::{IntoResponse, Response},
    },
    model::record::{GameRecord, PlayerRecord},
    std::sync::Arc,
};

pub async fn before_write_game_record(
    State(state): State<Arc<AppState>>,
    Json(record): Json<GameRecord>,
) -> Response {
    match state.validator.before_write_admin_game_record(&record) {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn before_write_player_record(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PlayerRecord>,
) -> Response {
    match state.validator.before_write_admin_player_record(&record) {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

use {
    crate::api::{AppState, ValidationErrorWrapper},
    axum::{
        Json,
        extract::State,
        response::{IntoResponse, Response},
    },
    model::{
        record::{BulkPlayerBinaryRecords, PlayerBinaryRecord},
        verdict::BatchVerdict,
    },
    std::sync::Arc,
};

pub async fn before_write(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PlayerBinaryRecord>,
) -> Response {
    match state
        .validator
        .before_write_player_binary_record(&record)
        .await
    {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_read(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PlayerBinaryRecord>,
) -> Response {
    match state
        .validator
        .after_read_player_binary_record(&record)
        .await
    {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_bulk_read(
    State(state): State<Arc<AppState>>,
    Json(records): Json<BulkPlayerBinaryRecords>,
) -> Response {
    match state
        .validator
        .after_bulk_read_player_binary_record(&records.player_binary_records)
        .await
    {
        Ok(validation_results) => Json(BatchVerdict { validation_results }).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

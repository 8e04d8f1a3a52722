use {
    crate::api::{AppState, ValidationErrorWrapper},
    axum::{
        Json,
        extract::State,
        response::{IntoResponse, Response},
    },
    model::{
        record::{BulkPlayerRecords, PlayerRecord},
        verdict::BatchVerdict,
    },
    std::sync::Arc,
};

pub async fn before_write(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PlayerRecord>,
) -> Response {
    match state.validator.before_write_player_record(&record) {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_read(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PlayerRecord>,
) -> Response {
    match state.validator.after_read_player_record(&record) {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_bulk_read(
    State(state): State<Arc<AppState>>,
    Json(records): Json<BulkPlayerRecords>,
) -> Response {
    match state
        .validator
        .after_bulk_read_player_record(&records.player_records)
    {
        Ok(validation_results) => Json(BatchVerdict { validation_results }).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::api::{response_body, test_router},
        axum::{
            body::Body,
            http::{Request, StatusCode, header::CONTENT_TYPE},
        },
        serde_json::json,
        tower::ServiceExt,
    };

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn unsupported_weapon_type_fails_the_verdict() {
        let payload = json!({
            "userId": "user-1",
            "favouriteWeaponType": "BOW",
            "favouriteWeapon": "longbow",
        });
        let response = test_router()
            .oneshot(post(
                "/api/v1/player-records/before-write",
                json!({
                    "key": "favourite_weapon",
                    "userId": "user-1",
                    "payload": format!("0x{}", hex::encode(payload.to_string())),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(body["isSuccess"], json!(false));
        assert_eq!(body["userId"], json!("user-1"));
        assert_eq!(body["error"]["message"], json!("invalid weapon type"));
    }

    #[tokio::test]
    async fn read_hooks_echo_the_player() {
        let response = test_router()
            .oneshot(post(
                "/api/v1/player-records/after-read",
                json!({ "key": "progress", "userId": "user-1", "payload": "0x" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(
            body,
            json!({ "isSuccess": true, "key": "progress", "userId": "user-1" })
        );
    }
}

use {
    crate::api::{AppState, ValidationErrorWrapper},
    axum::{
        Json,
        extract::State,
        response::{IntoResponse, Response},
    },
    model::{
        record::{BulkGameRecords, GameRecord},
        verdict::BatchVerdict,
    },
    std::sync::Arc,
};

pub async fn before_write(
    State(state): State<Arc<AppState>>,
    Json(record): Json<GameRecord>,
) -> Response {
    match state.validator.before_write_game_record(&record) {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_read(
    State(state): State<Arc<AppState>>,
    Json(record): Json<GameRecord>,
) -> Response {
    match state.validator.after_read_game_record(&record) {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_bulk_read(
    State(state): State<Arc<AppState>>,
    Json(records): Json<BulkGameRecords>,
) -> Response {
    match state
        .validator
        .after_bulk_read_game_record(&records.game_records)
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

    fn hex_payload(payload: serde_json::Value) -> String {
        format!("0x{}", hex::encode(payload.to_string()))
    }

    #[tokio::test]
    async fn validation_failures_are_successful_calls() {
        let response = test_router()
            .oneshot(post(
                "/api/v1/game-records/before-write",
                json!({ "key": "region_1_map", "payload": hex_payload(json!({})) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(body["isSuccess"], json!(false));
        assert_eq!(body["error"]["code"], json!(1));
        assert_eq!(body["key"], json!("region_1_map"));
    }

    #[tokio::test]
    async fn unmatched_keys_pass() {
        let response = test_router()
            .oneshot(post(
                "/api/v1/game-records/before-write",
                json!({ "key": "inventory", "payload": hex_payload(json!({})) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(
            body,
            json!({ "isSuccess": true, "key": "inventory" })
        );
    }

    #[tokio::test]
    async fn undecodable_payload_is_a_bad_request() {
        let response = test_router()
            .oneshot(post(
                "/api/v1/game-records/before-write",
                json!({
                    "key": "region_1_map",
                    "payload": format!("0x{}", hex::encode("not json")),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(body["errorType"], json!("InvalidPayload"));
    }

    #[tokio::test]
    async fn bulk_read_returns_one_verdict_per_record_in_order() {
        let response = test_router()
            .oneshot(post(
                "/api/v1/game-records/after-bulk-read",
                json!({
                    "gameRecords": [
                        {
                            "key": "motd_daily_msg",
                            "payload": hex_payload(json!({ "availableOn": "1970-01-01T00:00:00Z" })),
                        },
                        {
                            "key": "event_daily_msg",
                            "payload": hex_payload(json!({ "availableOn": "9999-01-01T00:00:00Z" })),
                        },
                    ],
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        let results = body["validationResults"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["key"], json!("motd_daily_msg"));
        assert_eq!(results[0]["isSuccess"], json!(true));
        assert_eq!(results[1]["key"], json!("event_daily_msg"));
        assert_eq!(results[1]["error"]["code"], json!(2));
        assert_eq!(results[1]["error"]["message"], json!("not accessible yet"));
    }
}

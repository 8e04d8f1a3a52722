use {
    crate::api::{AppState, ValidationErrorWrapper},
    axum::{
        Json,
        extract::State,
        response::{IntoResponse, Response},
    },
    model::{
        record::{BulkGameBinaryRecords, GameBinaryRecord},
        verdict::BatchVerdict,
    },
    std::sync::Arc,
};

pub async fn before_write(
    State(state): State<Arc<AppState>>,
    Json(record): Json<GameBinaryRecord>,
) -> Response {
    match state.validator.before_write_game_binary_record(&record).await {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_read(
    State(state): State<Arc<AppState>>,
    Json(record): Json<GameBinaryRecord>,
) -> Response {
    match state.validator.after_read_game_binary_record(&record).await {
        Ok(verdict) => Json(verdict).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

pub async fn after_bulk_read(
    State(state): State<Arc<AppState>>,
    Json(records): Json<BulkGameBinaryRecords>,
) -> Response {
    match state
        .validator
        .after_bulk_read_game_binary_record(&records.game_binary_records)
        .await
    {
        Ok(validation_results) => Json(BatchVerdict { validation_results }).into_response(),
        Err(err) => ValidationErrorWrapper(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::api::{response_body, test_router_with},
        axum::{
            body::Body,
            http::{Request, StatusCode, header::CONTENT_TYPE},
        },
        serde_json::json,
        std::sync::Arc,
        tower::ServiceExt,
        validation::size_fetching::{MockBinarySizeFetching, SizeFetchError},
    };

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn banner_request() -> Request<Body> {
        post(
            "/api/v1/game-binary-records/before-write",
            json!({
                "key": "event_banner",
                "binaryInfo": {
                    "url": "https://cdn.example.com/banner.png",
                    "version": 1,
                    "updatedAt": "2023-09-01T10:30:00Z",
                },
            }),
        )
    }

    #[tokio::test]
    async fn oversized_banner_fails_the_verdict() {
        let mut size_fetcher = MockBinarySizeFetching::new();
        size_fetcher.expect_fetch_size().returning(|_| Ok(250_000));
        let response = test_router_with(Arc::new(size_fetcher))
            .oneshot(banner_request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(body["isSuccess"], json!(false));
        assert_eq!(
            body["error"]["message"],
            json!("maximum size for event banner is 100 kB")
        );
    }

    #[tokio::test]
    async fn unavailable_banner_size_is_a_gateway_error() {
        let mut size_fetcher = MockBinarySizeFetching::new();
        size_fetcher
            .expect_fetch_size()
            .returning(|_| Err(SizeFetchError::MissingContentLength));
        let response = test_router_with(Arc::new(size_fetcher))
            .oneshot(banner_request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value =
            serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(body["errorType"], json!("BinarySizeUnavailable"));
    }
}

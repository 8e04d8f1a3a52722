use {
    crate::{api, arguments::Arguments, http_client::HttpClientFactory},
    std::sync::Arc,
    validation::{Limits, RecordValidator, size_fetching::HttpSizeFetcher},
};

/// Assembles the validator and serves the API until the process is stopped.
pub async fn run(args: Arguments) {
    let http_factory = HttpClientFactory::new(&args);
    let size_fetcher = Arc::new(HttpSizeFetcher::new(http_factory.create()));
    let validator = Arc::new(RecordValidator::new(
        Limits {
            max_event_banner_size_in_kb: args.max_event_banner_size_in_kb,
        },
        size_fetcher,
    ));

    let app = api::handle_all_routes(validator);
    let listener = tokio::net::TcpListener::bind(args.bind_address)
        .await
        .expect("failed to bind API address");
    tracing::info!(address = %args.bind_address, "serving validation gateway");
    axum::serve(listener, app).await.unwrap();
}

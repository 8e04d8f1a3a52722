use {clap::Parser, gateway::arguments::Arguments};

#[tokio::main]
async fn main() {
    let args = Arguments::parse();
    observe::tracing::initialize(&args.log_filter, args.log_stderr_threshold);
    observe::metrics::setup_registry(Some("cloudsave_gateway".to_string()));
    tracing::info!("running validation gateway with validated arguments:\n{}", args);
    gateway::run(args).await;
}

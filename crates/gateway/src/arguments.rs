//! Command line arguments of the validation gateway.

use {
    std::{
        fmt::{self, Display, Formatter},
        net::SocketAddr,
        time::Duration,
    },
    tracing::level_filters::LevelFilter,
};

#[derive(clap::Parser)]
pub struct Arguments {
    #[clap(long, env, default_value = "warn,gateway=debug,validation=debug")]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    #[clap(long, env, default_value = "0.0.0.0:8080")]
    pub bind_address: SocketAddr,

    /// Default timeout for outgoing http requests.
    #[clap(
        long,
        env,
        default_value = "10s",
        value_parser = humantime::parse_duration,
    )]
    pub http_timeout: Duration,

    /// Maximum size of an event banner binary in kilobytes.
    #[clap(long, env, default_value = "100")]
    pub max_event_banner_size_in_kb: u64,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            bind_address,
            http_timeout,
            max_event_banner_size_in_kb,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "bind_address: {bind_address}")?;
        writeln!(f, "http_timeout: {http_timeout:?}")?;
        writeln!(
            f,
            "max_event_banner_size_in_kb: {max_event_banner_size_in_kb}"
        )?;
        Ok(())
    }
}

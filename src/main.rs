use anyhow::Context;
use clap::Parser;

use yt_relay_lib::config::AppConfig;
use yt_relay_lib::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    init_tracing(config.log_level);

    let addr = config.bind_addr();
    yt_relay_lib::run(config)
        .await
        .with_context(|| format!("server on {} failed", addr))
}

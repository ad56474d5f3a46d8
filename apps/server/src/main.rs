use anyhow::Context;
use corbas::domain::config::ApiConfig;
use corbas::kernel::config::load_config;
use corbas_logger::{LevelFilter, Logger};
use corbas_server::Server;
use std::str::FromStr;

#[corbas_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let level = LevelFilter::from_str(&cfg.logging.level)
        .with_context(|| format!("Invalid log level '{}'", cfg.logging.level))?;
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let builder = match &cfg.logging.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };
    let _log = match &cfg.logging.directory {
        Some(directory) => builder.path(directory).json(cfg.logging.json).init()?,
        None => builder.init()?,
    };

    Server::builder().config(cfg).build().await?.run().await
}

use crate::modules::{
    notifier::LogNotifier,
    output::{render_daily_problems, OutputFormat},
    session::EnvSession,
    utils::env_value,
};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use leetcode_list_libs::{
    daily::client::DEFAULT_GRAPHQL_ENDPOINT, list_daily_problems, GraphQLDailyClient,
};
use reqwest::Client;
use tokio::time::Duration;

#[derive(Debug, Args)]
pub struct DailyArgs {
    /// GraphQL endpoint to query
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

pub async fn run(args: DailyArgs) -> Result<()> {
    let endpoint = args
        .endpoint
        .or_else(|| env_value("LEETCODE_GRAPHQL_ENDPOINT"))
        .unwrap_or(String::from(DEFAULT_GRAPHQL_ENDPOINT));

    let client = Client::builder()
        .gzip(true)
        .timeout(Duration::from_secs(10))
        .build()?;
    let api = GraphQLDailyClient::with_client(&endpoint, client).with_context(|| {
        let message = format!("Invalid GraphQL endpoint {}.", endpoint);
        tracing::error!(message);
        message
    })?;

    let session = EnvSession::from_env();
    let today = Local::now().date_naive();
    let records = list_daily_problems(&session, &api, &LogNotifier, today).await;

    println!("{}", render_daily_problems(&records, args.format)?);
    Ok(())
}

use crate::modules::{
    executor::CliListingSource,
    notifier::LogNotifier,
    output::{render_problems, OutputFormat},
    session::EnvSession,
    utils::{env_flag, env_value},
};
use anyhow::{Context, Result};
use clap::Args;
use leetcode_list_libs::{list_problems, ListOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ProblemsArgs {
    /// Include locked problems
    #[arg(long)]
    show_locked: bool,
    /// Keep the titles translated by the endpoint
    #[arg(long)]
    translation: bool,
    /// JSON file holding the companies and tags tables
    #[arg(long)]
    metadata: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

pub async fn run(args: ProblemsArgs) -> Result<()> {
    let metadata_path: PathBuf = match args.metadata {
        Some(path) => path,
        None => env_value("LEETCODE_METADATA_PATH")
            .map(PathBuf::from)
            .with_context(|| {
                let message = "LEETCODE_METADATA_PATH must be configured.";
                tracing::error!(message);
                message
            })?,
    };
    let program = env_value("LEETCODE_CLI_PATH").unwrap_or(String::from("leetcode"));

    let options = ListOptions {
        show_locked: args.show_locked || env_flag("LEETCODE_SHOW_LOCKED"),
        use_endpoint_translation: args.translation
            || env_flag("LEETCODE_USE_ENDPOINT_TRANSLATION"),
    };

    let session = EnvSession::from_env();
    if let Some(user) = session.user() {
        tracing::info!("List problems for {}.", user);
    }
    let source = CliListingSource::new(program, metadata_path);
    let problems = list_problems(&session, &source, &LogNotifier, &options).await;

    println!("{}", render_problems(&problems, args.format)?);
    Ok(())
}

mod cmd;
mod modules;

use crate::cmd::{
    daily::{self, DailyArgs},
    problems::{self, ProblemsArgs},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, io, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "leetcode_list")]
#[command(about = "List LeetCode problems and daily challenges")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Problems(ProblemsArgs),
    Daily(DailyArgs),
}

fn main() {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .unwrap_or(LevelFilter::INFO)
                .into(),
        )
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(OffsetTime::local_rfc_3339().expect("couldn't get local time offset"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    match Cli::parse().command {
        Commands::Problems(args) => runtime.block_on(problems::run(args)),
        Commands::Daily(args) => runtime.block_on(daily::run(args)),
    }
    .expect("command failed");
}

use anyhow::Result;
use clap::ValueEnum;
use itertools::Itertools;
use leetcode_list_libs::{DailyChallengeRecord, ProblemRecord};
use std::fmt;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

pub fn render_problems(problems: &[ProblemRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(problems)?),
        OutputFormat::Table => Ok(problems
            .iter()
            .map(|problem| {
                format!(
                    "{}{} {:<7} [{:>4}] {} {} ({}) companies: {} tags: {}",
                    if problem.is_favorite { "★" } else { " " },
                    if problem.locked { "🔒" } else { " " },
                    problem.state.to_string(),
                    problem.id,
                    problem.name,
                    problem.difficulty,
                    problem.pass_rate,
                    problem.companies.iter().join(", "),
                    problem.tags.iter().join(", "),
                )
            })
            .join("\n")),
    }
}

pub fn render_daily_problems(
    records: &[DailyChallengeRecord],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Table => Ok(records
            .iter()
            .map(|record| {
                format!(
                    "{} {:<10} [{:>4}] {} {}",
                    record.date,
                    record.user_status,
                    record.question.frontend_id,
                    record.question.title,
                    record.question.translated_title,
                )
                .trim_end()
                .to_string()
            })
            .join("\n")),
    }
}

use crate::catalog::model::{ListOptions, ProblemRecord};
use crate::catalog::parser::parse_catalog;
use crate::catalog::source::{ListingSource, SourceError};
use crate::daily::client::DailyChallengeApi;
use crate::daily::model::DailyChallengeRecord;
use crate::notify::{Notifier, LIST_DAILY_PROBLEMS_FAILED, LIST_PROBLEMS_FAILED};
use crate::session::SessionGate;
use chrono::{Datelike, NaiveDate};

/// List the problem catalog of the signed-in user.
///
/// Returns an empty list without touching the source when nobody is signed in. A failure of the
/// source is logged, reported once through `notifier`, and also yields an empty list.
pub async fn list_problems(
    gate: &impl SessionGate,
    source: &impl ListingSource,
    notifier: &impl Notifier,
    options: &ListOptions,
) -> Vec<ProblemRecord> {
    if !gate.is_signed_in() {
        tracing::info!("Not signed in. Skip listing problems.");
        return Vec::new();
    }

    match fetch_catalog(source, options).await {
        Ok(problems) => problems,
        Err(e) => {
            tracing::error!("failed to list problems: {:?}", e);
            notifier.notify_error(LIST_PROBLEMS_FAILED);
            Vec::new()
        }
    }
}

async fn fetch_catalog(
    source: &impl ListingSource,
    options: &ListOptions,
) -> Result<Vec<ProblemRecord>, SourceError> {
    let raw = source.list_problems(options).await?;
    let metadata = source.companies_and_tags().await?;

    let problems = parse_catalog(&raw, &metadata.companies, &metadata.tags);
    tracing::info!("{} problems listed.", problems.len());

    Ok(problems)
}

/// List the daily challenges of the month `today` belongs to.
///
/// Returns an empty list without any request when nobody is signed in or no session token is
/// stored. Request failures are logged, reported once through `notifier`, and yield an empty list.
pub async fn list_daily_problems(
    gate: &impl SessionGate,
    api: &impl DailyChallengeApi,
    notifier: &impl Notifier,
    today: NaiveDate,
) -> Vec<DailyChallengeRecord> {
    let session_token = match gate.session_token() {
        Some(token) if gate.is_signed_in() => token,
        _ => {
            tracing::info!("No session available. Skip listing daily problems.");
            return Vec::new();
        }
    };

    match api
        .daily_question_records(&session_token, today.year(), today.month())
        .await
    {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("failed to list daily problems: {:?}", e);
            notifier.notify_error(LIST_DAILY_PROBLEMS_FAILED);
            Vec::new()
        }
    }
}

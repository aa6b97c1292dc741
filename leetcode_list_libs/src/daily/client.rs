use crate::daily::model::*;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, InvalidHeaderValue, COOKIE};
use reqwest::{Client, Url};
use thiserror::Error;

type Result<T> = std::result::Result<T, DailyClientError>;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://leetcode.cn/graphql/";

/// Query document for the monthly daily-question records.
///
/// The remote schema owns this document; it is sent byte for byte as the web client sends it.
pub const DAILY_QUESTION_RECORDS_QUERY: &str = "\n    query dailyQuestionRecords($year: Int!, $month: Int!) {\n  dailyQuestionRecords(year: $year, month: $month) {\n    date\n    userStatus\n    question {\n      questionFrontendId\n      title\n      titleSlug\n      translatedTitle\n    }\n  }\n}\n    ";

#[derive(Debug, Error)]
pub enum DailyClientError {
    #[error("failed to request to the graphql endpoint")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid graphql url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("session token is not a valid header value")]
    InvalidSessionError(#[from] InvalidHeaderValue),
    #[error("{0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait DailyChallengeApi: Send + Sync {
    async fn daily_question_records(
        &self,
        session_token: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyChallengeRecord>>;
}

pub struct GraphQLDailyClient {
    endpoint: Url,
    client: Client,
}

impl GraphQLDailyClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        GraphQLDailyClient::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: &str, client: Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        Ok(GraphQLDailyClient { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the daily challenges of the given month.
    ///
    /// `month` is 1-based. The session token is sent as the raw `Cookie` header value.
    pub async fn fetch_daily_challenges(
        &self,
        session_token: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyChallengeRecord>> {
        let mut cookie = HeaderValue::from_str(session_token)?;
        cookie.set_sensitive(true);

        let request = GraphQLRequest {
            query: DAILY_QUESTION_RECORDS_QUERY,
            variables: DailyQuestionRecordsVariables { year, month },
        };

        tracing::debug!("request daily question records of {}-{:02}", year, month);
        let res = self
            .client
            .post(self.endpoint.clone())
            .header(COOKIE, cookie)
            .json(&request)
            .send()
            .await?;

        match res.error_for_status_ref() {
            Ok(_) => {
                let body = res.text().await?;
                let response: GraphQLResponse<DailyQuestionRecordsData> =
                    serde_json::from_str(&body)?;
                let records = response.data.daily_question_records;

                tracing::info!("{} daily question records retrieved.", records.len());
                Ok(records)
            }
            Err(e) => {
                let body = res.text().await.unwrap_or_default();
                Err(DailyClientError::UnexpectedError(format!(
                    "unexpected error [{}] cause [{}]",
                    e.to_string(),
                    body
                )))
            }
        }
    }
}

#[async_trait]
impl DailyChallengeApi for GraphQLDailyClient {
    async fn daily_question_records(
        &self,
        session_token: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyChallengeRecord>> {
        self.fetch_daily_challenges(session_token, year, month)
            .await
    }
}

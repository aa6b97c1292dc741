pub mod catalog;
pub mod commands;
pub mod daily;
pub mod notify;
pub mod session;

pub use catalog::model::{
    Difficulty, ListOptions, MetadataTable, ProblemMetadata, ProblemRecord, ProblemState,
};
pub use catalog::parser::parse_catalog;
pub use catalog::source::{ListingSource, SourceError};
pub use commands::{list_daily_problems, list_problems};
pub use daily::client::{DailyChallengeApi, DailyClientError, GraphQLDailyClient};
pub use daily::model::{DailyChallengeRecord, DailyQuestion};
pub use notify::Notifier;
pub use session::SessionGate;

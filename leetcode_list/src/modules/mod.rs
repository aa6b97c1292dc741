pub mod executor;
pub mod notifier;
pub mod output;
pub mod session;
pub mod utils;

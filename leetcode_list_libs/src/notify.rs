pub const LIST_PROBLEMS_FAILED: &str =
    "Failed to list problems. Please open the output channel for details.";
pub const LIST_DAILY_PROBLEMS_FAILED: &str =
    "Failed to list daily Problems. Please open the output channel for details.";

/// User-visible error prompt. Fire and forget.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

use leetcode_list_libs::Notifier;

/// Reports errors on stderr, next to the log output that holds the details.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!(message);
        eprintln!("{}", message);
    }
}

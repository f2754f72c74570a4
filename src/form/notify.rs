//! User-facing notifications.

use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Error => "error",
        };
        f.write_str(label)
    }
}

/// Sink for messages shown to the person driving a form.
pub trait Notifier {
    fn notify(&self, level: Level, message: &str);
}

/// Prints notifications to the terminal and mirrors them into the log.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Error => {
                tracing::warn!(%level, "{}", message);
                eprintln!("{}", message);
            }
            _ => {
                tracing::info!(%level, "{}", message);
                println!("{}", message);
            }
        }
    }
}

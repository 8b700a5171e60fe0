//! Log processors linked into a chain of at most a few links.

use serde::{Deserialize, Serialize};

/// Severity of a log record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
    Error,
}

/// One link in the chain: handles its own level, forwards everything else.
///
/// Handled messages are recorded per link so tests can assert on captured
/// state instead of console output.
#[derive(Debug)]
pub struct LogProcessor {
    level: LogLevel,
    handled: Vec<String>,
    next: Option<Box<LogProcessor>>,
}

impl LogProcessor {
    pub fn new(level: LogLevel, next: Option<Box<LogProcessor>>) -> Self {
        Self {
            level,
            handled: Vec::new(),
            next,
        }
    }

    /// The info -> debug -> error chain the demo uses.
    pub fn standard_chain() -> Self {
        let error = LogProcessor::new(LogLevel::Error, None);
        let debug = LogProcessor::new(LogLevel::Debug, Some(Box::new(error)));
        LogProcessor::new(LogLevel::Info, Some(Box::new(debug)))
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Handle or forward one record.
    pub fn log(&mut self, level: LogLevel, message: &str) {
        if level == self.level {
            tracing::info!(?level, message, "record handled");
            self.handled.push(message.to_string());
        } else if let Some(next) = &mut self.next {
            next.log(level, message);
        } else {
            // End of chain, nobody wanted it.
            tracing::warn!(?level, message, "record fell off the end of the chain");
        }
    }

    /// Messages this link handled, oldest first.
    pub fn handled(&self) -> &[String] {
        &self.handled
    }

    pub fn next(&self) -> Option<&LogProcessor> {
        self.next.as_deref()
    }
}

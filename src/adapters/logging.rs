use crate::domain::ports::Logger;
use serde::{Deserialize, Serialize};

/// Writes each message as a line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}", message);
    }
}

/// Forwards each message to the tracing subscriber as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Which `Logger` adapter the ender is wired with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    #[default]
    Console,
    Tracing,
}

impl LoggerKind {
    pub fn build(self) -> Box<dyn Logger> {
        match self {
            LoggerKind::Console => Box::new(ConsoleLogger),
            LoggerKind::Tracing => Box::new(TracingLogger),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerKind::Console => "console",
            LoggerKind::Tracing => "tracing",
        }
    }
}

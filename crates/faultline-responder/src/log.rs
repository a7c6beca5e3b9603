use std::fmt;
use std::sync::{Mutex, PoisonError};

use faultline_core::RequestContext;
use http::Method;

/// Operator-facing record of a failure
///
/// Independent of whatever the client is sent for the same failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Method of the request that failed
    pub method: Method,
    /// Request URI (path and query)
    pub uri: String,
    /// Full error text
    pub message: String,
}

impl LogRecord {
    /// Build a record for `error` raised while handling `ctx`
    pub fn new<E>(ctx: &RequestContext, error: &E) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        Self {
            method: ctx.method.clone(),
            uri: ctx.request_uri().to_owned(),
            message: error.to_string(),
        }
    }
}

/// Append-only sink for operator log records
///
/// Implementations are shared across concurrently handled requests and must
/// write each record as a single unit.
pub trait OperatorLog: Send + Sync {
    /// Write one record
    fn record(&self, record: &LogRecord);
}

/// Writes records as `tracing` error events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl OperatorLog for TracingLog {
    fn record(&self, record: &LogRecord) {
        tracing::error!(method = %record.method, uri = %record.uri, "{}", record.message);
    }
}

/// Keeps records in memory
///
/// Useful in tests and for embedding callers that want to inspect failures.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    /// Snapshot of every record written so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl OperatorLog for MemoryLog {
    fn record(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

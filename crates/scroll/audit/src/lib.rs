//! Scroll Audit - where certification events go.
//!
//! The parser and validator only need one capability from the outside
//! world: "record this line". [`AuditSink`] is that capability. The
//! destination is opaque to the core, so the same run can log to memory,
//! to `tracing`, to an append-only ceremony log, or to all of them.

#![deny(unsafe_code)]

mod error;
mod file;

pub use error::{AuditError, AuditResult};
pub use file::{read_log, FileSink, DEFAULT_LOG_FILE};

/// Record-event capability.
pub trait AuditSink {
    fn record(&mut self, message: &str);
}

impl<F> AuditSink for F
where
    F: FnMut(&str),
{
    fn record(&mut self, message: &str) {
        self(message)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn record(&mut self, _message: &str) {}
}

/// Keeps events in memory, in the order they were recorded.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn into_events(self) -> Vec<String> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl AuditSink for MemorySink {
    fn record(&mut self, message: &str) {
        self.events.push(message.to_string());
    }
}

/// Forwards events to `tracing` under the `scroll::audit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn record(&mut self, message: &str) {
        tracing::info!(target: "scroll::audit", "{}", message);
    }
}

/// Sends every event to two sinks, first `A` then `B`.
#[derive(Debug, Default, Clone)]
pub struct TeeSink<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> TeeSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: AuditSink, B: AuditSink> AuditSink for TeeSink<A, B> {
    fn record(&mut self, message: &str) {
        self.first.record(message);
        self.second.record(message);
    }
}

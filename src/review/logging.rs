//! JSONL run transcript.
//!
//! Writes structured events to a timestamped JSONL file under
//! `{reviews_dir}/.critique-logs/`. Each invocation produces a file named
//! `run-{ISO8601}.jsonl`. A disabled logger accepts every event and writes
//! nothing, so callers never branch on whether logging is on.
//!
//! Uses synchronous `std::fs` since writes are small and flushed after each
//! event.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

/// Returns the current UTC time as an ISO 8601 string with milliseconds.
fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// A structured log entry serialized as a single JSON line.
#[derive(Debug, Serialize)]
#[serde(tag = "event_type")]
pub enum LogEntry {
    #[serde(rename = "run_start")]
    RunStart {
        timestamp: String,
        file: String,
        instruction: String,
    },

    /// A call about to be sent for one role.
    #[serde(rename = "agent_request")]
    AgentRequest {
        timestamp: String,
        role: String,
        model: String,
        prompt: String,
    },

    #[serde(rename = "agent_response")]
    AgentResponse {
        timestamp: String,
        role: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        reasoning: Option<String>,
    },

    #[serde(rename = "error")]
    Error {
        timestamp: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<String>,
        message: String,
    },

    #[serde(rename = "review_written")]
    ReviewWritten { timestamp: String, path: String },

    #[serde(rename = "run_end")]
    RunEnd { timestamp: String, outcome: String },
}

/// Append-only JSONL logger for one review run.
pub struct RunLogger {
    writer: Option<BufWriter<fs::File>>,
    log_path: Option<PathBuf>,
}

impl RunLogger {
    /// Create a logger writing to `{reviews_dir}/.critique-logs/run-{ts}.jsonl`.
    pub fn new(reviews_dir: &Path) -> anyhow::Result<Self> {
        let log_dir = reviews_dir.join(".critique-logs");
        fs::create_dir_all(&log_dir)?;

        let run_id = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let log_path = log_dir.join(format!("run-{run_id}.jsonl"));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            log_path: Some(log_path),
        })
    }

    /// A logger that discards every event.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            log_path: None,
        }
    }

    /// Path of the transcript, if logging is enabled.
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Serialize a log entry as a single JSON line and flush.
    pub fn log_event(&mut self, event: &LogEntry) -> anyhow::Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        serde_json::to_writer(&mut *writer, event)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Log an event, downgrading a write failure to a warning. The transcript
    /// must never abort a review.
    pub fn record(&mut self, event: LogEntry) {
        if let Err(e) = self.log_event(&event) {
            tracing::warn!("Failed to write run transcript: {e:#}");
        }
    }

    pub fn log_run_start(&mut self, file: &Path, instruction: &str) {
        self.record(LogEntry::RunStart {
            timestamp: now_iso(),
            file: file.display().to_string(),
            instruction: instruction.to_string(),
        });
    }

    pub fn log_request(&mut self, role: &str, model: &str, prompt: &str) {
        self.record(LogEntry::AgentRequest {
            timestamp: now_iso(),
            role: role.to_string(),
            model: model.to_string(),
            prompt: prompt.to_string(),
        });
    }

    pub fn log_response(&mut self, role: &str, content: &str, reasoning: Option<&str>) {
        self.record(LogEntry::AgentResponse {
            timestamp: now_iso(),
            role: role.to_string(),
            content: content.to_string(),
            reasoning: reasoning.map(str::to_string),
        });
    }

    pub fn log_error(&mut self, role: Option<&str>, message: &str) {
        self.record(LogEntry::Error {
            timestamp: now_iso(),
            role: role.map(str::to_string),
            message: message.to_string(),
        });
    }

    pub fn log_review_written(&mut self, path: &Path) {
        self.record(LogEntry::ReviewWritten {
            timestamp: now_iso(),
            path: path.display().to_string(),
        });
    }

    pub fn log_run_end(&mut self, outcome: &str) {
        self.record(LogEntry::RunEnd {
            timestamp: now_iso(),
            outcome: outcome.to_string(),
        });
    }
}

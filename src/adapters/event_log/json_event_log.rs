use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::app_config::AppConfig;
use crate::core::errors::{AccordError, Result};
use crate::core::models::acceptance_event::{AcceptanceEvent, AppendResult, EventFilter};
use crate::core::models::subject_key::subject_key;
use crate::core::traits::event_log::EventLog;

/// One line of the log: the event plus the key it is indexed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventRecord {
    subject_key: String,
    event: AcceptanceEvent,
}

/// Event log that appends events as JSON lines to a file.
///
/// Each line is a self-contained `EventRecord`. Appends are a single
/// write of one line in append mode, and reads stream the file in order.
pub struct JsonEventLog {
    log_path: PathBuf,
}

impl JsonEventLog {
    /// Create a log that writes to `{accord_dir}/{log_file}`.
    pub fn new(accord_dir: &Path, log_file: &str) -> Self {
        Self {
            log_path: accord_dir.join(log_file),
        }
    }

    /// Create a log from an `AppConfig`, falling back to the default
    /// file name if the `[event_log]` section is missing.
    pub fn from_config(accord_dir: &Path, config: &AppConfig) -> Self {
        Self::new(accord_dir, config.log_file())
    }

    /// Return the file path this log writes to.
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl EventLog for JsonEventLog {
    fn append(&self, mut event: AcceptanceEvent) -> Result<AppendResult> {
        event.id = Some(Uuid::new_v4().to_string());

        let record = EventRecord {
            subject_key: subject_key(event.index_value()),
            event,
        };

        let mut line = serde_json::to_string(&record).map_err(|e| AccordError::EventLog {
            detail: format!("Failed to serialize event: {e}"),
        })?;
        line.push('\n');

        // Ensure the parent directory exists
        if let Some(parent) = self.log_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AccordError::EventLog {
                detail: format!("Cannot open event log at {}: {e}", self.log_path.display()),
            })?;

        // One write per record so concurrent appenders never interleave lines
        file.write_all(line.as_bytes())
            .map_err(|e| AccordError::EventLog {
                detail: format!("Failed to write event: {e}"),
            })?;

        debug!(path = %self.log_path.display(), "appended event");
        Ok(AppendResult {
            event: record.event,
        })
    }

    fn query(&self, filter: &EventFilter) -> Result<Vec<AcceptanceEvent>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.log_path).map_err(|e| AccordError::EventLog {
            detail: format!("Cannot read event log: {e}"),
        })?;

        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| AccordError::EventLog {
                detail: format!("Error reading event log line {}: {e}", line_num + 1),
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let record: EventRecord =
                serde_json::from_str(trimmed).map_err(|e| AccordError::EventLog {
                    detail: format!("Malformed event at line {}: {e}", line_num + 1),
                })?;

            if record.event.event_type == filter.event_type
                && record.subject_key == filter.subject_key
            {
                events.push(record.event);
            }
        }

        Ok(events)
    }
}

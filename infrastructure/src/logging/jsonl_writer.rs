//! JSONL file writer for kit events.
//!
//! Each [`KitEvent`] becomes one JSON line carrying a `type` field and a
//! `timestamp`. Object payloads are merged into the line; anything else is
//! nested under `data`.

use agentkit_application::ports::kit_logger::{KitEvent, KitEventLogger};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Writes one JSON object per line. Flushes on `Drop`.
pub struct JsonlKitLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlKitLogger {
    /// Create the file (and parent directories).
    ///
    /// Returns `None`, after logging a warning, when that fails.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create kit log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: KitEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        match event.payload {
            Value::Object(mut map) => {
                map.insert("type".to_string(), Value::String(event.event_type.to_string()));
                map.insert("timestamp".to_string(), Value::String(timestamp));
                Value::Object(map)
            }
            other => json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        }
    }
}

impl KitEventLogger for JsonlKitLogger {
    fn log(&self, event: KitEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

impl Drop for JsonlKitLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("kit.jsonl");
        let logger = JsonlKitLogger::new(&path).unwrap();

        logger.log(KitEvent::new(
            "diagnostic",
            json!({ "code": "dependency_cycle", "message": "Circular dependency detected: A -> A" }),
        ));
        logger.log(KitEvent::new("compiled", json!({ "tools": ["A"] })));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "diagnostic");
        assert_eq!(lines[0]["code"], "dependency_cycle");
        assert!(lines[0].get("timestamp").is_some());
        assert_eq!(lines[1]["tools"][0], "A");
    }

    #[test]
    fn test_non_object_payload_is_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kit.jsonl");
        let logger = JsonlKitLogger::new(&path).unwrap();

        logger.log(KitEvent::new("note", json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }
}

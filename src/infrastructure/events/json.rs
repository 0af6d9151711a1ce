//! JSON Event Sink
//!
//! Outputs one `step` event per select/deselect attempt as NDJSON.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::ports::{TreeEvent, TreeEventSink};
use crate::domain::tree::TalentTree;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    next_index: AtomicUsize,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            next_index: AtomicUsize::new(0),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl TreeEventSink for JsonEventSink {
    fn on_event(&self, event: &TreeEvent<'_>, tree: &TalentTree) {
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        let command = event.command();
        let budget = tree.budget();

        let mut json = serde_json::json!({
            "event": "step",
            "index": index,
            "step": command.to_string(),
            "action": command.action,
            "path": command.path,
            "talent": command.talent,
            "spent": budget.spent(),
            "total": budget.total(),
        });

        let outcome = match event {
            TreeEvent::Applied { .. } => "applied",
            TreeEvent::Unchanged { .. } => "unchanged",
            TreeEvent::Rejected { error, .. } => {
                json["error"] = serde_json::json!({
                    "kind": error.kind(),
                    "message": error.to_string(),
                });
                "rejected"
            }
        };
        json["outcome"] = serde_json::Value::from(outcome);

        self.write_event(json);
    }
}

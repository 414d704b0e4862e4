//! File-backed schedule list.
//!
//! The JSON file is the only source of truth: every operation re-reads it and
//! every mutation rewrites it whole. Entries are opaque JSON values.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::{DashboardError, DashboardResult};

/// One client-supplied agenda item. Its shape is not checked.
pub type ScheduleEntry = Value;

/// Entries in insertion order.
pub type ScheduleList = Vec<ScheduleEntry>;

const INDENT: &[u8] = b"    ";

pub struct ScheduleStore {
    path: PathBuf,
    // Serializes read-modify-write within this process. Other processes
    // writing the same file can still lose updates.
    write_lock: Mutex<()>,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> ScheduleStore {
        ScheduleStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list. A missing, unreadable or non-JSON file reads as empty,
    /// and so does a JSON document that is not a list.
    pub fn load(&self) -> ScheduleList {
        self.read().unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Vec::new()
        })
    }

    // Like `load`, but valid JSON that is not a list is an error so that a
    // mutation never overwrites a document it did not write.
    fn read(&self) -> DashboardResult<ScheduleList> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&content) {
            Ok(Value::Array(list)) => Ok(list),
            Ok(_) => Err(DashboardError::NotAList(self.path.display().to_string())),
            Err(e) => {
                tracing::warn!("Ignoring corrupt schedule file {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the file with `list`, pretty-printed with four-space indent.
    pub fn save(&self, list: &[ScheduleEntry]) -> DashboardResult<()> {
        let mut content = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        list.serialize(&mut serializer)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    pub fn append(&self, entry: ScheduleEntry) -> DashboardResult<()> {
        let _guard = self.write_lock.lock();

        let mut list = self.read()?;
        list.push(entry);
        self.save(&list)?;

        tracing::debug!(len = list.len(), "Appended schedule entry");
        Ok(())
    }

    /// Remove the entry at `index`. Out of range (negative included) is a
    /// no-op and leaves the file untouched.
    pub fn remove_at(&self, index: i64) -> DashboardResult<()> {
        let _guard = self.write_lock.lock();

        let mut list = self.read()?;
        let Some(index) = usize::try_from(index).ok().filter(|&i| i < list.len()) else {
            tracing::debug!(index, len = list.len(), "Schedule index out of range");
            return Ok(());
        };

        list.remove(index);
        self.save(&list)?;

        tracing::debug!(index, len = list.len(), "Removed schedule entry");
        Ok(())
    }
}

//! Action configuration and request payload types.
//!
//! `ActionConfig` keeps the parsed `config.yaml` verbatim as a JSON object so
//! the full payload can echo it back unchanged, including keys this tool does
//! not interpret (`interpreter`, `requirements`, anything else).

use serde::Serialize;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// ActionConfig
// ---------------------------------------------------------------------------

/// Parsed `config.yaml`: string keys to scalar / array values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ActionConfig(Map<String, Value>);

impl ActionConfig {
    /// Parse a YAML document. An empty (or comment-only) document is an empty
    /// mapping; any other non-mapping top level is an error.
    pub fn from_yaml_str(contents: &str) -> Result<Self, String> {
        let doc: serde_yaml::Value = serde_yaml::from_str(contents).map_err(|e| e.to_string())?;
        match doc {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => match serde_json::to_value(&doc) {
                Ok(Value::Object(map)) => Ok(Self(map)),
                Ok(_) => Err("top-level document must be a mapping".to_string()),
                Err(e) => Err(e.to_string()),
            },
            _ => Err("top-level document must be a mapping".to_string()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for `key`, or JSON `null` when absent.
    pub(crate) fn value_or_null(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }
}

impl From<Map<String, Value>> for ActionConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Complete description of a remote action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullPayload {
    pub name: String,
    pub description: Value,
    pub memory: Value,
    pub time_limit: Value,
    pub concurrency: Value,
    pub config: ActionConfig,
    /// Percent-encoded `main.py`.
    pub file: String,
}

/// Script-only update body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePayload {
    /// Percent-encoded `main.py`.
    pub file: String,
}

/// Request body for create / update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SyncPayload {
    Full(FullPayload),
    FileOnly(FilePayload),
}

impl SyncPayload {
    pub fn is_file_only(&self) -> bool {
        matches!(self, SyncPayload::FileOnly(_))
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncPayload::Full(_) => "full",
            SyncPayload::FileOnly(_) => "file-only",
        }
    }

    pub fn file(&self) -> &str {
        match self {
            SyncPayload::Full(p) => &p.file,
            SyncPayload::FileOnly(p) => &p.file,
        }
    }
}

impl From<FullPayload> for SyncPayload {
    fn from(p: FullPayload) -> Self {
        SyncPayload::Full(p)
    }
}

impl From<FilePayload> for SyncPayload {
    fn from(p: FilePayload) -> Self {
        SyncPayload::FileOnly(p)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

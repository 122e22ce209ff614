//! `config.yaml` validation.
//!
//! [`validate_config`] is the gate: it checks only that the five required keys
//! are present. [`lint`] compares values against the documented allowed sets
//! and returns human-readable findings; callers log them as warnings and never
//! block a sync on them.

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::ActionConfig;

/// Keys that must be present for a folder to be eligible for sync.
pub const REQUIRED_KEYS: [&str; 5] = [
    "description",
    "memory",
    "interpreter",
    "time_limit",
    "concurrency",
];

pub const ALLOWED_MEMORY: [u64; 8] = [128, 256, 512, 768, 1024, 1536, 2048, 3008];
pub const ALLOWED_INTERPRETERS: [&str; 4] = ["3.10", "3.11", "3.12", "3.13"];
pub const TIME_LIMIT_RANGE: (u64, u64) = (300, 10800);
pub const TIME_LIMIT_STEP: u64 = 300;
pub const CONCURRENCY_RANGE: (u64, u64) = (1, 128);

/// Check required-key presence. Every missing key is reported, not just the first.
pub fn validate_config(config: &ActionConfig, folder: &str) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !config.contains_key(key))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            folder: folder.to_string(),
            missing,
        })
    }
}

/// Advisory checks against the documented value contract.
pub fn lint(config: &ActionConfig) -> Vec<String> {
    let mut findings = Vec::new();

    if let Some(v) = config.get("memory") {
        match v.as_u64() {
            Some(m) if ALLOWED_MEMORY.contains(&m) => {}
            _ => findings.push(format!("memory {v} is not one of {ALLOWED_MEMORY:?}")),
        }
    }

    if let Some(v) = config.get("interpreter") {
        match v.as_str() {
            Some(s) if ALLOWED_INTERPRETERS.contains(&s) => {}
            Some(s) => findings.push(format!(
                "interpreter \"{s}\" is not one of {ALLOWED_INTERPRETERS:?}"
            )),
            // `interpreter: 3.10` parses as the float 3.1
            None => findings.push(format!(
                "interpreter {v} should be a quoted string such as \"3.12\""
            )),
        }
    }

    if let Some(v) = config.get("time_limit") {
        let (lo, hi) = TIME_LIMIT_RANGE;
        match v.as_u64() {
            Some(t) if (lo..=hi).contains(&t) && t % TIME_LIMIT_STEP == 0 => {}
            _ => findings.push(format!(
                "time_limit {v} must be a multiple of {TIME_LIMIT_STEP} in [{lo}, {hi}]"
            )),
        }
    }

    if let Some(v) = config.get("concurrency") {
        let (lo, hi) = CONCURRENCY_RANGE;
        match v.as_u64() {
            Some(c) if (lo..=hi).contains(&c) => {}
            _ => findings.push(format!("concurrency {v} must be in [{lo}, {hi}]")),
        }
    }

    match config.get("requirements") {
        None => findings.push("requirements is not set".to_string()),
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
        Some(v) => findings.push(format!("requirements {v} must be a list of strings")),
    }

    findings
}

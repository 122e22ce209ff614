//! Payload assembly for create / update requests.
//!
//! ## `build_full_payload` order of checks
//!
//! 1. `config.yaml` present, else [`PayloadError::MissingConfig`].
//! 2. YAML parses to a mapping, else [`PayloadError::InvalidYaml`].
//! 3. Required keys present, else [`PayloadError::InvalidConfig`].
//! 4. `main.py` present, else [`PayloadError::MissingScript`].
//! 5. Script read as text and percent-encoded.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{io_err, PayloadError};
use crate::folder::ActionFolder;
use crate::types::{ActionConfig, FilePayload, FullPayload};
use crate::validate::validate_config;

/// URI-component encoding: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard URI-component percent-encoding.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Percent-encode script text for transport inside a JSON string.
pub fn encode_script(text: &str) -> String {
    encode_component(text)
}

/// Inverse of [`encode_script`]. Invalid UTF-8 sequences are replaced.
pub fn decode_script(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

/// Load and parse a folder's `config.yaml` without checking required keys.
pub fn load_config(folder: &ActionFolder) -> Result<ActionConfig, PayloadError> {
    if !folder.has_config() {
        return Err(PayloadError::MissingConfig {
            folder: folder.rel_path().to_string(),
        });
    }
    let path = folder.config_path();
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    ActionConfig::from_yaml_str(&contents).map_err(|message| PayloadError::InvalidYaml {
        folder: folder.rel_path().to_string(),
        message,
    })
}

fn encoded_script(folder: &ActionFolder) -> Result<String, PayloadError> {
    if !folder.has_script() {
        return Err(PayloadError::MissingScript {
            folder: folder.rel_path().to_string(),
        });
    }
    let path = folder.script_path();
    let text = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    Ok(encode_script(&text))
}

/// Build the canonical full description of the action in `folder`.
pub fn build_full_payload(folder: &ActionFolder) -> Result<FullPayload, PayloadError> {
    let config = load_config(folder)?;
    validate_config(&config, folder.rel_path())?;
    let file = encoded_script(folder)?;

    Ok(FullPayload {
        name: folder.name().to_string(),
        description: config.value_or_null("description"),
        memory: config.value_or_null("memory"),
        time_limit: config.value_or_null("time_limit"),
        concurrency: config.value_or_null("concurrency"),
        config,
        file,
    })
}

/// Build the script-only update body for `folder`.
pub fn build_file_only_payload(folder: &ActionFolder) -> Result<FilePayload, PayloadError> {
    Ok(FilePayload {
        file: encoded_script(folder)?,
    })
}

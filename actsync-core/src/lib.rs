//! actsync core library: action folder model, config validation, payload
//! assembly, and run settings.
//!
//! - [`token`]: credential sanitizing
//! - [`folder`]: [`ActionFolder`] discovery and file presence
//! - [`types`]: [`ActionConfig`] and [`SyncPayload`]
//! - [`validate`]: required-key validation and advisory lint
//! - [`payload`]: full / file-only payload builders
//! - [`settings`]: [`Settings`], built once by the binary

pub mod error;
pub mod folder;
pub mod payload;
pub mod settings;
pub mod token;
pub mod types;
pub mod validate;

pub use error::{PayloadError, ValidationError};
pub use folder::{ActionFolder, CONFIG_FILE, SCRIPT_FILE};
pub use payload::{build_file_only_payload, build_full_payload};
pub use settings::Settings;
pub use token::sanitize_token;
pub use types::{ActionConfig, FilePayload, FullPayload, SyncPayload};

//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Maximum number of replies a single comment can hold
pub const MAX_REPLIES: usize = 3;

/// Notification shown when a reply is rejected for depth
pub const MAX_DEPTH_MESSAGE: &str = "Cannot add reply. Maximum depth reached.";

/// Application name, also used as the title bar text
pub const APP_NAME: &str = "Comment Section";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".commentboard";

/// Config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "commentboard.log";

/// Default timestamp format (matches a en-US locale string)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Placeholder for the comment composer
pub const COMMENT_PLACEHOLDER: &str = "Write a comment...";

/// Placeholder for an empty reply draft
pub const REPLY_PLACEHOLDER: &str = "Reply...";

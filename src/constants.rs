//! UI Constants
//!
//! Centralized constants shared by the store and the window shell.

use std::time::Duration;

/// Product name appended to every document title
pub const APP_TITLE_SUFFIX: &str = "Kuwait Social AI";

/// Default auto-dismiss delay for notifications
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

/// Settings storage keys
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "kuwait-social-ui.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "kuwait-social-ui.log";

/// Sidebar widths in pixels
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

// src/constants.rs

//! Fixed names and markers shared across the crate.

/// Menu directory used when neither the command line nor the settings name one.
pub const DEFAULT_MENU_DIR: &str = "menu";

/// Name of the directory holding racoon settings (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "racoon";

/// Name of the settings file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Terminal emulator used to re-launch the menu when stdout is not a terminal.
pub const DEFAULT_TERMINAL: &str = "konsole --hold -e";

/// Set on a re-launched child so it never tries to re-launch again.
pub const RELAUNCH_ENV_VAR: &str = "RACOON_RELAUNCHED";

/// Marker for the display label of a script.
pub const LABEL_MARKER: &str = "# LABEL:";

/// Marker for the elevation flag of a script.
pub const SUDO_MARKER: &str = "# SUDO:";

/// Marker for a declared script argument.
pub const ARG_MARKER: &str = "# ARG:";

/// How many bytes of a file are searched for markers (64 KiB).
pub const METADATA_SCAN_LIMIT: u64 = 64 * 1024;

/// The only `SUDO` value that turns elevation on.
pub const SUDO_ENABLED_VALUE: &str = "true";

/// Command prefix used for elevated scripts.
pub const ELEVATION_PREFIX: [&str; 2] = ["sudo", "-E"];

//! Configuration and palette for Lectern.
//!
//! Paths under `~/.config/lectern`, the cached `settings.conf` reader, and the
//! color palette used by the renderer.

/// Path resolution for config directories.
mod paths;
/// Settings access and parsing.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, lists_dir, logs_dir};
pub use settings::{parse_settings, settings};
pub use types::{Settings, Theme};

/// What: Return the active color palette.
///
/// Output:
/// - The built-in Catppuccin Mocha `Theme`.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers lock it around `HOME`/`XDG_CONFIG_HOME` overrides and config-dir writes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

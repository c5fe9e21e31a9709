use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::SystemTime;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod normalize;
mod parse_settings;

use normalize::normalize;
pub use parse_settings::parse_settings;

struct SettingsCache {
    settings: Settings,
    settings_path: Option<PathBuf>,
    settings_mtime: Option<SystemTime>,
    initialized: bool,
}

impl SettingsCache {
    fn new() -> Self {
        Self {
            settings: Settings::default(),
            settings_path: None,
            settings_mtime: None,
            initialized: false,
        }
    }
}

static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - The parsed value is cached and reused while the file's mtime is unchanged.
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| Mutex::new(SettingsCache::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let settings_path = resolve_settings_config_path().or_else(|| {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| env::var("HOME").ok().map(|h| Path::new(&h).join(".config")))
            .map(|base| base.join("lectern").join("settings.conf"))
    });
    let settings_mtime = settings_path
        .as_ref()
        .and_then(|p| fs::metadata(p).and_then(|m| m.modified()).ok());

    if cache.initialized
        && cache.settings_path == settings_path
        && cache.settings_mtime == settings_mtime
    {
        return cache.settings.clone();
    }

    let mut out = Settings::default();
    if let Some(p) = settings_path.as_ref()
        && let Ok(content) = fs::read_to_string(p)
    {
        debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
        parse_settings(&content, &mut out);
    } else if let Some(p) = settings_path.as_ref() {
        warn!(
            path = %p.display(),
            "[Config] settings.conf missing or unreadable, using defaults"
        );
    }
    normalize(&mut out);

    cache.settings_path = settings_path;
    cache.settings_mtime = settings_mtime;
    cache.settings = out.clone();
    cache.initialized = true;
    out
}

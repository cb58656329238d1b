//! TOML-based configuration for the recorder.
//!
//! Reads and writes `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Gridcast\config.toml`
//! - Linux:    `~/.config/gridcast/config.toml`
//! - macOS:    `~/Library/Application Support/Gridcast/config.toml`
//!
//! Everything the layout engine consumes is parsed here once, at session
//! start: canvas dimensions, layout mode, highlight target, auto-subscribe
//! flag, and the comma-separated subscription allow-lists.  Fields missing
//! from the file fall back to `#[serde(default)]` values, so a first run
//! with no config file behaves sensibly.
//!
//! Media retention time is an explicit `media_keep_time_ms` field (default 0)
//! rather than an environment variable, so the effective value is always
//! visible in one place.

use std::collections::HashSet;
use std::path::PathBuf;

use gridcast_core::{
    Addressing, Canvas, HighlightTarget, LayoutMode, MixProfile, StaticDirectory,
    SubscriberPolicy, Uid,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub recording: RecordingConfig,
    #[serde(default)]
    pub mixer: MixerConfig,
    /// uid ↔ account entries seeding the directory until an engine-backed
    /// directory is attached.
    #[serde(default)]
    pub directory: Vec<DirectoryEntry>,
}

/// Session-level recording settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordingConfig {
    /// Channel to join.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Join as this registered account.  When present, participants and the
    /// highlight target are addressed by account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How long the engine retains media after a stream stops, in ms.
    /// 0 (the default) disables retention.
    #[serde(default)]
    pub media_keep_time_ms: u32,
    /// Keep a participant's last decoded frame on canvas while their stream
    /// is interrupted.
    #[serde(default)]
    pub keep_last_frame: bool,
}

/// Compositing parameters consumed by the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixerConfig {
    /// Geometry algorithm family: `"default"`, `"best_fit"`, or
    /// `"vertical_presentation"`.
    #[serde(default)]
    pub mode: LayoutMode,
    /// Output canvas width in pixels.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    /// Output canvas height in pixels.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Display every active participant, ignoring the allow-lists.
    #[serde(default = "default_true")]
    pub auto_subscribe: bool,
    /// Comma-separated uids to display when auto-subscribe is off.
    #[serde(default)]
    pub subscribe_uids: String,
    /// Comma-separated account names to display when auto-subscribe is off
    /// (account-addressed sessions).
    #[serde(default)]
    pub subscribe_accounts: String,
    /// Highlight target by uid (numeric-addressed sessions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_uid: Option<Uid>,
    /// Highlight target by account name (account-addressed sessions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_account: Option<String>,
}

/// One uid ↔ account mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryEntry {
    pub uid: Uid,
    pub account: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_channel() -> String {
    "default".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_canvas_width() -> u32 {
    1920
}
fn default_canvas_height() -> u32 {
    1080
}
fn default_true() -> bool {
    true
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            account: None,
            log_level: default_log_level(),
            media_keep_time_ms: 0,
            keep_last_frame: false,
        }
    }
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            auto_subscribe: default_true(),
            subscribe_uids: String::new(),
            subscribe_accounts: String::new(),
            highlight_uid: None,
            highlight_account: None,
        }
    }
}

// ── Domain conversions ────────────────────────────────────────────────────────

impl RecordingConfig {
    /// Numeric addressing unless the session joins by account.
    pub fn addressing(&self) -> Addressing {
        if self.account.is_some() {
            Addressing::Account
        } else {
            Addressing::Numeric
        }
    }
}

impl MixerConfig {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    /// Builds the engine's mix profile.  `keep_last_frame` lives in the
    /// recording section, so it is passed in.
    pub fn profile(&self, keep_last_frame: bool) -> MixProfile {
        MixProfile {
            canvas: self.canvas(),
            mode: self.mode,
            keep_last_frame,
        }
    }

    /// Parses the allow-list strings into the engine's subscription policy.
    pub fn policy(&self) -> SubscriberPolicy {
        SubscriberPolicy {
            auto_subscribe: self.auto_subscribe,
            allowed_uids: parse_uid_list(&self.subscribe_uids),
            allowed_accounts: parse_name_list(&self.subscribe_accounts),
        }
    }

    /// The highlight target matching the session's addressing, if configured.
    pub fn highlight_target(&self, addressing: Addressing) -> Option<HighlightTarget> {
        match addressing {
            Addressing::Account => self
                .highlight_account
                .clone()
                .map(HighlightTarget::Account),
            Addressing::Numeric => self.highlight_uid.map(HighlightTarget::Uid),
        }
    }
}

impl AppConfig {
    /// Seeds a directory from the configured uid ↔ account entries.
    pub fn static_directory(&self) -> StaticDirectory {
        let mut directory = StaticDirectory::new();
        for entry in &self.directory {
            directory.insert(entry.uid, entry.account.clone());
        }
        directory
    }
}

/// Parses a comma-separated uid list, skipping empty segments and warning on
/// non-numeric ones.
fn parse_uid_list(raw: &str) -> HashSet<Uid> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<Uid>() {
            Ok(uid) => Some(uid),
            Err(_) => {
                warn!(token = s, "ignoring non-numeric uid in subscribe list");
                None
            }
        })
        .collect()
}

/// Parses a comma-separated account-name list, skipping empty segments.
fn parse_name_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from disk, returning `AppConfig::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk, creating the config directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Gridcast"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("gridcast"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Gridcast")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_targets_full_hd_auto_subscribe() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.mixer.canvas_width, 1920);
        assert_eq!(cfg.mixer.canvas_height, 1080);
        assert!(cfg.mixer.auto_subscribe);
        assert_eq!(cfg.mixer.mode, LayoutMode::Default);
    }

    #[test]
    fn test_default_media_keep_time_is_zero() {
        let cfg = RecordingConfig::default();
        assert_eq!(cfg.media_keep_time_ms, 0);
        assert!(!cfg.keep_last_frame);
    }

    #[test]
    fn test_addressing_follows_account_presence() {
        let mut cfg = RecordingConfig::default();
        assert_eq!(cfg.addressing(), Addressing::Numeric);
        cfg.account = Some("recorder-bot".to_string());
        assert_eq!(cfg.addressing(), Addressing::Account);
    }

    // ── Allow-list parsing ────────────────────────────────────────────────────

    #[test]
    fn test_parse_uid_list_splits_and_trims() {
        let uids = parse_uid_list("11, 22,33");
        assert_eq!(uids, [11, 22, 33].into_iter().collect());
    }

    #[test]
    fn test_parse_uid_list_tolerates_empty_segments() {
        let uids = parse_uid_list(",11,,22,");
        assert_eq!(uids.len(), 2);
    }

    #[test]
    fn test_parse_uid_list_skips_non_numeric_tokens() {
        let uids = parse_uid_list("11,alice,22");
        assert_eq!(uids, [11, 22].into_iter().collect());
    }

    #[test]
    fn test_parse_empty_strings_give_empty_policies() {
        let policy = MixerConfig::default().policy();
        assert!(policy.allowed_uids.is_empty());
        assert!(policy.allowed_accounts.is_empty());
        assert!(policy.auto_subscribe);
    }

    #[test]
    fn test_parse_name_list_splits_and_trims() {
        let names = parse_name_list("alice, bob ,carol");
        assert!(names.contains("alice"));
        assert!(names.contains("bob"));
        assert!(names.contains("carol"));
    }

    // ── Highlight selection ───────────────────────────────────────────────────

    #[test]
    fn test_highlight_target_uses_uid_for_numeric_addressing() {
        let cfg = MixerConfig {
            highlight_uid: Some(7),
            highlight_account: Some("alice".to_string()),
            ..MixerConfig::default()
        };
        assert_eq!(
            cfg.highlight_target(Addressing::Numeric),
            Some(HighlightTarget::Uid(7))
        );
    }

    #[test]
    fn test_highlight_target_uses_account_for_account_addressing() {
        let cfg = MixerConfig {
            highlight_uid: Some(7),
            highlight_account: Some("alice".to_string()),
            ..MixerConfig::default()
        };
        assert_eq!(
            cfg.highlight_target(Addressing::Account),
            Some(HighlightTarget::Account("alice".to_string()))
        );
    }

    #[test]
    fn test_highlight_target_absent_when_unconfigured() {
        let cfg = MixerConfig::default();
        assert_eq!(cfg.highlight_target(Addressing::Numeric), None);
        assert_eq!(cfg.highlight_target(Addressing::Account), None);
    }

    // ── TOML round-trip ───────────────────────────────────────────────────────

    #[test]
    fn test_app_config_serializes_and_deserializes_round_trip() {
        // Arrange
        let mut cfg = AppConfig::default();
        cfg.mixer.mode = LayoutMode::VerticalPresentation;
        cfg.mixer.canvas_width = 1280;
        cfg.mixer.canvas_height = 720;
        cfg.mixer.highlight_uid = Some(42);
        cfg.recording.keep_last_frame = true;
        cfg.directory.push(DirectoryEntry {
            uid: 42,
            account: "presenter".to_string(),
        });

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_deserialize_minimal_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_deserialize_partial_mixer_overrides_defaults() {
        let toml_str = r#"
[mixer]
mode = "best_fit"
subscribe_uids = "11,22"
auto_subscribe = false
"#;
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");
        assert_eq!(cfg.mixer.mode, LayoutMode::BestFit);
        assert!(!cfg.mixer.auto_subscribe);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.mixer.canvas_width, 1920);

        let policy = cfg.mixer.policy();
        assert_eq!(policy.allowed_uids, [11, 22].into_iter().collect());
    }

    #[test]
    fn test_deserialize_unknown_mode_is_a_parse_error() {
        let toml_str = r#"
[mixer]
mode = "mosaic"
"#;
        let result: Result<AppConfig, toml::de::Error> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_none_highlight_fields_are_omitted_from_toml() {
        let cfg = AppConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        assert!(!toml_str.contains("highlight_uid"));
        assert!(!toml_str.contains("highlight_account"));
        assert!(!toml_str.contains("account ="));
    }

    #[test]
    fn test_static_directory_is_seeded_from_entries() {
        let mut cfg = AppConfig::default();
        cfg.directory.push(DirectoryEntry {
            uid: 1,
            account: "alice".to_string(),
        });
        cfg.directory.push(DirectoryEntry {
            uid: 2,
            account: "bob".to_string(),
        });

        let directory = cfg.static_directory();
        assert_eq!(directory.len(), 2);
    }

    // ── Load/save via temp dir ────────────────────────────────────────────────

    #[test]
    fn test_config_write_and_read_back_round_trips_on_disk() {
        let dir = std::env::temp_dir().join(format!("gridcast_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.recording.channel = "studio-7".to_string();
        cfg.mixer.mode = LayoutMode::BestFit;

        let content = toml::to_string_pretty(&cfg).expect("serialize");
        std::fs::write(&path, &content).expect("write");
        let loaded: AppConfig =
            toml::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");

        assert_eq!(loaded.recording.channel, "studio-7");
        assert_eq!(loaded.mixer.mode, LayoutMode::BestFit);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"));
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }
}

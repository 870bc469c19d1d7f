use super::load::{default_config_path, default_data_dir, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_spoty_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SPOTY_CONFIG_PATH", "/tmp/spoty-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/spoty-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("spoty")
            .join("config.toml")
    );
}

#[test]
fn default_data_dir_falls_back_to_home_local_share() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_DATA_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_data_dir().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".local/share")
            .join("spoty")
    );
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.storage.key, "premium_spoty_v1");
    assert!(!s.playback.shuffle);
    assert!(!s.playback.repeat);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.storage.key = "  ".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.volume_step = 0.0;
    assert!(s.validate().is_err());
}

#[test]
fn storage_dir_and_log_file_honor_overrides() {
    let mut s = Settings::default();
    s.storage.dir = Some("/tmp/spoty-data".into());
    assert_eq!(s.storage_dir().unwrap(), std::path::PathBuf::from("/tmp/spoty-data"));
    assert_eq!(
        s.log_file().unwrap(),
        std::path::PathBuf::from("/tmp/spoty-data/spoty.log")
    );

    s.log.file = Some("/tmp/elsewhere.log".into());
    assert_eq!(s.log_file().unwrap(), std::path::PathBuf::from("/tmp/elsewhere.log"));
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
fetch_timeout_secs = 4
volume = 0.4

[playback]
shuffle = true
repeat = true

[controls]
scrub_seconds = 9
volume_step = 0.1

[ui]
header_text = "hello"
tick_ms = 250
now_playing_fields = ["artist", "img"]
now_playing_separator = " • "
time_fields = ["elapsed", "remaining"]

[storage]
key = "other_key"
dir = "/tmp/spoty-store"

[log]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SPOTY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SPOTY__AUDIO__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.fetch_timeout_secs, 4);
    assert_eq!(s.audio.volume, 0.4);
    assert!(s.playback.shuffle);
    assert!(s.playback.repeat);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.volume_step, 0.1);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.tick_ms, 250);
    assert_eq!(s.ui.now_playing_fields, vec![TrackField::Artist, TrackField::Image]);
    assert_eq!(s.ui.now_playing_separator, " • ");
    assert_eq!(s.ui.time_fields, vec![TimeField::Elapsed, TimeField::Remaining]);
    assert_eq!(s.storage.key, "other_key");
    assert_eq!(s.storage.dir, Some("/tmp/spoty-store".into()));
    assert_eq!(s.log.level, "debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
scrub_seconds = 5
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SPOTY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SPOTY__CONTROLS__SCRUB_SECONDS", "12");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.scrub_seconds, 12);
}

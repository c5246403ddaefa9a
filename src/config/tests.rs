use super::load::{default_config_path, default_data_dir, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
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
fn resolve_config_path_prefers_cadenza_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", "/tmp/cadenza-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/cadenza-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("cadenza")
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
        PathBuf::from("/tmp/home-dir/.local/share/cadenza")
    );
}

#[test]
fn store_and_log_paths_default_into_data_dir() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_DATA_HOME", "/tmp/xdg-data");

    let s = Settings::default();
    assert_eq!(s.store_path(), PathBuf::from("/tmp/xdg-data/cadenza/musicdb.db"));
    assert_eq!(s.log_path(), PathBuf::from("/tmp/xdg-data/cadenza/cadenza.log"));
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[store]
path = "/var/lib/cadenza/songs.db"

[library]
assets_dir = "/usr/share/cadenza/assets"
seed = false

[audio]
fetch_timeout_ms = 2500

[ui]
header_text = "hello"
show_elapsed = false

[logging]
level = "cadenza=debug"
file = "/tmp/cadenza.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENZA__AUDIO__FETCH_TIMEOUT_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.store_path(), PathBuf::from("/var/lib/cadenza/songs.db"));
    assert_eq!(s.library.assets_dir, PathBuf::from("/usr/share/cadenza/assets"));
    assert!(!s.library.seed);
    assert_eq!(s.audio.fetch_timeout_ms, 2500);
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_elapsed);
    assert_eq!(s.logging.level, "cadenza=debug");
    assert_eq!(s.log_path(), PathBuf::from("/tmp/cadenza.log"));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
fetch_timeout_ms = 2500
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CADENZA__AUDIO__FETCH_TIMEOUT_MS", "700");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.fetch_timeout_ms, 700);
}

#[test]
fn validate_rejects_zero_timeout_and_bad_log_level() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.audio.fetch_timeout_ms = 0;
    assert!(s.validate().is_err());

    s.audio.fetch_timeout_ms = 1;
    s.logging.level = "cadenza=notalevel".to_string();
    assert!(s.validate().is_err());
}

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use p5mirror::config::{ConfigLoader, TransportFailurePolicy};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Point XDG_CONFIG_HOME at a scratch directory for the duration of `f`.
fn with_xdg_env<F: FnOnce(&TempDir)>(f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp = TempDir::new().unwrap();
    let previous = std::env::var("XDG_CONFIG_HOME").ok();
    std::env::set_var("XDG_CONFIG_HOME", temp.path());
    f(&temp);
    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
}

#[test]
fn defaults_apply_without_any_files() {
    with_xdg_env(|_| {
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.output_root, PathBuf::from("output"));
        assert_eq!(config.cache_dir, PathBuf::from("."));
        assert_eq!(config.editor_base_url, "https://editor.p5js.org");
        assert_eq!(config.http.timeout_secs, None);
        assert_eq!(
            config.downloads.on_transport_error,
            TransportFailurePolicy::Skip
        );
    });
}

#[test]
fn explicit_file_overrides_global_file() {
    with_xdg_env(|temp| {
        let global_dir = temp.path().join("p5mirror");
        fs::create_dir_all(&global_dir).unwrap();
        fs::write(
            global_dir.join("config.toml"),
            "output_root = \"/srv/global\"\neditor_base_url = \"https://mirror.example\"\n",
        )
        .unwrap();

        let explicit = temp.path().join("run.toml");
        fs::write(
            &explicit,
            "output_root = \"/srv/explicit\"\n\n[http]\ntimeout_secs = 30\n\n[downloads]\non_transport_error = \"abort\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&explicit)).unwrap();
        assert_eq!(config.output_root, PathBuf::from("/srv/explicit"));
        assert_eq!(config.editor_base_url, "https://mirror.example");
        assert_eq!(config.http.timeout_secs, Some(30));
        assert_eq!(
            config.downloads.on_transport_error,
            TransportFailurePolicy::Abort
        );
    });
}

#[test]
fn environment_overrides_files() {
    with_xdg_env(|temp| {
        let explicit = temp.path().join("run.toml");
        fs::write(&explicit, "cache_dir = \"/srv/cache\"\n").unwrap();

        std::env::set_var("P5MIRROR__CACHE_DIR", "/env/cache");
        let result = ConfigLoader::load(Some(&explicit));
        std::env::remove_var("P5MIRROR__CACHE_DIR");

        assert_eq!(result.unwrap().cache_dir, PathBuf::from("/env/cache"));
    });
}

#[test]
fn invalid_values_are_rejected() {
    with_xdg_env(|temp| {
        let explicit = temp.path().join("bad.toml");
        fs::write(&explicit, "editor_base_url = \"editor.p5js.org\"\n").unwrap();
        assert!(ConfigLoader::load(Some(&explicit)).is_err());

        let missing = temp.path().join("missing.toml");
        assert!(ConfigLoader::load(Some(&missing)).is_err());
    });
}

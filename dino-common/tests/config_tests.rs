//! Configuration resolution tests
//!
//! Tests that touch DINO_CONFIG are marked #[serial] so they never race
//! on the process environment.

use dino_common::config::{resolve_config_path, ConfigOverrides, TomlConfig, CONFIG_ENV_VAR};
use dino_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/dino-from-env.toml");

    let explicit = PathBuf::from("/tmp/dino-explicit.toml");
    let resolved = resolve_config_path(Some(&explicit));
    assert_eq!(resolved, Some(explicit));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_without_explicit_path() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/dino-from-env.toml");

    let resolved = resolve_config_path(None);
    assert_eq!(resolved, Some(PathBuf::from("/tmp/dino-from-env.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_load_reads_file_from_env_var() {
    let file = write_config(
        r#"
data_file = "/srv/dino/dino.json"
images_dir = "/srv/dino/images"
port = 6000

[logging]
level = "debug"
"#,
    );
    env::set_var(CONFIG_ENV_VAR, file.path());

    let config = TomlConfig::load(None).expect("load config");
    assert_eq!(config.data_file, PathBuf::from("/srv/dino/dino.json"));
    assert_eq!(config.images_dir, PathBuf::from("/srv/dino/images"));
    assert_eq!(config.port, 6000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.logging.level, "debug");

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_explicit_file_falls_back_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);

    let missing = PathBuf::from("/nonexistent/dino-compare/config.toml");
    let config = TomlConfig::load(Some(&missing)).expect("missing file is not fatal");
    assert_eq!(config, TomlConfig::default());
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let file = write_config("port = \"not a number\"\n");

    let err = TomlConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_cli_overrides_apply_after_file() {
    let file = write_config("port = 6000\ndata_file = \"file.json\"\n");

    let config = TomlConfig::from_file(file.path())
        .expect("parse config")
        .with_overrides(ConfigOverrides {
            data_file: None,
            images_dir: Some(PathBuf::from("/cli/images")),
            port: Some(7000),
        });

    assert_eq!(config.data_file, PathBuf::from("file.json"));
    assert_eq!(config.images_dir, PathBuf::from("/cli/images"));
    assert_eq!(config.port, 7000);
}

// tests/config_test.rs
use git_release::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
#[serial]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[changelog]
minor_heading = "New features"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.changelog.minor_heading, "New features");
    assert_eq!(config.changelog.major_heading, "Major changes (breaking)");
    assert_eq!(config.release, Config::default().release);
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/gitrelease.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.changelog.major_heading, "### Breaking");
    assert_eq!(config.release.tag_prefix, "release-");
    assert_eq!(
        config.release.repository_url.as_deref(),
        Some("https://github.com/acme/widget")
    );
}

#[test]
#[serial]
fn test_invalid_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[release]\ntag_prefix = 5\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_discovers_config_in_current_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[changelog]\npatch_heading = \"Chores\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().changelog.patch_heading, "Chores");
}

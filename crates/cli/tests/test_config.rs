use cli::{AppConfig, ConfigLoader, ConfigSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Уникальный префикс, чтобы окружение машины не влияло на тесты
const TEST_PREFIX: &str = "SUMMARIZE_CFG_TEST_UNSET_";

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults_when_no_file_found() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new()
        .with_search_paths(vec![dir.path().join("missing.toml")])
        .with_env_prefix(TEST_PREFIX);

    let (config, source) = loader.load().unwrap();

    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.summarizer.top_fraction, 0.2);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "summarize.toml",
        r#"
[embedding]
endpoint = "http://localhost:7997/v1"
batch_size = 8

[summarizer]
top_fraction = 0.4
"#,
    );

    let loader = ConfigLoader::new()
        .with_path(path.clone())
        .with_env_prefix(TEST_PREFIX);
    let (config, source) = loader.load().unwrap();

    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.embedding.endpoint, "http://localhost:7997/v1");
    assert_eq!(config.embedding.batch_size, 8);
    assert_eq!(config.embedding.model_name, AppConfig::default().embedding.model_name);
    assert_eq!(config.summarizer.top_fraction, 0.4);
}

#[test]
fn test_missing_explicit_path_is_error() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new()
        .with_path(dir.path().join("nope.toml"))
        .with_env_prefix(TEST_PREFIX);

    let err = loader.load().unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_first_search_path_wins() {
    let dir = TempDir::new().unwrap();
    let first = write_config(&dir, "first.toml", "[summarizer]\ntop_fraction = 0.1\n");
    let second = write_config(&dir, "second.toml", "[summarizer]\ntop_fraction = 0.9\n");

    let loader = ConfigLoader::new()
        .with_search_paths(vec![dir.path().join("absent.toml"), first.clone(), second])
        .with_env_prefix(TEST_PREFIX);
    let (config, source) = loader.load().unwrap();

    assert_eq!(source, ConfigSource::File(first));
    assert_eq!(config.summarizer.top_fraction, 0.1);
}

#[test]
fn test_invalid_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "broken.toml", "[summarizer\ntop_fraction = ");

    let err = ConfigLoader::load_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_out_of_range_fraction_loads_but_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "[summarizer]\ntop_fraction = 1.5\n");

    let config = ConfigLoader::load_file(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(format!("{err:#}").contains("top_fraction"));
}

#[test]
fn test_overrides_on_top_of_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "summarize.toml", "[embedding]\nmodel_name = \"from-file\"\n");

    let loader = ConfigLoader::new().with_path(path.clone());
    let config = ConfigLoader::load_file(&path).unwrap();
    let config = loader
        .apply_overrides(config, |key| {
            (key == "SUMMARIZE_MODEL").then(|| "from-env".to_string())
        })
        .unwrap();

    assert_eq!(config.embedding.model_name, "from-env");
}

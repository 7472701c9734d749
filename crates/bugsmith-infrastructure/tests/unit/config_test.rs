//! Tests for configuration loading

use bugsmith_domain::{Error, Language};
use bugsmith_infrastructure::config::{AppConfig, ConfigLoader};
use bugsmith_providers::modifiers::ModifierKind;
use tempfile::TempDir;

fn write_config(temp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join("bugsmith.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_env_prefix("BUGSMITH_TEST_MISSING")
        .with_config_path(temp.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_values_override_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
seed = 7
max_bugs_per_entity = 2

[logging]
level = "debug"

[modifiers.go]
func_pm_ctrl_invert_if = 0.5
func_pm_ctrl_shuffle = 0.1
"#,
    );

    let (config, manifest) = ConfigLoader::new()
        .with_env_prefix("BUGSMITH_TEST_FILE")
        .with_config_path(&path)
        .load_manifest()
        .unwrap();

    assert_eq!(config.seed, 7);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
    assert_eq!(manifest.seed(), 7);
    assert_eq!(manifest.max_bugs_per_entity(), Some(2));
    assert_eq!(
        manifest.modifiers_for(Language::Go),
        &[(ModifierKind::InvertIf, 0.5), (ModifierKind::ShuffleLines, 0.1)]
    );
    assert_eq!(
        manifest.modifiers_for(Language::Python).len(),
        ModifierKind::ALL.len()
    );
}

#[test]
fn test_unknown_modifier_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[modifiers.python]\nfunc_pm_nope = 0.5\n");
    let result = ConfigLoader::new()
        .with_env_prefix("BUGSMITH_TEST_UNKNOWN")
        .with_config_path(&path)
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_likelihood_out_of_range_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[modifiers.go]\nfunc_pm_remove_loop = 2.0\n");
    let result = ConfigLoader::new()
        .with_env_prefix("BUGSMITH_TEST_RANGE")
        .with_config_path(&path)
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_invalid_log_level_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[logging]\nlevel = \"loud\"\n");
    let result = ConfigLoader::new()
        .with_env_prefix("BUGSMITH_TEST_LEVEL")
        .with_config_path(&path)
        .load();
    assert!(result.is_err());
}

#[test]
fn test_saved_config_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.seed = 99;
    config.modifiers.insert(
        Language::Python,
        [("func_pm_remove_wrapper".to_string(), 0.75)].into_iter().collect(),
    );

    let loader = ConfigLoader::new()
        .with_env_prefix("BUGSMITH_TEST_SAVE")
        .with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.load().unwrap(), config);
}

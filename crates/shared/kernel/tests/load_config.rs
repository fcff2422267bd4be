use classkit_domain::config::ClassroomConfig;
use classkit_kernel::config::{ConfigError, environment, load_config, load_config_with};
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("classroom.toml");
    fs::write(
        &path,
        r#"
[roster]
name_column = "student"

[cold_call]
sample_size = 4
include_excused = true

[preferences]
delimiters = ["/", ";"]
"#,
    )?;

    let cfg: ClassroomConfig = load_config(Some(&path))?;

    assert_eq!(cfg.roster.name_column, "student");
    assert_eq!(cfg.roster.preference_column, "preferences");
    assert_eq!(cfg.cold_call.sample_size, 4);
    assert!(cfg.cold_call.include_excused);
    assert_eq!(cfg.preferences.delimiters, vec!["/".to_owned(), ";".to_owned()]);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<ClassroomConfig>(Some(&path)).unwrap_err();

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn malformed_values_fail_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[cold_call]\nsample_size = \"many\"\n")?;

    let err = load_config::<ClassroomConfig>(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

fn env_vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn typed_environment_overrides_are_applied() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("classroom.toml");
    fs::write(&path, "[cold_call]\nsample_size = 1\n")?;

    let env = environment().source(Some(env_vars(&[
        ("CLASSKIT__COLD_CALL__SAMPLE_SIZE", "3"),
        ("CLASSKIT__COLD_CALL__INCLUDE_EXCUSED", "true"),
        ("CLASSKIT__ROSTER__NAME_COLUMN", "pupil"),
        ("CLASSKIT__PREFERENCES__DELIMITERS", "/ ;"),
    ])));
    let cfg: ClassroomConfig = load_config_with(Some(&path), env)?;

    assert_eq!(cfg.cold_call.sample_size, 3);
    assert!(cfg.cold_call.include_excused);
    assert_eq!(cfg.roster.name_column, "pupil");
    assert_eq!(cfg.preferences.delimiters, vec!["/".to_owned(), ";".to_owned()]);
    Ok(())
}

#[test]
fn unprefixed_variables_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let env = environment().source(Some(env_vars(&[("COLD_CALL__SAMPLE_SIZE", "9")])));
    let cfg: ClassroomConfig = load_config_with(None::<&str>, env)?;

    assert_eq!(cfg.cold_call.sample_size, 1);
    Ok(())
}

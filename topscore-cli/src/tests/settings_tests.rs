use super::*;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.max_upload_bytes, 15_728_640);
    assert_eq!(settings.sheet_name, "INVOER");
}

#[test]
fn test_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[input]
max_upload_bytes = 1024
sheet_name = "UITSLAGEN"

[clubs]
extra = ["SV Nieuwe Club", "  "]

[output]
dir = "/tmp/topscore"
"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.max_upload_bytes, 1024);
    assert_eq!(settings.sheet_name, "UITSLAGEN");
    assert_eq!(settings.output_dir, Some(PathBuf::from("/tmp/topscore")));

    let clubs = settings.clubs();
    assert!(clubs.contains("SV Nieuwe Club"));
    assert!(clubs.contains("Heer"));
    assert_eq!(clubs.len(), ClubRegistry::default().len() + 1);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let settings = Settings::parse("[clubs]\nextra = [\"Ajax\"]\n").unwrap();
    assert_eq!(settings.sheet_name, DEFAULT_SHEET_NAME);
    assert_eq!(settings.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    assert_eq!(settings.extra_clubs, vec!["Ajax".to_string()]);
}

#[test]
fn test_invalid_values_are_errors() {
    assert!(Settings::parse("[input]\nmax_upload_bytes = \"big\"\n").is_err());
    assert!(Settings::parse("[input]\nmax_upload_bytes = 0\n").is_err());
    assert!(Settings::parse("[clubs]\nextra = \"Ajax\"\n").is_err());
    assert!(Settings::parse("not toml at all [").is_err());
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[input\n").unwrap();
    assert!(matches!(Settings::load(&path), Err(CliError::Config(_))));
}

#[test]
fn test_sheet_override() {
    let settings = Settings::default();
    assert_eq!(settings.cumulate_options(None).sheet_name, "INVOER");
    assert_eq!(settings.cumulate_options(Some("Blad1")).sheet_name, "Blad1");
}

#[test]
fn test_settings_path_location() {
    let path = settings_path();
    assert!(path.ends_with("topscore/settings.toml"));
}

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_test_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("ppi-domains.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_values() {
    let config = Config::new();
    assert_eq!(config.analysis.degree_threshold, 100);
    assert_eq!(config.analysis.dpi, 1200);
    assert_eq!(config.biomart.dataset, "hsapiens_gene_ensembl");
    assert_eq!(config.biomart.host, "http://www.ensembl.org");
    assert_eq!(config.biomart.attributes, vec!["pfam", "ensembl_peptide_id"]);
    assert_eq!(config.biomart.timeout_secs, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_pixel_size_scales_with_dpi() {
    let analysis = AnalysisConfig {
        dpi: 100,
        width_in: 6.0,
        height_in: 4.5,
        ..AnalysisConfig::default()
    };
    assert_eq!(analysis.pixel_size(), (600, 450));
    assert_eq!(AnalysisConfig::default().pixel_size(), (6000, 6000));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ConfigLoader::parse(
        r#"
[analysis]
degree_threshold = 50

[biomart]
host = "https://useast.ensembl.org"
"#,
    )
    .unwrap();

    assert_eq!(config.analysis.degree_threshold, 50);
    assert_eq!(config.analysis.dpi, 1200);
    assert_eq!(config.biomart.host, "https://useast.ensembl.org");
    assert_eq!(config.biomart.dataset, "hsapiens_gene_ensembl");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = ConfigLoader::parse("[analysis\ndpi = ").unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
}

#[test]
fn test_validate_rejects_zero_values() {
    let mut config = Config::new();
    config.analysis.dpi = 0;
    let err = config.validate().unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);

    let mut config = Config::new();
    config.biomart.attributes.clear();
    assert!(config.validate().is_err());

    let mut config = Config::new();
    config.analysis.height_in = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_caps_pixel_size() {
    let mut config = Config::new();
    config.analysis.width_in = 1000.0;
    let err = config.validate().unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    assert!(err.to_string().contains("analysis.width_in"));

    let mut config = Config::new();
    config.analysis.dpi = u32::MAX;
    assert!(config.validate().is_err());

    let mut config = Config::new();
    config.analysis.height_in = 13.0;
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_load_without_file_uses_defaults() {
    let config = ConfigLoader::new(None).load().await.unwrap();
    assert_eq!(config, Config::default());
}

#[tokio::test]
async fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_test_config(
        &temp_dir,
        r#"
[analysis]
dpi = 300
progress = false

[biomart]
timeout_secs = 60
connect_timeout_secs = 5
"#,
    );

    let config = ConfigLoader::new(Some(path)).load().await.unwrap();
    assert_eq!(config.analysis.dpi, 300);
    assert!(!config.analysis.progress);
    assert_eq!(config.biomart.timeout_secs, Some(60));
    assert_eq!(config.biomart.connect_timeout_secs, 5);
}

#[tokio::test]
async fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::new(Some(temp_dir.path().join("absent.toml")))
        .load()
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
}

#[tokio::test]
async fn test_load_validates_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_test_config(&temp_dir, "[biomart]\ntimeout_secs = 0\n");
    let err = ConfigLoader::new(Some(path)).load().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
}

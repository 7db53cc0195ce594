use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use tempfile::TempDir;
use vin_lookup::utils::validation::Validate;
use vin_lookup::{CliConfig, LookupEngine, NhtsaClient, Settings};

#[tokio::test]
async fn test_toml_endpoint_drives_lookup() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vpic/DecodeVinValues/1HGCM82633A004352")
            .query_param("format", "json");
        then.status(200).json_body(serde_json::json!({
            "Results": [{"ModelYear": "2003", "Make": "HONDA", "Model": "Accord"}]
        }));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("vin-lookup.toml");
    let config_content = format!(
        r#"
[service]
endpoint = "{}"
timeout_seconds = 5

[display]
show_banner = false
"#,
        server.url("/vpic/DecodeVinValues")
    );
    tokio::fs::write(&config_path, config_content).await?;

    let cli = CliConfig::parse_from(["vin-lookup", "--config", config_path.to_str().unwrap()]);
    let settings = Settings::resolve(&cli)?;
    settings.validate()?;
    assert!(!settings.show_banner);
    assert_eq!(settings.timeout_seconds, 5);

    let engine = LookupEngine::new(NhtsaClient::from_config(&settings)?);
    let outcome = engine.run("1HGCM82633A004352").await;

    api_mock.assert();
    let info = outcome.vehicle().expect("vehicle decoded");
    assert_eq!(info.model, "Accord");
    Ok(())
}

#[tokio::test]
async fn test_cli_flag_overrides_file_endpoint() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/flag/1HGCM82633A004352");
        then.status(200).json_body(serde_json::json!({"Results": []}));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("vin-lookup.toml");
    tokio::fs::write(
        &config_path,
        "[service]\nendpoint = \"http://127.0.0.1:9/unused\"\n",
    )
    .await?;

    let flag_endpoint = server.url("/flag");
    let cli = CliConfig::parse_from([
        "vin-lookup",
        "--config",
        config_path.to_str().unwrap(),
        "--api-endpoint",
        flag_endpoint.as_str(),
    ]);
    let settings = Settings::resolve(&cli)?;

    let engine = LookupEngine::new(NhtsaClient::from_config(&settings)?);
    let outcome = engine.run("1HGCM82633A004352").await;

    api_mock.assert_hits(1);
    assert!(matches!(outcome, vin_lookup::LookupOutcome::Incomplete));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let cli = CliConfig::parse_from(["vin-lookup", "--config", "/definitely/not/here.toml"]);
    let err = Settings::resolve(&cli).unwrap_err();
    assert!(matches!(err, vin_lookup::VinError::IoError(_)));
}

#[test]
fn test_invalid_file_endpoint_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[service]\nendpoint = \"ftp://example.com\"\n")?;

    let cli = CliConfig::parse_from(["vin-lookup", "--config", config_path.to_str().unwrap()]);
    assert!(Settings::resolve(&cli).is_err());
    Ok(())
}

pub mod toml_config;

use crate::adapters::nhtsa::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, VinError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_LOGO_IMAGE: &str = "assets/logo_image.png";
pub const DEFAULT_CAR_IMAGE: &str = "assets/car_image.png";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "vin-lookup")]
#[command(about = "Decode a VIN into model year, make and model via NHTSA vPIC")]
pub struct CliConfig {
    /// VIN to decode once; omit for an interactive prompt
    #[arg(long)]
    pub vin: Option<String>,

    /// Name used in greetings
    #[arg(long)]
    pub name: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub logo_image: Option<String>,

    #[arg(long)]
    pub car_image: Option<String>,

    /// Skip the header and about sections
    #[arg(long)]
    pub no_banner: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved settings: defaults, then TOML, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
    pub logo_image: String,
    pub car_image: String,
    pub show_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            logo_image: DEFAULT_LOGO_IMAGE.to_string(),
            car_image: DEFAULT_CAR_IMAGE.to_string(),
            show_banner: true,
        }
    }
}

impl Settings {
    pub fn merge_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(endpoint) = &config.service.endpoint {
            self.api_endpoint = endpoint.clone();
        }
        if let Some(timeout) = config.service.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(logo) = &config.display.logo_image {
            self.logo_image = logo.clone();
        }
        if let Some(car) = &config.display.car_image {
            self.car_image = car.clone();
        }
        if let Some(show) = config.display.show_banner {
            self.show_banner = show;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn merge_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(endpoint) = &cli.api_endpoint {
            self.api_endpoint = endpoint.clone();
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(logo) = &cli.logo_image {
            self.logo_image = logo.clone();
        }
        if let Some(car) = &cli.car_image {
            self.car_image = car.clone();
        }
        if cli.no_banner {
            self.show_banner = false;
        }
        self
    }

    /// Loads `--config` when given, then applies the remaining flags.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = &cli.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            settings = settings.merge_toml(&file_config);
        }
        Ok(settings.merge_cli(cli))
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn logo_image(&self) -> &str {
        &self.logo_image
    }

    fn car_image(&self) -> &str {
        &self.car_image
    }

    fn show_banner(&self) -> bool {
        self.show_banner
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.api_endpoint.trim().is_empty() {
            return Err(VinError::MissingConfigError {
                field: "api_endpoint".to_string(),
            });
        }
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_non_empty_string("logo_image", &self.logo_image)?;
        validate_path("logo_image", &self.logo_image)?;
        validate_non_empty_string("car_image", &self.car_image)?;
        validate_path("car_image", &self.car_image)?;
        Ok(())
    }
}

//! NHTSA vPIC `DecodeVinValues` client.

use crate::core::{ConfigProvider, VehicleFields, VinDecoder, Vin};
use crate::utils::error::{Result, VinError};
use crate::utils::validation::{validate_range, validate_url};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://vpic.nhtsa.dot.gov/api/vehicles/DecodeVinValues";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const USER_AGENT: &str = concat!("vin-lookup/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DecodeVinValuesResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    results: Vec<DecodedVehicle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DecodedVehicle {
    model_year: Option<String>,
    make: Option<String>,
    model: Option<String>,
}

impl From<DecodedVehicle> for VehicleFields {
    fn from(v: DecodedVehicle) -> Self {
        Self {
            year: v.model_year,
            make: v.make,
            model: v.model,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NhtsaClient {
    endpoint: Url,
    client: Client,
}

impl NhtsaClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if endpoint.cannot_be_a_base() {
            return Err(VinError::InvalidConfigValueError {
                field: "service.endpoint".to_string(),
                value: endpoint.to_string(),
                reason: "Endpoint cannot take a VIN path segment".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_url("service.endpoint", config.api_endpoint())?;
        validate_range("service.timeout_seconds", config.timeout_seconds(), 1, 300)?;
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    /// `{endpoint}/{VIN}?format=json`
    pub fn decode_url(&self, vin: &Vin) -> Url {
        let mut url = self.endpoint.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(vin.as_str());
        }
        url.query_pairs_mut().append_pair("format", "json");
        url
    }
}

#[async_trait]
impl VinDecoder for NhtsaClient {
    async fn decode(&self, vin: &Vin) -> Result<VehicleFields> {
        let url = self.decode_url(vin);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(VinError::ServiceStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: DecodeVinValuesResponse = serde_json::from_str(&body)?;
        if let Some(message) = &parsed.message {
            tracing::debug!("vPIC message: {}", message);
        }

        Ok(parsed
            .results
            .into_iter()
            .next()
            .map(VehicleFields::from)
            .unwrap_or_default())
    }
}

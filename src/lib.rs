pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::NhtsaClient;
pub use crate::app::{Page, Session};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::lookup::LookupEngine;
pub use crate::core::{LookupOutcome, VehicleFields, VehicleInfo, Vin, VinDecoder};
pub use crate::utils::error::{Result, VinError};

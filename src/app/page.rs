use crate::core::{ConfigProvider, LookupOutcome, VehicleInfo};
use crate::domain::model::{StatusKind, StatusMessage};
use crate::utils::error::Result;
use chrono::Datelike;
use std::io::Write;
use std::path::Path;

pub const TITLE: &str = "Vehicle VIN Decoder";
pub const WELCOME: &str = "🚗 Welcome to the Car Dealership VIN Lookup!";
pub const ABOUT: &str = "This app is designed to help car dealerships and automotive \
professionals effortlessly decode Vehicle Identification Numbers (VINs) to retrieve key \
vehicle details such as model, make and model year. By simply entering a 17-character VIN, \
users can access verified vehicle information. The data is fetched in real-time from the \
National Highway Traffic Safety Administration (NHTSA). Whether you're validating trade-ins, \
checking vehicle specs, or streamlining inventory intake, this tool delivers quick and \
reliable insights.";
pub const VIN_PROMPT: &str = "Enter a 17-character VIN below to decode the vehicle info.";
pub const DECODING: &str = "Decoding VIN...";
pub const DECODED: &str = "VIN decoded successfully!";

/// First character uppercased, the rest lowercased.
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn empty_vin_message(name: &str) -> String {
    let name = capitalize_name(name);
    if name.is_empty() {
        "Please enter a VIN before fetching the vehicle information.".to_string()
    } else {
        format!(
            "Please enter a VIN before fetching the vehicle information, {}.",
            name
        )
    }
}

pub fn incomplete_message(name: &str) -> String {
    let name = capitalize_name(name);
    if name.is_empty() {
        "Incomplete vehicle data returned. Please verify the VIN and try again.".to_string()
    } else {
        format!(
            "Incomplete vehicle data returned. {}, please verify the VIN and try again.",
            name
        )
    }
}

/// Status line for a finished lookup.
pub fn status_for(outcome: &LookupOutcome, name: &str) -> StatusMessage {
    match outcome {
        LookupOutcome::Decoded(_) => StatusMessage::new(StatusKind::Success, DECODED),
        LookupOutcome::Incomplete => {
            StatusMessage::new(StatusKind::Warning, incomplete_message(name))
        }
        LookupOutcome::Failed(e) if e.is_format_error() => {
            StatusMessage::new(StatusKind::Error, e.to_string())
        }
        LookupOutcome::Failed(e) => StatusMessage::new(
            StatusKind::Error,
            format!("An error occurred while decoding the VIN: {}", e),
        ),
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    logo_image: String,
    car_image: String,
    show_banner: bool,
}

impl Page {
    pub fn new(
        logo_image: impl Into<String>,
        car_image: impl Into<String>,
        show_banner: bool,
    ) -> Self {
        Self {
            logo_image: logo_image.into(),
            car_image: car_image.into(),
            show_banner,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.logo_image(), config.car_image(), config.show_banner())
    }

    fn render_image<W: Write>(&self, out: &mut W, path: &str) -> Result<()> {
        if !Path::new(path).exists() {
            tracing::debug!("Image not found on disk: {}", path);
        }
        writeln!(out, "🖼  {}", path)?;
        Ok(())
    }

    pub fn render_header<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.show_banner {
            return Ok(());
        }
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", "*".repeat(50))?;
        writeln!(out, "{}", WELCOME)?;
        self.render_image(out, &self.logo_image)?;
        writeln!(out, "---")?;
        writeln!(out, "ℹ️ About this app")?;
        writeln!(out, "{}", ABOUT)?;
        writeln!(out, "{}", "*".repeat(80))?;
        Ok(())
    }

    pub fn render_greeting<W: Write>(&self, out: &mut W, name: &str) -> Result<()> {
        let name = capitalize_name(name);
        if !name.is_empty() {
            writeln!(out, "👋 Hello, {}!", name)?;
            writeln!(out, "---")?;
            writeln!(out, "{}", VIN_PROMPT)?;
        }
        Ok(())
    }

    pub fn render_status<W: Write>(&self, out: &mut W, status: &StatusMessage) -> Result<()> {
        writeln!(out, "{}", status)?;
        Ok(())
    }

    pub fn render_vehicle<W: Write>(
        &self,
        out: &mut W,
        info: &VehicleInfo,
        name: &str,
    ) -> Result<()> {
        self.render_image(out, &self.car_image)?;
        let name = capitalize_name(name);
        if name.is_empty() {
            writeln!(out, "Below are the vehicle details:")?;
        } else {
            writeln!(out, "Below are the vehicle details, {}:", name)?;
        }
        writeln!(out, "🔍 Vehicle Information")?;
        writeln!(out, "Make: {}", info.make)?;
        writeln!(out, "Model: {}", info.model)?;
        writeln!(out, "Model Year: {}", info.year)?;
        Ok(())
    }

    /// Status line plus, on success only, the vehicle details.
    pub fn render_outcome<W: Write>(
        &self,
        out: &mut W,
        outcome: &LookupOutcome,
        name: &str,
    ) -> Result<()> {
        self.render_status(out, &status_for(outcome, name))?;
        if let LookupOutcome::Decoded(info) = outcome {
            self.render_vehicle(out, info, name)?;
        }
        Ok(())
    }

    pub fn render_footer<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "___")?;
        writeln!(
            out,
            "© {} Car Dealership VIN Lookup",
            chrono::Local::now().year()
        )?;
        Ok(())
    }
}

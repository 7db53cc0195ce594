use crate::utils::error::{Result, VinError};
use crate::utils::validation::validate_vin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A VIN that has passed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vin(String);

impl Vin {
    pub fn parse(input: &str) -> Result<Self> {
        validate_vin(input)?;
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Raw answer from a lookup service; any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleFields {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
}

impl VehicleFields {
    /// All three fields, trimmed, or `None` if any is missing or blank.
    pub fn into_complete(self) -> Option<VehicleInfo> {
        fn present(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Some(VehicleInfo {
            year: present(self.year)?,
            make: present(self.make)?,
            model: present(self.model)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub year: String,
    pub make: String,
    pub model: String,
}

#[derive(Debug)]
pub enum LookupOutcome {
    Decoded(VehicleInfo),
    Incomplete,
    Failed(VinError),
}

impl LookupOutcome {
    pub fn is_decoded(&self) -> bool {
        matches!(self, LookupOutcome::Decoded(_))
    }

    pub fn vehicle(&self) -> Option<&VehicleInfo> {
        match self {
            LookupOutcome::Decoded(info) => Some(info),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&VinError> {
        match self {
            LookupOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Process exit status for a one-shot lookup.
    pub fn exit_code(&self) -> i32 {
        match self {
            LookupOutcome::Decoded(_) => 0,
            LookupOutcome::Failed(e) if e.is_format_error() => 1,
            LookupOutcome::Incomplete => 2,
            LookupOutcome::Failed(_) => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Info => "ℹ️",
            StatusKind::Success => "✅",
            StatusKind::Warning => "⚠️",
            StatusKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.icon(), self.text)
    }
}

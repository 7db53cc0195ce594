use crate::utils::error::{VinError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub const VIN_LENGTH: usize = 17;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn disallowed_vin_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anything outside A-H, J-N, P, R-Z, 0-9.
    RE.get_or_init(|| Regex::new(r"[^A-HJ-NPR-Z0-9]").expect("static VIN pattern"))
}

/// Checks VIN shape only: length first, then alphabet. No check digit.
pub fn validate_vin(input: &str) -> Result<()> {
    let length = input.chars().count();
    if length != VIN_LENGTH {
        return Err(VinError::VinLengthError { length });
    }

    if let Some(found) = disallowed_vin_char().find(input) {
        let invalid = found.as_str().chars().next().unwrap_or_default();
        return Err(VinError::VinAlphabetError { invalid });
    }

    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(VinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(VinError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(VinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(VinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(VinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(VinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vin_accepts_known_vin() {
        assert!(validate_vin("1HGCM82633A004352").is_ok());
        assert!(validate_vin("ABCDEFGHJKLMNPRST").is_ok());
        assert!(validate_vin("UVWXYZ01234567890").is_ok());
    }

    #[test]
    fn test_validate_vin_rejects_wrong_length() {
        for input in ["", "1HGCM82633A00435", "1HGCM82633A0043521", "A"] {
            match validate_vin(input) {
                Err(VinError::VinLengthError { length }) => {
                    assert_eq!(length, input.chars().count())
                }
                other => panic!("expected length error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_validate_vin_length_checked_before_alphabet() {
        assert!(matches!(
            validate_vin("QQQ"),
            Err(VinError::VinLengthError { length: 3 })
        ));
    }

    #[test]
    fn test_validate_vin_rejects_i_o_q_in_every_position() {
        let base = "1HGCM82633A004352";
        for bad in ['I', 'O', 'Q'] {
            for pos in 0..VIN_LENGTH {
                let mut chars: Vec<char> = base.chars().collect();
                chars[pos] = bad;
                let candidate: String = chars.into_iter().collect();
                match validate_vin(&candidate) {
                    Err(VinError::VinAlphabetError { invalid }) => assert_eq!(invalid, bad),
                    other => panic!("expected alphabet error for {}, got {:?}", candidate, other),
                }
            }
        }
    }

    #[test]
    fn test_validate_vin_rejects_lowercase_and_symbols() {
        assert!(matches!(
            validate_vin("1hgcm82633a004352"),
            Err(VinError::VinAlphabetError { invalid: 'h' })
        ));
        assert!(matches!(
            validate_vin("1HGCM82633A00435-"),
            Err(VinError::VinAlphabetError { invalid: '-' })
        ));
    }

    #[test]
    fn test_validate_vin_counts_characters_not_bytes() {
        // 17 characters, more than 17 bytes
        let input = "1HGCM82633A00435É";
        assert!(matches!(
            validate_vin(input),
            Err(VinError::VinAlphabetError { invalid: 'É' })
        ));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("service.endpoint", "https://example.com").is_ok());
        assert!(validate_url("service.endpoint", "http://example.com").is_ok());
        assert!(validate_url("service.endpoint", "").is_err());
        assert!(validate_url("service.endpoint", "invalid-url").is_err());
        assert!(validate_url("service.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("service.timeout_seconds", 10u64, 1, 120).is_ok());
        assert!(validate_range("service.timeout_seconds", 0u64, 1, 120).is_err());
        assert!(validate_range("service.timeout_seconds", 121u64, 1, 120).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("car_image", "car.png").is_ok());
        assert!(validate_non_empty_string("car_image", "").is_err());
        assert!(validate_non_empty_string("car_image", " \t ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("display.car_image", "assets/car.png").is_ok());
        assert!(validate_path("display.car_image", "").is_err());
        assert!(validate_path("display.car_image", "a\0b").is_err());
    }
}

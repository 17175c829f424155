//! Utils
//!
//! Parameter validation helpers shared by the configuration layer, and the
//! scientific-notation formatting used by the report.
use crate::errors::ChoreographyError;

/// Format a float in scientific notation with a fixed mantissa precision
/// and a signed exponent padded to at least two digits (`3.39e-02`,
/// `1.00e+00`, `1.18e-38`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // Non-finite values render without an exponent.
        None => rendered,
    }
}

/// Validate that a float parameter is a real value within `[min, max]`.
pub fn validate_float_parameter(value: f64, min: f64, max: f64, parameter: &str) -> Result<(), ChoreographyError> {
    if value.is_nan() || value < min || max < value {
        Err(ChoreographyError::InvalidParameter(
            parameter.to_string(),
            format!("real value within range {} and {}", min, max),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Probabilities live in the closed unit interval.
pub fn validate_probability(value: f64, parameter: &str) -> Result<(), ChoreographyError> {
    validate_float_parameter(value, 0.0, 1.0, parameter)
}

/// Validate that an integer parameter is nonzero.
pub fn validate_positive_int(value: usize, parameter: &str) -> Result<(), ChoreographyError> {
    if value == 0 {
        Err(ChoreographyError::InvalidParameter(
            parameter.to_string(),
            "a positive integer".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scientific_pads_exponent() {
        assert_eq!(format_scientific(0.0338948535246893, 2), "3.39e-02");
        assert_eq!(format_scientific(0.891, 2), "8.91e-01");
        assert_eq!(format_scientific(1.0, 2), "1.00e+00");
        assert_eq!(format_scientific(0.0, 2), "0.00e+00");
        // Exponents already at two digits or more pass through unpadded.
        assert_eq!(format_scientific(1.18e-38, 2), "1.18e-38");
        assert_eq!(format_scientific(2.5e-308, 2), "2.50e-308");
    }

    #[test]
    fn test_validate_float_parameter() {
        assert!(validate_float_parameter(0.5, 0.0, 1.0, "x").is_ok());
        assert!(validate_float_parameter(0.0, 0.0, 1.0, "x").is_ok());
        assert!(validate_float_parameter(1.0, 0.0, 1.0, "x").is_ok());
        assert!(validate_float_parameter(-0.1, 0.0, 1.0, "x").is_err());
        assert!(validate_float_parameter(1.1, 0.0, 1.0, "x").is_err());
        assert!(validate_float_parameter(f64::NAN, 0.0, 1.0, "x").is_err());
    }

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability(0.15, "collapse_during_pulse").is_ok());
        let err = validate_probability(1.5, "collapse_during_pulse").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("collapse_during_pulse"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_validate_positive_int() {
        assert!(validate_positive_int(10_000, "trials").is_ok());
        assert!(validate_positive_int(1, "trials").is_ok());
        assert!(validate_positive_int(0, "trials").is_err());
    }
}

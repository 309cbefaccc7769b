use crate::{EngineError, ResultEngine};

/// Parses a user-entered amount into a strictly positive number.
///
/// Accepts `.` or `,` as decimal separator. Empty, non-numeric, zero,
/// negative, and non-finite inputs are all rejected; a conversion must
/// never be issued for them.
pub fn parse_amount(input: &str) -> ResultEngine<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidAmount);
    }

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| EngineError::InvalidAmount)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::InvalidAmount);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount("10.5").unwrap(), 10.5);
        assert_eq!(parse_amount("10,5").unwrap(), 10.5);
        assert_eq!(parse_amount("  2.30 ").unwrap(), 2.3);
        assert_eq!(parse_amount("0.01").unwrap(), 0.01);
    }

    #[test]
    fn parse_rejects_non_positive() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("-0.01").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }
}

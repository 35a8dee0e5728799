//! Discount computation for catalog display.

use thiserror::Error;

/// Errors raised by pricing helpers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// An amount was zero where a divisor is required, negative, or not finite.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Percentage saved against the MRP: `round((mrp - price) / mrp * 100)`.
///
/// Halves round up (toward positive infinity), so `87.5` becomes `88` and `-12.5`
/// becomes `-12`. A price above the MRP is not rejected and yields a negative result.
///
/// # Errors
/// [`PricingError::InvalidInput`] when `mrp` is zero or negative, or when either
/// amount is NaN or infinite, or when the percentage does not fit in an `i64`.
pub fn discount_percent(price: f64, mrp: f64) -> Result<i64, PricingError> {
    if !price.is_finite() || !mrp.is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "amounts must be finite (price {price}, mrp {mrp})"
        )));
    }
    if mrp <= 0.0 {
        return Err(PricingError::InvalidInput(format!("mrp must be positive, got {mrp}")));
    }

    let rounded = ((mrp - price) / mrp * 100.0 + 0.5).floor();
    // i64::MAX as f64 is 2^63, so the range is [-2^63, 2^63)
    let limit = i64::MAX as f64;
    if !(-limit..limit).contains(&rounded) {
        return Err(PricingError::InvalidInput(format!(
            "discount out of range (price {price}, mrp {mrp})"
        )));
    }
    Ok(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(discount_percent(200.0, 250.0), Ok(20));
        assert_eq!(discount_percent(100.0, 100.0), Ok(0));
        assert_eq!(discount_percent(0.0, 80.0), Ok(100));
    }

    #[test]
    fn test_zero_mrp_is_rejected() {
        assert!(matches!(
            discount_percent(10.0, 0.0),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            discount_percent(0.0, 0.0),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_and_non_finite_inputs_are_rejected() {
        assert!(discount_percent(10.0, -5.0).is_err());
        assert!(discount_percent(f64::NAN, 10.0).is_err());
        assert!(discount_percent(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_ratio_is_rejected() {
        assert!(matches!(
            discount_percent(1e300, 1e-300),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            discount_percent(-1e300, 1e-300),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(discount_percent(-1e20, 1.0).is_err());
    }

    #[test]
    fn test_halves_round_up() {
        // 7/8 off = 87.5%
        assert_eq!(discount_percent(1.0, 8.0), Ok(88));
        // price above mrp: -12.5%
        assert_eq!(discount_percent(9.0, 8.0), Ok(-12));
    }

    #[test]
    fn test_demo_catalog_discounts() {
        assert_eq!(discount_percent(180.0, 220.0), Ok(18));
        assert_eq!(discount_percent(160.0, 200.0), Ok(20));
        assert_eq!(discount_percent(220.0, 280.0), Ok(21));
        assert_eq!(discount_percent(140.0, 180.0), Ok(22));
    }
}

use crate::utils::error::{DemoError, Result};

/// Calculates the area of a rectangle. Both dimensions must be strictly
/// positive; no distinction is made between which one failed.
pub fn calculate_area(length: f64, width: f64) -> Result<f64> {
    if length <= 0.0 || width <= 0.0 {
        return Err(DemoError::InvalidArgument {
            message: "Dimensions must be positive".to_string(),
        });
    }
    Ok(length * width)
}

/// Renders an area the way the demonstration reports it: whole values keep
/// one decimal place (42.0 rather than 42), fractional values print as-is.
pub fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{:.1}", area)
    } else {
        area.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_area_positive_dimensions() {
        assert_eq!(calculate_area(10.5, 4.0).unwrap(), 42.0);
        assert_eq!(calculate_area(3.0, 7.0).unwrap(), 21.0);
        assert_eq!(calculate_area(0.5, 0.5).unwrap(), 0.25);
    }

    #[test]
    fn test_calculate_area_rejects_zero() {
        let err = calculate_area(0.0, 5.0).unwrap_err();
        match err {
            DemoError::InvalidArgument { message } => {
                assert_eq!(message, "Dimensions must be positive");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_area_rejects_negative() {
        assert!(calculate_area(-3.0, 5.0).is_err());
        assert!(calculate_area(5.0, -3.0).is_err());
        assert!(calculate_area(-1.0, -1.0).is_err());
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(42.0), "42.0");
        assert_eq!(format_area(0.25), "0.25");
        assert_eq!(format_area(7.0), "7.0");
    }
}

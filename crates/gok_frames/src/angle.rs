//! Angle normalization.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that
/// case folds back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn tiny_negative_is_not_360() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn half_open_180() {
        assert_eq!(normalize_180(180.0), 180.0);
        assert_eq!(normalize_180(-180.0), 180.0);
        assert!((normalize_180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_180(-10.0) + 10.0).abs() < 1e-12);
        assert!((normalize_180(540.5) + 179.5).abs() < 1e-9);
    }
}

//! Newton–Raphson solution of Kepler's equation `M = E − e·sin E`.
//!
//! The iteration budget and tolerance are fixed public constants so a
//! non-converging solve is reported instead of looping.

use std::f64::consts::{PI, TAU};

use crate::error::EphemError;

/// Iteration cap for the Newton solver.
pub const KEPLER_MAX_ITERATIONS: usize = 30;

/// Convergence threshold on |ΔE| in radians.
pub const KEPLER_TOLERANCE_RAD: f64 = 1e-12;

/// Solve Kepler's equation with the default budget.
///
/// # Arguments
/// * `mean_anomaly_rad`: mean anomaly M in radians (any range)
/// * `eccentricity`: orbital eccentricity, must lie in [0, 1)
///
/// Returns the eccentric anomaly E in radians.
pub fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> Result<f64, EphemError> {
    solve_kepler_with(
        mean_anomaly_rad,
        eccentricity,
        KEPLER_MAX_ITERATIONS,
        KEPLER_TOLERANCE_RAD,
    )
}

/// Solve Kepler's equation with an explicit iteration budget and tolerance.
pub fn solve_kepler_with(
    mean_anomaly_rad: f64,
    eccentricity: f64,
    max_iterations: usize,
    tolerance_rad: f64,
) -> Result<f64, EphemError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(EphemError::InvalidElements("eccentricity must be in [0, 1)"));
    }
    if !mean_anomaly_rad.is_finite() {
        return Err(EphemError::InvalidElements("mean anomaly is not finite"));
    }

    // Reduce M to (−π, π] and add the whole revolutions back at the end.
    let m = mean_anomaly_rad - TAU * ((mean_anomaly_rad + PI) / TAU).floor();
    let revolutions = mean_anomaly_rad - m;

    // E0 = ±π for eccentric orbits keeps the Newton steps monotone.
    let mut ecc_anom = if eccentricity < 0.8 { m } else { PI.copysign(m) };

    for _ in 0..max_iterations {
        let f = ecc_anom - eccentricity * ecc_anom.sin() - m;
        let f_prime = 1.0 - eccentricity * ecc_anom.cos();
        let delta = f / f_prime;
        ecc_anom -= delta;
        if delta.abs() < tolerance_rad {
            return Ok(ecc_anom + revolutions);
        }
    }

    Err(EphemError::NonConvergence {
        planet: None,
        iterations: max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(ecc_anom: f64, e: f64, m: f64) -> f64 {
        ecc_anom - e * ecc_anom.sin() - m
    }

    #[test]
    fn circular_orbit_is_identity() {
        let ea = solve_kepler(1.234, 0.0).unwrap();
        assert!((ea - 1.234).abs() < 1e-12);
    }

    #[test]
    fn meeus_example_30a() {
        // e = 0.1, M = 5° → E = 5.554589°
        let ea = solve_kepler(5.0_f64.to_radians(), 0.1).unwrap();
        assert!((ea.to_degrees() - 5.554_589).abs() < 1e-6, "E = {}", ea.to_degrees());
    }

    #[test]
    fn high_eccentricity_converges() {
        for &m in &[0.01, 0.5, 2.0, 3.1, -2.5] {
            let ea = solve_kepler(m, 0.97).unwrap();
            assert!(residual(ea, 0.97, m).abs() < 1e-10, "M = {m}");
        }
    }

    #[test]
    fn planetary_eccentricities_converge() {
        for &e in &[0.0068, 0.0167, 0.0484, 0.0539, 0.0934, 0.2056] {
            for k in 0..36 {
                let m = (k as f64 * 10.0).to_radians();
                let ea = solve_kepler(m, e).unwrap();
                assert!(residual(ea, e, m).abs() < 1e-11);
            }
        }
    }

    #[test]
    fn exhausted_budget_is_reported() {
        let err = solve_kepler_with(3.0, 0.9, 1, 1e-15).unwrap_err();
        assert_eq!(
            err,
            EphemError::NonConvergence {
                planet: None,
                iterations: 1
            }
        );
    }

    #[test]
    fn parabolic_rejected() {
        assert!(matches!(solve_kepler(1.0, 1.0), Err(EphemError::InvalidElements(_))));
        assert!(matches!(solve_kepler(1.0, -0.1), Err(EphemError::InvalidElements(_))));
        assert!(matches!(solve_kepler(f64::NAN, 0.1), Err(EphemError::InvalidElements(_))));
    }
}

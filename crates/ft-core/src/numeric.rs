/// Floating point type used for capacities and flows.
pub type Real = f64;

/// Default absolute tolerance below which a residual capacity counts as exhausted.
///
/// Integral capacities always leave residuals of at least 1, so with this default
/// an integral network behaves exactly as under a strict zero test.
pub const DEFAULT_RESIDUAL_TOLERANCE: Real = 1e-12;

/// Absolute/relative tolerance pair for comparing accumulated flow sums.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Rounding allowance, in units of machine epsilon, for a single flow update.
pub const ROUNDING_EPSILONS: Real = 4.0;

/// Largest overshoot of a flow bound that still counts as landing on it.
///
/// Never smaller than `tolerance`, and grows with `magnitude` so that
/// rounding in `flow + (capacity - flow)` is absorbed at any scale.
#[inline]
pub fn snap_slack(tolerance: Real, magnitude: Real) -> Real {
    tolerance.max(ROUNDING_EPSILONS * Real::EPSILON * magnitude.abs())
}

/// True when `residual` leaves room for more flow under `tolerance`.
#[inline]
pub fn has_room(residual: Real, tolerance: Real) -> bool {
    residual > tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn snap_slack_scales_with_magnitude() {
        assert_eq!(snap_slack(1e-12, 1.0), 1e-12);
        assert_eq!(snap_slack(0.0, 0.0), 0.0);
        // One ulp at 1.3e8 is about 1.5e-8
        assert!(snap_slack(1e-12, 130428571.42857142) > 2e-8);
    }

    #[test]
    fn zero_tolerance_is_exact() {
        assert!(has_room(1e-300, 0.0));
        assert!(!has_room(0.0, 0.0));
        assert!(!has_room(1e-13, DEFAULT_RESIDUAL_TOLERANCE));
        assert!(has_room(1.0, DEFAULT_RESIDUAL_TOLERANCE));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn integral_residuals_always_have_room(r in 1_u32..1_000_000) {
            prop_assert!(has_room(r as Real, DEFAULT_RESIDUAL_TOLERANCE));
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}

//! Step-size policy.
//!
//! Reconciles a problem's proposed step with the distance left to the target
//! time. The adjusted step never exceeds the proposal and never overshoots
//! the target. A step that would leave a remainder smaller than itself is
//! replaced by half of the remaining interval, so the run ends with two
//! comparable steps instead of a normal step followed by a sliver.

/// Relative tolerance used to decide that the present time has reached the
/// target.
///
/// The band scales with the magnitude of the present time, which absorbs the
/// rounding accumulated over many steps.
pub const RELATIVE_TIME_TOLERANCE: f64 = 1e-5;

/// How an adjusted step relates to the proposed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The proposal was used as is.
    Unchanged,

    /// The proposal would overshoot, so the step lands exactly on the target.
    Clamped,

    /// The proposal would leave a sliver, so the remaining interval is split
    /// into two equal steps.
    Halved,
}

/// Result of applying the policy to a proposed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// The target is reached; no step should be attempted.
    Stop,

    /// Attempt a step of size `dt`.
    Step { dt: f64, rule: Rule },
}

impl Adjustment {
    /// Returns the step size, or `None` for [`Adjustment::Stop`].
    #[must_use]
    pub fn dt(&self) -> Option<f64> {
        match self {
            Self::Stop => None,
            Self::Step { dt, .. } => Some(*dt),
        }
    }
}

/// Returns `true` if `present` is close enough to `target` to stop.
///
/// Uses `present * (1 + RELATIVE_TIME_TOLERANCE) >= target`. A present time at
/// or past the target always counts as reached, which matters for negative
/// times where the relative band shrinks instead of grows.
#[must_use]
pub fn is_reached(present: f64, target: f64) -> bool {
    present * (1.0 + RELATIVE_TIME_TOLERANCE) >= target || present >= target
}

/// Adjusts a proposed step `dt` taken at `present` toward `target`.
///
/// Expects `dt >= 0` and `target >= present`.
///
/// - Reached target (see [`is_reached`]): [`Adjustment::Stop`].
/// - `present + dt > target`: clamp to `target - present`.
/// - `present + 2 * dt > target`: halve the remainder, `(target - present) / 2`.
/// - Otherwise: keep `dt`.
///
/// Unless it stops, the returned step is strictly positive and no larger than
/// `dt`, even when rounding in `target - present` would say otherwise.
#[must_use]
pub fn adjust(present: f64, dt: f64, target: f64) -> Adjustment {
    if is_reached(present, target) {
        return Adjustment::Stop;
    }

    let remaining = target - present;
    if present + dt > target {
        Adjustment::Step {
            dt: remaining.min(dt),
            rule: Rule::Clamped,
        }
    } else if present + 2.0 * dt > target {
        Adjustment::Step {
            dt: (remaining / 2.0).min(dt),
            rule: Rule::Halved,
        }
    } else {
        Adjustment::Step {
            dt,
            rule: Rule::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// Applies the policy repeatedly, advancing by each adjusted step.
    fn march(mut present: f64, dt: f64, target: f64, limit: usize) -> Option<Vec<f64>> {
        let mut steps = Vec::new();
        for _ in 0..limit {
            match adjust(present, dt, target) {
                Adjustment::Stop => return Some(steps),
                Adjustment::Step { dt, .. } => {
                    steps.push(dt);
                    present += dt;
                }
            }
        }
        None
    }

    #[test]
    fn unit_step_to_unit_target_halves_then_clamps() {
        assert_eq!(
            adjust(0.0, 1.0, 1.0),
            Adjustment::Step {
                dt: 0.5,
                rule: Rule::Halved
            }
        );
        assert_eq!(
            adjust(0.5, 1.0, 1.0),
            Adjustment::Step {
                dt: 0.5,
                rule: Rule::Clamped
            }
        );
        assert_eq!(adjust(1.0, 1.0, 1.0), Adjustment::Stop);
    }

    #[test]
    fn small_step_is_left_alone() {
        assert_eq!(
            adjust(0.0, 0.01, 1.0),
            Adjustment::Step {
                dt: 0.01,
                rule: Rule::Unchanged
            }
        );
    }

    #[test]
    fn small_step_ends_without_sliver() {
        let steps = march(0.0, 0.3, 1.0, 10).expect("should stop");

        // 0.3 + 0.3, then 0.4 remains: halved into 0.2 + 0.2 instead of 0.3 + 0.1.
        assert_eq!(steps.len(), 4);
        assert_relative_eq!(steps[0], 0.3);
        assert_relative_eq!(steps[1], 0.3);
        assert_relative_eq!(steps[2], 0.2, epsilon = 1e-12);
        assert_relative_eq!(steps[3], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn stops_within_relative_tolerance() {
        assert_eq!(adjust(1.0 - 5e-6, 0.1, 1.0), Adjustment::Stop);
        assert_ne!(adjust(1.0 - 5e-5, 0.1, 1.0), Adjustment::Stop);

        // The band scales with the present time.
        assert_eq!(adjust(1e6 - 5.0, 1.0, 1e6), Adjustment::Stop);
    }

    #[test]
    fn zero_present_stops_only_at_target() {
        assert_eq!(adjust(0.0, 0.1, 0.0), Adjustment::Stop);
        assert_ne!(adjust(0.0, 0.1, 1e-9), Adjustment::Stop);
    }

    #[test]
    fn negative_times_never_step_backward() {
        assert_eq!(adjust(-1.0, 0.1, -1.0), Adjustment::Stop);
        assert_eq!(adjust(-1.0, 0.1, -1.000_005), Adjustment::Stop);

        let steps = march(-2.0, 0.25, -1.0, 100).expect("should stop");
        assert!(steps.iter().all(|&dt| dt > 0.0));
        assert_relative_eq!(steps.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn dt_accessor() {
        assert_eq!(adjust(0.0, 0.01, 1.0).dt(), Some(0.01));
        assert_eq!(Adjustment::Stop.dt(), None);
    }

    proptest! {
        #[test]
        fn never_grows_or_overshoots(
            present in 0.0..1e3_f64,
            gap in 1e-3..1e3_f64,
            dt in 1e-6..1e4_f64,
        ) {
            let target = present + gap;
            if let Adjustment::Step { dt: adjusted, .. } = adjust(present, dt, target) {
                prop_assert!(adjusted > 0.0);
                prop_assert!(adjusted <= dt);
                prop_assert!(present + adjusted <= target + target * f64::EPSILON);
            }
        }

        #[test]
        fn halving_leaves_two_comparable_steps(
            present in 0.0..1e3_f64,
            gap in 1e-3..1e3_f64,
            dt in 1e-6..1e4_f64,
        ) {
            let target = present + gap;
            if let Adjustment::Step { dt: adjusted, rule: Rule::Halved } = adjust(present, dt, target) {
                let remaining = target - present;
                prop_assert!(adjusted > 0.0);
                prop_assert!(adjusted >= remaining / 2.0 * (1.0 - 1e-12));
                prop_assert!(adjusted >= dt / 2.0 * (1.0 - 1e-12));
            }
        }

        #[test]
        fn converges_in_bounded_steps(
            present in 0.0..1e2_f64,
            gap in 1e-2..1e2_f64,
            dt in 1e-2..1e2_f64,
        ) {
            let target = present + gap;
            let bound = (gap / dt).ceil() as usize + 3;
            let steps = march(present, dt, target, bound);
            prop_assert!(steps.is_some(), "no stop within {bound} steps");
        }
    }
}

use crate::{
    body::Body,
    config::{Config, Singularity},
    gravity::{self, Position},
    sequential::InteractionPair,
    Between, Error,
};
use glam::DVec2;

/// Gravitational acceleration two point masses exert on each other, using Newton's law of
/// universal gravitation with a tunable gravitational constant.
///
/// The acceleration of the first body is `gravity * r / |r|³` where `r` points from the first body
/// to the second one; the second body receives the exact opposite. Masses are not applied: every
/// body pulls as if its mass were one.
///
/// Bodies sharing the same position, or close enough for the cube of their distance to underflow,
/// are handled according to the [`Singularity`] policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairwiseAcceleration {
    /// Gravitational constant.
    pub gravity: f64,
    /// Policy for bodies sharing the same position.
    pub singularity: Singularity,
}

impl Default for PairwiseAcceleration {
    #[inline]
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PairwiseAcceleration {
    #[inline]
    fn from(config: &Config) -> Self {
        Self::new(config.gravity, config.singularity)
    }
}

impl PairwiseAcceleration {
    /// Creates a new [`PairwiseAcceleration`] with the given gravitational constant and
    /// singularity policy.
    #[inline]
    pub const fn new(gravity: f64, singularity: Singularity) -> Self {
        Self {
            gravity,
            singularity,
        }
    }

    /// Returns the acceleration `affecting` exerts on `affected`, or `None` if the pair is
    /// singular and the policy is [`Singularity::Reject`].
    ///
    /// A pair is singular when the cube of the distance used by the interaction is zero. This
    /// covers bodies sharing the same position and bodies so close that the cube underflows.
    ///
    /// ```
    /// use orrery::prelude::*;
    ///
    /// let gravity = PairwiseAcceleration::default();
    /// let a = DVec2::new(0.0, 0.0);
    /// let b = DVec2::new(10.0, 0.0);
    ///
    /// assert_eq!(gravity.acceleration(&a, &b), Some(DVec2::new(10.0, 0.0)));
    /// assert_eq!(gravity.acceleration(&b, &a), Some(DVec2::new(-10.0, 0.0)));
    /// ```
    #[inline]
    pub fn acceleration<P>(&self, affected: &P, affecting: &P) -> Option<DVec2>
    where
        P: Position<Vector = DVec2> + ?Sized,
    {
        match self.pull(affected.position(), affecting.position()) {
            Pull::Finite(acceleration) => Some(acceleration),
            Pull::Singular => match self.singularity {
                Singularity::Reject => None,
                Singularity::Skip | Singularity::Clamp { .. } => Some(DVec2::ZERO),
            },
        }
    }

    fn pull(&self, affected: DVec2, affecting: DVec2) -> Pull {
        let distance = match self.singularity {
            Singularity::Clamp { min_distance } => {
                gravity::distance(affected, affecting).max(min_distance)
            }
            Singularity::Skip | Singularity::Reject => gravity::distance(affected, affecting),
        };

        let cube = distance * distance * distance;
        if cube == 0.0 {
            return Pull::Singular;
        }

        Pull::Finite((affecting - affected) * self.gravity / cube)
    }
}

// Outcome of the interaction of a pair before the singularity policy is applied.
enum Pull {
    Finite(DVec2),
    Singular,
}

impl InteractionPair<&Body> for PairwiseAcceleration {
    type Output = DVec2;

    type Error = Error;

    #[inline]
    fn compute_pair(
        &mut self,
        Between(affected, affecting): Between<&Body, &Body>,
    ) -> Result<(DVec2, DVec2), Error> {
        match (self.pull(affected.position, affecting.position), self.singularity) {
            (Pull::Finite(acceleration), _) => Ok((acceleration, -acceleration)),
            (Pull::Singular, Singularity::Reject) => {
                log::warn!(
                    "rejecting coincident bodies {} and {} at {}",
                    affected.index(),
                    affecting.index(),
                    affected.position
                );
                Err(Error::CoincidentBodies {
                    first: affected.index(),
                    second: affecting.index(),
                })
            }
            (Pull::Singular, Singularity::Skip | Singularity::Clamp { .. }) => {
                log::trace!(
                    "skipping coincident bodies {} and {}",
                    affected.index(),
                    affecting.index()
                );
                Ok((DVec2::ZERO, DVec2::ZERO))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body_at(index: usize, x: f64, y: f64) -> Body {
        let mut body = Body::new(index);
        body.position = DVec2::new(x, y);
        body
    }

    #[test]
    fn inverse_square_magnitude() {
        let gravity = PairwiseAcceleration::new(1000.0, Singularity::Skip);
        let a = body_at(0, 0.0, 0.0);
        let b = body_at(1, 0.0, 20.0);

        // 1000 / 20² = 2.5 toward b.
        let acceleration = gravity.acceleration(&a, &b).unwrap();
        assert_eq!(acceleration, DVec2::new(0.0, 2.5));
    }

    #[test]
    fn oblique_pair() {
        let gravity = PairwiseAcceleration::new(1.0, Singularity::Skip);
        let a = body_at(0, 1.0, 1.0);
        let b = body_at(1, 4.0, 5.0);

        let acceleration = gravity.acceleration(&a, &b).unwrap();
        assert_relative_eq!(acceleration.x, 3.0 / 125.0);
        assert_relative_eq!(acceleration.y, 4.0 / 125.0);
    }

    #[test]
    fn pair_is_equal_and_opposite() {
        let mut gravity = PairwiseAcceleration::default();
        let a = body_at(0, -3.5, 7.25);
        let b = body_at(1, 12.0, -1.5);

        let (on_a, on_b) = gravity.compute_pair(Between(&a, &b)).unwrap();
        assert_eq!(on_a, -on_b);
        assert_eq!(Some(on_a), gravity.acceleration(&a, &b));
    }

    #[test]
    fn mass_is_ignored() {
        let gravity = PairwiseAcceleration::default();
        let a = body_at(0, 0.0, 0.0);
        let mut b = body_at(1, 10.0, 0.0);
        let light = gravity.acceleration(&a, &b);
        b.mass = 1e6;
        let heavy = gravity.acceleration(&a, &b);

        assert_eq!(light, heavy);
    }

    #[test]
    fn reject_reports_both_indices() {
        let mut gravity = PairwiseAcceleration::new(1000.0, Singularity::Reject);
        let a = body_at(2, 5.0, 5.0);
        let b = body_at(4, 5.0, 5.0);

        assert_eq!(
            gravity.compute_pair(Between(&a, &b)),
            Err(Error::CoincidentBodies {
                first: 2,
                second: 4
            })
        );
    }

    #[test]
    fn clamp_bounds_close_encounters() {
        let clamped = PairwiseAcceleration::new(1000.0, Singularity::Clamp { min_distance: 10.0 });
        let a = body_at(0, 0.0, 0.0);
        let b = body_at(1, 1.0, 0.0);

        // The distance is clamped to 10 but the direction is kept: 1000 * 1 / 10³.
        assert_eq!(clamped.acceleration(&a, &b), Some(DVec2::new(1.0, 0.0)));

        let far = body_at(1, 20.0, 0.0);
        assert_eq!(
            clamped.acceleration(&a, &far),
            PairwiseAcceleration::default().acceleration(&a, &far)
        );
    }

    #[test]
    fn underflowing_distance_is_singular() {
        let a = body_at(0, 0.0, 0.0);
        let b = body_at(1, 1e-120, 0.0);
        assert!(a.distance_to(&b) > 0.0);

        let mut skip = PairwiseAcceleration::default();
        assert_eq!(
            skip.compute_pair(Between(&a, &b)),
            Ok((DVec2::ZERO, DVec2::ZERO))
        );

        let mut reject = PairwiseAcceleration::new(1000.0, Singularity::Reject);
        assert_eq!(
            reject.compute_pair(Between(&a, &b)),
            Err(Error::CoincidentBodies {
                first: 0,
                second: 1
            })
        );
    }

    #[test]
    fn smallest_representable_distances_stay_finite() {
        let gravity = PairwiseAcceleration::default();
        let a = body_at(0, 0.0, 0.0);

        for x in [1e-100, 1e-105, 1e-107, 1e-108, 1e-110, 1e-300, f64::MIN_POSITIVE] {
            let acceleration = gravity.acceleration(&a, &body_at(1, x, 0.0)).unwrap();
            assert!(acceleration.is_finite(), "{x}");
        }
    }

    #[test]
    fn non_positive_clamp_falls_back_to_skip() {
        let a = body_at(0, 0.0, 0.0);
        let b = body_at(1, 1e-120, 0.0);

        for min_distance in [-5.0, 0.0] {
            let clamped = PairwiseAcceleration::new(1000.0, Singularity::Clamp { min_distance });
            assert_eq!(clamped.acceleration(&a, &b), Some(DVec2::ZERO));
        }
    }

    macro_rules! tests_tolerant_policies {
        ($($name: ident => $policy: expr),*) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<coincident_bodies_ $name>]() {
                        let mut gravity = PairwiseAcceleration::new(1000.0, $policy);
                        let a = body_at(0, 3.0, -3.0);
                        let b = body_at(1, 3.0, -3.0);

                        let (on_a, on_b) = gravity.compute_pair(Between(&a, &b)).unwrap();
                        assert_eq!(on_a, DVec2::ZERO);
                        assert_eq!(on_b, DVec2::ZERO);
                        assert!(on_a.is_finite());
                    }
                }
            )*
        };
    }

    tests_tolerant_policies!(
        skip => Singularity::Skip,
        clamp => Singularity::Clamp { min_distance: 1.0 },
        clamp_zero => Singularity::Clamp { min_distance: 0.0 }
    );
}

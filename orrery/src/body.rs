use crate::gravity::{self, Position};
use glam::DVec2;

/// A single massive point body.
///
/// Besides its kinematic state, a body tracks the acceleration accumulated while computing the
/// projection that produced it. That accumulator is zero on a freshly created body and is never
/// read once the projection is built.
///
/// The position and velocity are public so that external code (a drag handler, a scenario
/// loader...) can overwrite them at any time. No validation or clamping is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    index: usize,
    /// Position of the body.
    pub position: DVec2,
    /// Velocity of the body, in distance per tick.
    pub velocity: DVec2,
    /// Acceleration accumulated during the last projection step, in distance per tick².
    pub acceleration: DVec2,
    /// Mass of the body. Currently not applied by the gravitational interaction.
    pub mass: f64,
    /// Diameter of the body, reserved for collision detection.
    pub diameter: f64,
}

impl Body {
    /// Creates a new [`Body`] with the given index, at rest at the origin, with a mass of `1.0`
    /// and a diameter of `0.0`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            mass: 1.0,
            diameter: 0.0,
        }
    }

    /// Returns the stable identity of this body, equal to its position in its simulation.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the Euclidean distance between the positions of the two bodies.
    ///
    /// ```
    /// # use orrery::prelude::*;
    /// let mut a = Body::new(0);
    /// let mut b = Body::new(1);
    /// a.position = DVec2::new(1.0, 1.0);
    /// b.position = DVec2::new(4.0, 5.0);
    ///
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// ```
    #[inline]
    pub fn distance_to(&self, other: &Body) -> f64 {
        gravity::distance(self.position, other.position)
    }

    /// Returns the momentum of this body, `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    // A projected body keeps the identity and physical properties of its antecedent, its
    // kinematics are filled in by the projection step.
    #[inline]
    pub(crate) const fn successor(&self) -> Self {
        Self {
            index: self.index,
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            mass: self.mass,
            diameter: self.diameter,
        }
    }
}

impl Position for Body {
    type Vector = DVec2;

    #[inline]
    fn position(&self) -> DVec2 {
        self.position
    }
}

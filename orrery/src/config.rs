/// Default value of the gravitational constant of the simulated universe.
pub const DEFAULT_GRAVITY: f64 = 1000.0;

/// Default ratio between a drag gesture and the velocity it gives a body.
pub const DEFAULT_LAUNCH_SCALE: f64 = 1.0 / 20.0;

/// Policy applied when computing the gravitational interaction of two bodies sharing the same
/// position, or so close that the cube of their distance underflows to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Singularity {
    /// The pair contributes no acceleration.
    #[default]
    Skip,
    /// The projection fails with [`Error::CoincidentBodies`](crate::Error::CoincidentBodies).
    Reject,
    /// The distance used to compute the interaction is never smaller than `min_distance`.
    ///
    /// Bodies sharing the exact same position still contribute no acceleration since the
    /// direction between them is zero. A `min_distance` that does not prevent the underflow
    /// behaves like [`Skip`](Self::Skip).
    Clamp {
        /// Lower bound of the distance between two bodies.
        min_distance: f64,
    },
}

/// Configuration of a [`Simulation`](crate::simulation::Simulation).
///
/// Every projection carries the configuration of the state it was derived from.
///
/// # Example
///
/// ```
/// use orrery::config::{Config, Singularity, DEFAULT_GRAVITY};
///
/// let config = Config::new().with_singularity(Singularity::Clamp { min_distance: 1.0 });
///
/// assert_eq!(config.gravity, DEFAULT_GRAVITY);
/// assert_eq!(config.singularity, Singularity::Clamp { min_distance: 1.0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Gravitational constant of the simulated universe. This is a tuning knob, not a physical
    /// constant.
    pub gravity: f64,
    /// Policy for bodies sharing the same position.
    pub singularity: Singularity,
    /// Ratio applied to the displacement given to [`launch_body`] to obtain a velocity.
    ///
    /// [`launch_body`]: crate::simulation::Simulation::launch_body
    pub launch_scale: f64,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new [`Config`] with the default values.
    #[inline]
    pub const fn new() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            singularity: Singularity::Skip,
            launch_scale: DEFAULT_LAUNCH_SCALE,
        }
    }

    /// Returns this configuration with the given gravitational constant.
    #[inline]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Returns this configuration with the given singularity policy.
    ///
    /// # Panics
    ///
    /// Panics if the policy is [`Singularity::Clamp`] with a `min_distance` that is not strictly
    /// positive.
    #[inline]
    pub fn with_singularity(mut self, singularity: Singularity) -> Self {
        if let Singularity::Clamp { min_distance } = singularity {
            assert!(
                min_distance > 0.0,
                "min_distance must be strictly positive, got {min_distance}"
            );
        }
        self.singularity = singularity;
        self
    }

    /// Returns this configuration with the given launch scale.
    #[inline]
    pub fn with_launch_scale(mut self, launch_scale: f64) -> Self {
        self.launch_scale = launch_scale;
        self
    }
}

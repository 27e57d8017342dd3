use crate::{
    body::Body,
    config::Config,
    gravity::newtonian::PairwiseAcceleration,
    sequential::SequentialCompute,
    trail::Trail,
    Error, Result,
};
use glam::DVec2;
use std::ops::Deref;

/// The authoritative, mutable state of a system of bodies at a given time.
///
/// The number of bodies is fixed for the lifetime of a simulation and of every projection derived
/// from it. Bodies are stored in their index order, which is preserved by projections.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    time: f64,
    bodies: Vec<Body>,
    config: Config,
}

/// The predicted state of a system of bodies one tick after the state it was derived from.
///
/// A projection owns independent copies of all the bodies and shares nothing with the state it
/// was derived from. It dereferences to a read-only [`Simulation`], so it can itself be
/// [projected](Simulation::project) to look further ahead, and it can be
/// [committed](Simulation::commit) to a live simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection(Simulation);

impl Deref for Projection {
    type Target = Simulation;

    #[inline]
    fn deref(&self) -> &Simulation {
        &self.0
    }
}

impl From<Projection> for Simulation {
    #[inline]
    fn from(projection: Projection) -> Self {
        projection.0
    }
}

impl Projection {
    /// Returns the projected state as a [`Simulation`] that can be mutated.
    #[inline]
    pub fn into_simulation(self) -> Simulation {
        self.0
    }
}

impl Simulation {
    /// Creates a new [`Simulation`] of `body_count` bodies at rest at the origin, with indices
    /// `0..body_count`, using the default [`Config`].
    #[inline]
    pub fn new(body_count: usize, time: f64) -> Self {
        Self::with_config(body_count, time, Config::default())
    }

    /// Creates a new [`Simulation`] of `body_count` bodies at rest at the origin using the given
    /// configuration.
    pub fn with_config(body_count: usize, time: f64, config: Config) -> Self {
        Self {
            time,
            bodies: (0..body_count).map(Body::new).collect(),
            config,
        }
    }

    /// Creates a new [`Simulation`] from existing bodies.
    ///
    /// Fails with [`Error::IndexMismatch`] if the index of a body differs from its position in
    /// the given sequence.
    pub fn from_bodies(bodies: Vec<Body>, time: f64, config: Config) -> Result<Self> {
        if let Some((position, body)) = bodies
            .iter()
            .enumerate()
            .find(|(position, body)| body.index() != *position)
        {
            return Err(Error::IndexMismatch {
                position,
                index: body.index(),
            });
        }

        Ok(Self {
            time,
            bodies,
            config,
        })
    }

    /// Returns the logical time of this state.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the configuration of this simulation.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the bodies in index order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns the body at the given index, if any.
    #[inline]
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Returns a mutable reference to the body at the given index, if any.
    ///
    /// Its position and velocity can be overwritten freely; no validation is applied.
    #[inline]
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Returns the number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if the simulation has no bodies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Returns the sum of the momentum of every body.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(DVec2::ZERO, |total, momentum| total + momentum)
    }

    /// Moves the body at the given index to `position` and stops it.
    pub fn place_body(&mut self, index: usize, position: DVec2) -> Result<()> {
        let body = self.existing_body_mut(index)?;
        body.position = position;
        body.velocity = DVec2::ZERO;
        Ok(())
    }

    /// Gives the body at the given index a velocity proportional to the displacement from `from`
    /// to `to`, scaled by [`Config::launch_scale`]. Its position is left untouched.
    ///
    /// ```
    /// # use orrery::prelude::*;
    /// let mut simulation = Simulation::new(1, 0.0);
    /// simulation.launch_body(0, DVec2::new(10.0, 10.0), DVec2::new(30.0, 50.0))?;
    ///
    /// assert_eq!(simulation.bodies()[0].velocity, DVec2::new(1.0, 2.0));
    /// # Ok::<(), orrery::Error>(())
    /// ```
    pub fn launch_body(&mut self, index: usize, from: DVec2, to: DVec2) -> Result<()> {
        let launch_scale = self.config.launch_scale;
        let body = self.existing_body_mut(index)?;
        body.velocity = (to - from) * launch_scale;
        Ok(())
    }

    fn existing_body_mut(&mut self, index: usize) -> Result<&mut Body> {
        let len = self.bodies.len();
        self.bodies
            .get_mut(index)
            .ok_or(Error::UnknownBody { index, len })
    }

    /// Returns the predicted state of this system one tick ahead, without modifying it.
    ///
    /// The mutual acceleration of every pair of bodies is computed once and applied to both
    /// bodies with opposite signs. The projected velocity of a body is its current velocity plus
    /// the accumulated acceleration, and its projected position is its current position plus its
    /// *current* velocity. The projected time is the current time plus one.
    ///
    /// Fails only if two bodies share the same position, or nearly so, and the configured
    /// [`Singularity`](crate::config::Singularity) policy rejects them.
    pub fn project(&self) -> Result<Projection> {
        // Each projected body refers to its antecedent through its index in `self.bodies`.
        let mut bodies: Vec<Body> = self.bodies.iter().map(Body::successor).collect();

        let accelerations = self
            .bodies
            .as_slice()
            .brute_force_pairs(PairwiseAcceleration::from(&self.config))?;

        for ((body, previous), acceleration) in
            bodies.iter_mut().zip(&self.bodies).zip(accelerations)
        {
            body.acceleration += acceleration;
            body.velocity = previous.velocity + body.acceleration;
            body.position = previous.position + previous.velocity;
        }

        let time = self.time + 1.0;
        log::trace!("projected {} bodies to time {}", bodies.len(), time);

        Ok(Projection(Self {
            time,
            bodies,
            config: self.config,
        }))
    }

    /// Adopts the time and the body positions of the given projection as the current state.
    ///
    /// Velocities and accelerations are left as they were.
    ///
    /// Fails with [`Error::BodyCountMismatch`] without modifying anything if the projection does
    /// not have the same number of bodies.
    pub fn commit(&mut self, projection: &Projection) -> Result<()> {
        if projection.len() != self.len() {
            return Err(Error::BodyCountMismatch {
                expected: self.len(),
                found: projection.len(),
            });
        }

        self.time = projection.time;
        for (body, projected) in self.bodies.iter_mut().zip(projection.bodies()) {
            body.position = projected.position;
        }

        log::debug!("committed projection at time {}", self.time);
        Ok(())
    }

    /// Projects this state one tick ahead and commits the result.
    #[inline]
    pub fn advance(&mut self) -> Result<()> {
        let projection = self.project()?;
        self.commit(&projection)
    }

    /// Returns an iterator over up to `steps` chained projections, each one projected from the
    /// previous one. The first projection is derived from `self`.
    ///
    /// The iterator stops after yielding an error.
    #[inline]
    pub fn trail(&self, steps: usize) -> Trail<'_> {
        Trail::new(self, steps)
    }

    /// Returns `steps` chained projections, or the first error encountered.
    #[inline]
    pub fn predict(&self, steps: usize) -> Result<Vec<Projection>> {
        self.trail(steps).collect()
    }
}

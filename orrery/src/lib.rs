#![warn(missing_docs)]
//! # Orrery
//!
//! Orrery is a crate simulating a handful of massive point bodies pulling on each other under
//! Newtonian gravitation, in two dimensions.
//!
//! ## Goals
//!
//! The main goal of this crate is to let a caller look into the future of a system without
//! disturbing it. A [`Simulation`] is the authoritative, mutable state of every body at a given
//! time. [Projecting](Simulation::project) it computes a brand new, fully owned state one tick
//! ahead, and a projection can itself be projected again to walk arbitrarily far ahead. This is
//! what a renderer drawing a predictive trail needs: dozens of chained projections per frame while
//! the live state stays untouched, until a driver decides to [commit](Simulation::commit) one.
//!
//! ### Algorithm
//!
//! Each projection step is a single synchronous pass:
//!
//! 1. every unordered pair of bodies is visited exactly once (the upper triangle of the body to
//!    body table) with the [`BruteForcePairs`](sequential::BruteForcePairs) algorithm, and the
//!    pairwise acceleration is added to one body and subtracted from the other,
//! 2. velocities and positions are integrated with semi-implicit Euler and an implicit time step
//!    of one tick: the new velocity adds the accumulated acceleration, the new position adds the
//!    *old* velocity,
//! 3. the clock advances by exactly one.
//!
//! ## Using Orrery
//!
//! ### Creating a simulation and moving bodies around
//!
//! Bodies are created at rest at the origin. External code, typically a drag handler, places
//! them by writing their position and velocity directly.
//!
//! ```
//! use orrery::prelude::*;
//!
//! let mut simulation = Simulation::new(2, 0.0);
//! simulation.place_body(1, DVec2::new(10.0, 0.0))?;
//!
//! let projection = simulation.project()?;
//!
//! assert_eq!(projection.time(), 1.0);
//! assert_eq!(projection.bodies()[0].velocity, DVec2::new(10.0, 0.0));
//! assert_eq!(projection.bodies()[1].velocity, DVec2::new(-10.0, 0.0));
//!
//! // The live state did not move.
//! assert_eq!(simulation.time(), 0.0);
//! assert_eq!(simulation.bodies()[0].velocity, DVec2::ZERO);
//! # Ok::<(), orrery::Error>(())
//! ```
//!
//! ### Predictive trails
//!
//! [`Simulation::trail`] returns an iterator over chained projections. Only the first step reads
//! the simulation, every following step is derived from the previous projection.
//!
//! ```
//! use orrery::prelude::*;
//!
//! let mut simulation = Simulation::new(3, 0.0);
//! simulation.place_body(0, DVec2::new(-50.0, 0.0))?;
//! simulation.place_body(1, DVec2::new(50.0, 0.0))?;
//! simulation.place_body(2, DVec2::new(0.0, 80.0))?;
//!
//! for projection in simulation.trail(DEFAULT_TRAIL_LEN) {
//!     let projection = projection?;
//!     for body in projection.bodies() {
//!         // Draw a dot at `body.position`.
//! #       let _ = body.position;
//!     }
//! }
//! # Ok::<(), orrery::Error>(())
//! ```
//!
//! ### Committing
//!
//! A tick driver advances the authoritative clock by committing a projection. Only the clock and
//! the positions are adopted, velocities of the live state are kept as they were.
//!
//! ```
//! use orrery::prelude::*;
//!
//! let mut simulation = Simulation::new(2, 0.0);
//! simulation.place_body(1, DVec2::new(10.0, 0.0))?;
//! simulation.launch_body(0, DVec2::ZERO, DVec2::new(0.0, 20.0))?;
//!
//! let projection = simulation.project()?;
//! simulation.commit(&projection)?;
//!
//! assert_eq!(simulation.time(), 1.0);
//! assert_eq!(simulation.bodies()[0].position, DVec2::new(0.0, 1.0));
//! assert_eq!(simulation.bodies()[0].velocity, DVec2::new(0.0, 1.0));
//! # Ok::<(), orrery::Error>(())
//! ```
//!
//! ### Configuration
//!
//! The gravitational constant of the toy universe and the policy applied to bodies sharing a
//! position are given per simulation with a [`Config`].
//!
//! ```
//! use orrery::prelude::*;
//!
//! let config = Config::new()
//!     .with_gravity(250.0)
//!     .with_singularity(Singularity::Reject);
//!
//! // Both bodies sit at the origin.
//! let simulation = Simulation::with_config(2, 0.0, config);
//!
//! assert_eq!(
//!     simulation.project().unwrap_err(),
//!     Error::CoincidentBodies { first: 0, second: 1 }
//! );
//! ```
//!
//! [`Simulation`]: simulation::Simulation
//! [`Simulation::trail`]: simulation::Simulation::trail
//! [`Config`]: config::Config

/// Kinematic state of a single point mass.
pub mod body;
/// Per-simulation configuration.
pub mod config;
/// Errors produced by the simulation.
pub mod error;
/// Newtonian gravity between point masses.
pub mod gravity;
/// Algorithms that use multiple CPU threads.
#[cfg(feature = "parallel")]
pub mod parallel;
/// Algorithms that use one CPU thread.
pub mod sequential;
/// Authoritative simulation state, projections and commits.
pub mod simulation;
/// Chains of projections.
pub mod trail;

pub use error::{Error, Result};

/// Represents a pair of objects, which can be bodies or slices of bodies, between which an
/// interaction is computed.
///
/// The first object is the one being affected by the second object.
#[derive(Clone, Copy, Debug)]
pub struct Between<S1, S2>(pub S1, pub S2);

/// Trait to compute an interaction between bodies contained in a storage.
///
/// Algorithms such as [`BruteForcePairs`](sequential::BruteForcePairs) implement this trait for
/// the storages they know how to traverse.
pub trait Interaction<Storage> {
    /// The computed interaction. This can be one or multiple values depending on the storage used.
    type Output;

    /// Returns the interaction between the bodies in the storage.
    fn compute(&mut self, storage: Storage) -> Self::Output;
}

/// Commonly used types, re-exported.
pub mod prelude {
    pub use glam::DVec2;

    pub use crate::{
        body::Body,
        config::{Config, Singularity},
        error::{Error, Result},
        gravity::{newtonian::PairwiseAcceleration, Position},
        simulation::{Projection, Simulation},
        trail::{Trail, DEFAULT_TRAIL_LEN},
        Between, Interaction,
    };

    pub use crate::sequential::SequentialCompute;
    #[cfg(feature = "parallel")]
    pub use crate::parallel::ParallelPredict;
}

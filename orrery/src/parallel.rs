use crate::{
    simulation::{Projection, Simulation},
    Result,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Trait to predict several independent simulations using multiple CPU threads.
///
/// Every simulation is predicted on its own thread with the same sequential algorithm as
/// [`Simulation::predict`], so the results are identical to predicting each of them in turn.
pub trait ParallelPredict {
    /// Returns `steps` chained projections of every simulation, in order.
    ///
    /// Refer to [`par_predict`] for more information.
    fn par_predict(self, steps: usize) -> Vec<Result<Vec<Projection>>>;
}

impl ParallelPredict for &[Simulation] {
    #[inline]
    fn par_predict(self, steps: usize) -> Vec<Result<Vec<Projection>>> {
        par_predict(self, steps)
    }
}

/// Returns `steps` chained projections of every given simulation, computed in parallel.
///
/// A simulation whose projection fails does not affect the others: its slot holds the error.
///
/// # Example
///
/// ```
/// use orrery::prelude::*;
///
/// let mut near = Simulation::new(2, 0.0);
/// near.place_body(1, DVec2::new(10.0, 0.0))?;
/// let mut far = Simulation::new(2, 0.0);
/// far.place_body(1, DVec2::new(100.0, 0.0))?;
///
/// let trails = orrery::parallel::par_predict(&[near.clone(), far], 10);
///
/// assert_eq!(trails.len(), 2);
/// assert_eq!(trails[0], near.predict(10));
/// # Ok::<(), orrery::Error>(())
/// ```
pub fn par_predict(simulations: &[Simulation], steps: usize) -> Vec<Result<Vec<Projection>>> {
    log::debug!(
        "predicting {} simulations {} steps ahead",
        simulations.len(),
        steps
    );

    simulations
        .par_iter()
        .map(|simulation| simulation.predict(steps))
        .collect()
}

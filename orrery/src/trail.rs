use crate::{
    simulation::{Projection, Simulation},
    Result,
};
use std::iter::FusedIterator;

/// Number of chained projections typically used to draw the predicted path of every body.
pub const DEFAULT_TRAIL_LEN: usize = 100;

/// Iterator over chained projections of a [`Simulation`].
///
/// The first item is the projection of the root simulation and every following item is the
/// projection of the previous one. The root is only borrowed and never modified.
///
/// This `struct` is created by [`Simulation::trail`].
#[derive(Clone, Debug)]
pub struct Trail<'a> {
    root: Option<&'a Simulation>,
    last: Option<Projection>,
    remaining: usize,
}

impl<'a> Trail<'a> {
    #[inline]
    pub(crate) fn new(root: &'a Simulation, steps: usize) -> Self {
        Self {
            root: Some(root),
            last: None,
            remaining: steps,
        }
    }
}

impl Iterator for Trail<'_> {
    type Item = Result<Projection>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let projected = match (self.root.take(), &self.last) {
            (Some(root), _) => root.project(),
            (None, Some(last)) => last.project(),
            (None, None) => return None,
        };

        match projected {
            Ok(projection) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    log::debug!("trail reached time {}", projection.time());
                    self.last = None;
                } else {
                    self.last = Some(projection.clone());
                }
                Some(Ok(projection))
            }
            Err(error) => {
                self.remaining = 0;
                self.last = None;
                Some(Err(error))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // A projection can fail, ending the trail early.
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Trail<'_> {}

#[cfg(test)]
mod tests {
    use crate::{config::Singularity, prelude::*};

    fn orbiting() -> Simulation {
        let mut simulation = Simulation::new(3, 0.0);
        simulation.place_body(0, DVec2::new(-120.0, 0.0)).unwrap();
        simulation.place_body(1, DVec2::new(80.0, 30.0)).unwrap();
        simulation.place_body(2, DVec2::new(10.0, -150.0)).unwrap();
        simulation
            .launch_body(1, DVec2::ZERO, DVec2::new(0.0, 40.0))
            .unwrap();
        simulation
    }

    #[test]
    fn chain_matches_repeated_projection() {
        let simulation = orbiting();
        let snapshot = simulation.clone();

        let trail = simulation.predict(DEFAULT_TRAIL_LEN).unwrap();

        assert_eq!(trail.len(), DEFAULT_TRAIL_LEN);
        let mut expected = simulation.project().unwrap();
        assert_eq!(trail[0], expected);
        for projection in &trail[1..] {
            expected = expected.project().unwrap();
            assert_eq!(projection, &expected);
        }
        assert_eq!(trail[DEFAULT_TRAIL_LEN - 1].time(), DEFAULT_TRAIL_LEN as f64);
        assert_eq!(simulation, snapshot);
    }

    #[test]
    fn times_increase_by_one() {
        let simulation = Simulation::new(2, 7.5);

        let times: Vec<f64> = simulation
            .trail(4)
            .map(|projection| projection.unwrap().time())
            .collect();

        assert_eq!(times, vec![8.5, 9.5, 10.5, 11.5]);
    }

    #[test]
    fn size_hint_counts_down() {
        let simulation = orbiting();
        let mut trail = simulation.trail(3);

        assert_eq!(trail.size_hint(), (0, Some(3)));
        trail.next();
        assert_eq!(trail.size_hint(), (0, Some(2)));
        trail.by_ref().for_each(drop);
        assert_eq!(trail.size_hint(), (0, Some(0)));
        assert!(trail.next().is_none());
    }

    #[test]
    fn empty_trail() {
        let simulation = orbiting();

        assert!(simulation.trail(0).next().is_none());
        assert_eq!(simulation.predict(0).unwrap(), vec![]);
    }

    #[test]
    fn stops_after_first_error() {
        let config = Config::new()
            .with_gravity(0.0)
            .with_singularity(Singularity::Reject);
        let mut simulation = Simulation::with_config(2, 0.0, config);
        // Body 1 drifts onto body 0 after two ticks.
        simulation.place_body(1, DVec2::new(4.0, 0.0)).unwrap();
        simulation.body_mut(1).unwrap().velocity = DVec2::new(-2.0, 0.0);

        let mut trail = simulation.trail(10);

        assert!(trail.next().unwrap().is_ok());
        let second = trail.next().unwrap().unwrap();
        assert_eq!(second.bodies()[1].position, DVec2::ZERO);
        let error = trail.next().unwrap().unwrap_err();
        assert_eq!(
            error,
            Error::CoincidentBodies {
                first: 0,
                second: 1
            }
        );
        assert!(trail.next().is_none());
        assert!(trail.next().is_none());

        assert_eq!(simulation.predict(10), Err(error));
    }
}

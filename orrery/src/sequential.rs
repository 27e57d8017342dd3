use crate::{Between, Interaction};
use std::ops::AddAssign;

/// Trait to compute the interaction between bodies using different sequential algorithms.
pub trait SequentialCompute<T>: Sized {
    /// Returns the interaction between these bodies using a brute-force algorithm, only
    /// performing the computation over the combination of pairs.
    ///
    /// Refer to [`BruteForcePairs`] for more information.
    #[inline]
    fn brute_force_pairs(self, interaction: T) -> <BruteForcePairs<T> as Interaction<Self>>::Output
    where
        BruteForcePairs<T>: Interaction<Self>,
    {
        BruteForcePairs(interaction).compute(self)
    }
}

impl<T, P> SequentialCompute<T> for &[P] {}

/// Trait to implement the computation of an interaction between two distinct bodies, returning
/// the interaction on each of them at once. Such implementations are used by the
/// [`BruteForcePairs`] algorithm.
pub trait InteractionPair<P> {
    /// The computed interaction.
    type Output;

    /// The error returned when the interaction cannot be computed for a pair.
    type Error;

    /// Returns the computed interactions between two distinct bodies, the first value being the
    /// interaction on the first body of the pair.
    fn compute_pair(
        &mut self,
        pair: Between<P, P>,
    ) -> Result<(Self::Output, Self::Output), Self::Error>;
}

impl<P, T> InteractionPair<P> for &mut T
where
    T: InteractionPair<P> + ?Sized,
{
    type Output = T::Output;

    type Error = T::Error;

    #[inline]
    fn compute_pair(
        &mut self,
        pair: Between<P, P>,
    ) -> Result<(Self::Output, Self::Output), Self::Error> {
        (**self).compute_pair(pair)
    }
}

/// Brute-force algorithm using one CPU thread, computing the interaction of every unordered pair
/// of bodies exactly once.
///
/// The pairs `(i, j)` with `i < j` are visited in row order and each computed interaction is
/// accumulated on both bodies of the pair. This halves the work compared to visiting every
/// ordered pair, at the cost of requiring the interaction to return the values for both bodies
/// at once. The computation stops at the first pair returning an error.
///
/// To use bodies `P` with this algorithm, the interaction `T` should implement
/// [`InteractionPair<&P>`].
///
/// # Example
///
/// ```
/// use orrery::prelude::*;
/// use orrery::sequential::BruteForcePairs;
///
/// let mut bodies = [Body::new(0), Body::new(1), Body::new(2)];
/// bodies[1].position = DVec2::new(10.0, 0.0);
/// bodies[2].position = DVec2::new(0.0, 10.0);
///
/// let accelerations = bodies
///     .as_slice()
///     .brute_force_pairs(PairwiseAcceleration::default())?;
///
/// assert_eq!(accelerations[0], DVec2::new(10.0, 10.0));
/// # Ok::<(), orrery::Error>(())
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForcePairs<T>(pub T);

impl<P, U, E, T> Interaction<&[P]> for BruteForcePairs<T>
where
    U: AddAssign + Default,
    T: for<'a> InteractionPair<&'a P, Output = U, Error = E>,
{
    type Output = Result<Vec<U>, E>;

    #[inline]
    fn compute(&mut self, slice: &[P]) -> Self::Output {
        let len = slice.len();
        let mut output: Vec<_> = std::iter::repeat_with(Default::default).take(len).collect();

        for i in 0..len {
            for j in (i + 1)..len {
                let (on_i, on_j) = self.0.compute_pair(Between(&slice[i], &slice[j]))?;

                output[i] += on_i;
                output[j] += on_j;
            }
        }

        Ok(output)
    }
}

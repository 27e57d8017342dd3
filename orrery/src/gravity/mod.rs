/// Newtonian gravity implementations.
pub mod newtonian;

use glam::DVec2;

/// Trait for types that can be located in space.
pub trait Position {
    /// The type used to represent the position.
    type Vector;

    /// Returns the position of a body.
    fn position(&self) -> Self::Vector;
}

impl Position for DVec2 {
    type Vector = DVec2;

    #[inline]
    fn position(&self) -> DVec2 {
        *self
    }
}

/// Returns the Euclidean distance between two positions, `sqrt(dx² + dy²)`.
///
/// Both [`Body::distance_to`](crate::body::Body::distance_to) and the gravitational interaction
/// measure distances with this function.
#[inline]
pub fn distance(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    (d.x * d.x + d.y * d.y).sqrt()
}

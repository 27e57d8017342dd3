use std::fmt;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while projecting or mutating a simulation.
///
/// All of them are local and synchronous: a failed projection is simply not produced and a failed
/// mutation leaves the simulation untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Two bodies share the same position, or are too close for their interaction to be finite,
    /// and the configured [`Singularity`](crate::config::Singularity) policy rejects them.
    CoincidentBodies {
        /// Index of the first body of the pair.
        first: usize,
        /// Index of the second body of the pair.
        second: usize,
    },
    /// A projection with a different number of bodies was committed.
    BodyCountMismatch {
        /// Number of bodies of the committing simulation.
        expected: usize,
        /// Number of bodies of the projection.
        found: usize,
    },
    /// A body's index does not match its position in the sequence.
    IndexMismatch {
        /// Position of the body in the sequence.
        position: usize,
        /// Index carried by the body.
        index: usize,
    },
    /// No body exists at the given index.
    UnknownBody {
        /// The requested index.
        index: usize,
        /// Number of bodies in the simulation.
        len: usize,
    },
}

impl Error {
    /// Returns `true` if this error signals a broken invariant, i.e. a programming error rather
    /// than a property of the simulated state.
    #[inline]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::BodyCountMismatch { .. } | Self::IndexMismatch { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentBodies { first, second } => {
                write!(f, "bodies {first} and {second} share the same position")
            }
            Self::BodyCountMismatch { expected, found } => write!(
                f,
                "invariant violation: expected a projection of {expected} bodies, found {found}"
            ),
            Self::IndexMismatch { position, index } => write!(
                f,
                "invariant violation: body at position {position} has index {index}"
            ),
            Self::UnknownBody { index, len } => {
                write!(f, "no body at index {index} (simulation has {len} bodies)")
            }
        }
    }
}

impl std::error::Error for Error {}

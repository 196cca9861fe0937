//! Error types for engine configuration.

use core::fmt;

/// Errors raised at the configuration boundary.
///
/// The simulation itself is infallible: tearing, cutting, and degenerate
/// geometry mutate state or no-op, never fail. Only invalid configuration
/// is rejected, before it can reach the solver.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// At least one relaxation iteration is required.
    InvalidIterations,
    /// Spacing must be positive.
    InvalidSpacing,
    /// Tear distance must be positive.
    InvalidTearDistance,
    /// Interaction radii must be non-negative.
    InvalidRadius,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Viewport must be large enough to hold the reflection band.
    InvalidViewport,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidIterations => write!(f, "iterations must be at least 1"),
            ClothError::InvalidSpacing => write!(f, "spacing must be positive"),
            ClothError::InvalidTearDistance => write!(f, "tear distance must be positive"),
            ClothError::InvalidRadius => write!(f, "interaction radii must be non-negative"),
            ClothError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ClothError::InvalidViewport => write!(f, "viewport must be larger than 2x2"),
        }
    }
}

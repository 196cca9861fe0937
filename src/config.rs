//! Configuration types for the cloth engine.

use crate::error::ClothError;
use crate::float::Float;

/// Configuration for the cloth engine.
///
/// Defaults reproduce the classic tearable-cloth tuning: 10 relaxation
/// iterations, gravity 1200 (y points down, canvas convention), a 200x50
/// cloth at spacing 5, tear distance 60.
///
/// # Builder Pattern
/// ```
/// use tatter::config::EngineConfig;
///
/// let config: EngineConfig<f32> = EngineConfig::new()
///     .with_iterations(8)
///     .with_gravity(900.0)
///     .with_cloth_size(60, 30)
///     .with_viewport(640.0, 480.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig<F: Float> {
    /// Number of constraint relaxation passes per step.
    /// More passes = stiffer cloth but slower. Default: 10.
    pub iterations: usize,
    /// Downward gravity magnitude, accumulated as a force each step. Default: 1200.
    pub gravity: F,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.99.
    pub damping: F,
    /// Radius around the pointer within which a primary-button drag
    /// moves particles. Default: 10.
    pub mouse_influence: F,
    /// Radius around the pointer within which a secondary-button press
    /// severs all of a particle's constraints. Default: 5.
    pub cut_size: F,
    /// Distance beyond which a stretched constraint tears. Default: 60.
    pub tear_distance: F,
    /// Rest distance between adjacent particles. Default: 5.
    pub spacing: F,
    /// Number of horizontal cells; the grid has `cloth_width + 1` columns.
    /// Default: 200.
    pub cloth_width: usize,
    /// Number of vertical cells; the grid has `cloth_height + 1` rows.
    /// Default: 50.
    pub cloth_height: usize,
    /// Y coordinate of the pinned top row. Default: 20.
    pub start_y: F,
    /// Viewport width; the cloth is centered horizontally within it.
    pub viewport_width: F,
    /// Viewport height.
    pub viewport_height: F,
}

impl<F: Float> EngineConfig<F> {
    /// Create a new config with the classic defaults.
    pub fn new() -> Self {
        EngineConfig {
            iterations: 10,
            gravity: F::from_f32(1200.0),
            damping: F::from_f32(0.99),
            mouse_influence: F::from_f32(10.0),
            cut_size: F::from_f32(5.0),
            tear_distance: F::from_f32(60.0),
            spacing: F::from_f32(5.0),
            cloth_width: 200,
            cloth_height: 50,
            start_y: F::from_f32(20.0),
            viewport_width: F::from_f32(1280.0),
            viewport_height: F::from_f32(720.0),
        }
    }

    /// Set the number of relaxation iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity magnitude.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the drag influence radius.
    pub fn with_mouse_influence(mut self, radius: F) -> Self {
        self.mouse_influence = radius;
        self
    }

    /// Set the cut radius.
    pub fn with_cut_size(mut self, radius: F) -> Self {
        self.cut_size = radius;
        self
    }

    /// Set the tear distance.
    pub fn with_tear_distance(mut self, distance: F) -> Self {
        self.tear_distance = distance;
        self
    }

    /// Set the rest spacing between adjacent particles.
    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the cloth dimensions in cells.
    pub fn with_cloth_size(mut self, width: usize, height: usize) -> Self {
        self.cloth_width = width;
        self.cloth_height = height;
        self
    }

    /// Set the y coordinate of the pinned top row.
    pub fn with_start_y(mut self, start_y: F) -> Self {
        self.start_y = start_y;
        self
    }

    /// Set the viewport dimensions.
    pub fn with_viewport(mut self, width: F, height: F) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Right soft-wall position. The walls sit one unit inside the viewport.
    pub fn bounds_x(&self) -> F {
        self.viewport_width - F::one()
    }

    /// Bottom soft-wall position.
    pub fn bounds_y(&self) -> F {
        self.viewport_height - F::one()
    }

    /// Check the configuration before it reaches the solver.
    ///
    /// The solver assumes validated values and never re-checks them.
    pub fn validate(&self) -> Result<(), ClothError> {
        let zero = F::zero();
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        if !(self.spacing > zero) {
            return Err(ClothError::InvalidSpacing);
        }
        if !(self.tear_distance > zero) {
            return Err(ClothError::InvalidTearDistance);
        }
        if self.mouse_influence < zero || self.cut_size < zero {
            return Err(ClothError::InvalidRadius);
        }
        if self.damping < zero || self.damping > F::one() {
            return Err(ClothError::InvalidDamping);
        }
        if !(self.bounds_x() > F::one()) || !(self.bounds_y() > F::one()) {
            return Err(ClothError::InvalidViewport);
        }
        Ok(())
    }

    /// Whether switching from `self` to `other` changes cloth topology and
    /// therefore requires a full rebuild (discarding tear history).
    pub fn requires_rebuild(&self, other: &Self) -> bool {
        self.spacing != other.spacing
            || self.cloth_width != other.cloth_width
            || self.cloth_height != other.cloth_height
            || self.start_y != other.start_y
            || self.viewport_width != other.viewport_width
            || self.viewport_height != other.viewport_height
    }
}

impl<F: Float> Default for EngineConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

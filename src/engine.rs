//! Simulation engine: owns the cloth and drives fixed-timestep updates.

use crate::cloth::Cloth;
use crate::config::EngineConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::pointer::PointerState;

/// Owns a [`Cloth`] and its [`EngineConfig`], advancing the simulation one
/// frame at a time.
///
/// Single-threaded and synchronous: the driving shell calls [`step`] once
/// per animation frame, and the step completes fully (all relaxation passes
/// plus integration) before returning.
///
/// [`step`]: Engine::step
pub struct Engine<F: Float> {
    config: EngineConfig<F>,
    cloth: Cloth<F>,
}

impl<F: Float> Engine<F> {
    /// Validate `config` and build the initial cloth from it.
    pub fn new(config: EngineConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let cloth = Cloth::new(&config);
        Ok(Engine { config, cloth })
    }

    /// Advance one frame: pointer interaction, constraint relaxation, and
    /// Verlet integration, reporting progress to `observer`.
    pub fn step<O: StepObserver>(&mut self, pointer: &PointerState<F>, observer: &mut O) {
        self.cloth.update(&self.config, pointer, observer);
        observer.on_step_complete();
    }

    /// [`step`](Engine::step) without observation.
    pub fn step_unobserved(&mut self, pointer: &PointerState<F>) {
        self.step(pointer, &mut NoOpStepObserver);
    }

    /// Swap in a new configuration.
    ///
    /// Tuning changes (iterations, gravity, damping, radii, tear distance)
    /// apply live. Topology changes (spacing, cloth size, start_y, viewport)
    /// rebuild the cloth wholesale: the old mesh, including all tear and
    /// deformation history, is replaced before the next step runs.
    pub fn reconfigure(&mut self, config: EngineConfig<F>) -> Result<(), ClothError> {
        config.validate()?;
        if self.config.requires_rebuild(&config) {
            self.cloth = Cloth::new(&config);
        }
        self.config = config;
        Ok(())
    }

    /// Rebuild the cloth from the current configuration, discarding all
    /// tear and deformation history.
    pub fn reset(&mut self) {
        self.cloth = Cloth::new(&self.config);
    }

    pub fn cloth(&self) -> &Cloth<F> {
        &self.cloth
    }

    pub fn cloth_mut(&mut self) -> &mut Cloth<F> {
        &mut self.cloth
    }

    pub fn config(&self) -> &EngineConfig<F> {
        &self.config
    }
}

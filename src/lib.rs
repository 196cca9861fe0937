//! Tearable Verlet cloth simulation.
//!
//! `tatter` simulates a deformable, tearable cloth as a grid of
//! position-based (Verlet) particles linked by distance constraints, driven
//! by gravity and pointer interaction (drag with the primary button, cut
//! with the secondary). The crate is the physics core only: a rendering
//! shell feeds in per-frame [`PointerState`] and configuration, and reads
//! back particle positions and live constraint segments for drawing.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Iterative relaxation**: Gauss-Seidel distance-constraint solving
//! - **Tearing**: Constraints break past a stretch threshold; cutting severs them
//! - **Pins**: Top row anchored as infinite-mass fixed points
//! - **Soft walls**: Mirror-reflection at the viewport bounds
//! - **Observable**: Monitor steps via the [`StepObserver`] trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use tatter::{Engine, EngineConfig, PointerState};
//!
//! let config: EngineConfig<f32> = EngineConfig::new()
//!     .with_cloth_size(40, 20)
//!     .with_viewport(640.0, 480.0);
//! let mut engine = Engine::new(config).unwrap();
//!
//! let pointer = PointerState::released();
//! engine.step_unobserved(&pointer);
//! let segment_count = engine.cloth().segments().count();
//! assert!(segment_count > 0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod cloth;
pub mod engine;
pub mod pointer;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::{round_to_fraction, Float};
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::Constraint;
pub use cloth::{Cloth, FIXED_TIMESTEP};
pub use engine::Engine;
pub use pointer::{PointerButton, PointerState};
pub use config::EngineConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::ClothError;

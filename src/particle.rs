//! Verlet particles with position-based dynamics.

use crate::config::EngineConfig;
use crate::constraint::Constraint;
use crate::float::{round_to_fraction, Float};
use crate::pointer::{PointerButton, PointerState};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Quantum for the force accumulator: forces are truncated to 1/400 units.
const FORCE_QUANTUM: f32 = 400.0;

/// Velocity injected by a drag is 1.8x the pointer's frame displacement.
const DRAG_GAIN: f32 = 1.8;

/// A cloth particle — position-based dynamics with implicit velocity.
///
/// Owns its outgoing constraints; the linked neighbor holds no back-reference.
/// A particle is never destroyed, but its constraint list shrinks as the
/// cloth tears or is cut.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    /// Force accumulator, zeroed after each integration.
    pub force: Vec2<F>,
    /// Fixed-position anchor. Reasserted every relaxation pass; pins are
    /// permanent for the particle's life.
    pub pin: Option<Vec2<F>>,
    pub constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            pin: None,
            constraints: AllocVec::new(),
        }
    }

    /// Anchor the particle at `target`. There is no unpin.
    pub fn pin_at(&mut self, target: Vec2<F>) {
        self.pin = Some(target);
    }

    pub fn pinned(&self) -> bool {
        self.pin.is_some()
    }

    /// Append an outgoing constraint.
    pub fn attach(&mut self, constraint: Constraint<F>) {
        self.constraints.push(constraint);
    }

    /// Clear every outgoing constraint (pointer cut). The particle keeps
    /// integrating as loose debris.
    pub fn sever(&mut self) {
        self.constraints.clear();
    }

    /// Accumulate a force, truncating the accumulator to 1/400 units.
    ///
    /// The quantization is load-bearing: it caps floating drift in the
    /// accumulator and is part of the cloth's damping character.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        let quantum = F::from_f32(FORCE_QUANTUM);
        self.force.x = round_to_fraction(self.force.x + force.x, quantum);
        self.force.y = round_to_fraction(self.force.y + force.y, quantum);
    }

    /// One frame of pointer interaction, gravity, and Verlet integration.
    ///
    /// Pinned particles integrate too; the pin is reasserted on the next
    /// relaxation pass, so the invariant holds where it matters — after
    /// constraint resolution.
    pub fn update(&mut self, dt: F, pointer: &PointerState<F>, config: &EngineConfig<F>) {
        if pointer.down {
            let dist_sq = self.pos.distance_sq(pointer.pos);
            match pointer.button {
                PointerButton::Primary => {
                    if dist_sq < config.mouse_influence * config.mouse_influence {
                        let snap = pointer.frame_delta().scale(F::from_f32(DRAG_GAIN));
                        self.prev_pos = self.pos - snap;
                    }
                }
                PointerButton::Secondary => {
                    if dist_sq < config.cut_size * config.cut_size {
                        self.sever();
                    }
                }
            }
        }

        self.apply_force(Vec2::new(F::zero(), config.gravity));

        let dt_sq = dt * dt;
        let velocity = (self.pos - self.prev_pos).scale(config.damping);
        let new_pos = self.pos + velocity + self.force.scale(F::half() * dt_sq);

        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.force = Vec2::zero();
    }

    /// Implicit velocity: displacement over the last integration step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}

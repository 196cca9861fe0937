//! Distance constraints between cloth particles.

use crate::float::Float;
use crate::particle::Particle;

/// A distance link between two particles in the cloth's arena.
///
/// `a` is the owning particle: the constraint lives in `a`'s constraint
/// list, and `b` never holds a back-reference. Indices rather than
/// references keep the ownership one-directional (see `Cloth`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    pub a: usize,
    pub b: usize,
    /// Rest distance, fixed at creation.
    pub rest_length: F,
}

impl<F: Float> Constraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Constraint { a, b, rest_length }
    }

    /// Relax the constraint toward its rest length.
    ///
    /// Distributes half the correction to each endpoint (unit mass, no
    /// weighting; pins override afterwards during relaxation). Returns
    /// `true` when the pre-correction distance exceeded `tear_distance`:
    /// the caller must then remove the constraint from its owner's list.
    /// The correction is still applied once on the tearing pass.
    ///
    /// Coincident endpoints have no direction to correct along; the
    /// constraint is left untouched rather than dividing by zero.
    pub fn resolve(&self, particles: &mut [Particle<F>], tear_distance: F) -> bool {
        let delta = particles[self.a].pos - particles[self.b].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return false;
        }

        let torn = dist > tear_distance;

        let diff = (self.rest_length - dist) / dist;
        let correction = delta.scale(diff * F::half());
        particles[self.a].pos = particles[self.a].pos + correction;
        particles[self.b].pos = particles[self.b].pos - correction;

        torn
    }
}

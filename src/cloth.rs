//! Cloth mesh: a grid of particles wired by distance constraints.

use crate::config::EngineConfig;
use crate::constraint::Constraint;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Fixed integration timestep (~60 Hz). The simulation is not frame-rate
/// adaptive; every step advances by this amount regardless of wall clock.
pub const FIXED_TIMESTEP: f32 = 0.016;

/// A tearable cloth built from a row-major arena of Verlet particles.
///
/// Particle at grid `(x, y)` has index `x + y * (width + 1)`. Each
/// non-leftmost particle owns a constraint to its left neighbor, each
/// non-top-row particle owns one to the particle directly above, and the
/// top row is pinned at its construction coordinates.
pub struct Cloth<F: Float> {
    points: AllocVec<Particle<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> Cloth<F> {
    /// Build the cloth described by `config`, centered horizontally in the
    /// viewport with its top row at `start_y`.
    pub fn new(config: &EngineConfig<F>) -> Self {
        let cols = config.cloth_width + 1;
        let rows = config.cloth_height + 1;
        let cloth_span = F::from_f32(config.cloth_width as f32) * config.spacing;
        let start_x = (config.viewport_width - cloth_span) * F::half();

        let mut points = AllocVec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                let pos = Vec2::new(
                    start_x + F::from_f32(x as f32) * config.spacing,
                    config.start_y + F::from_f32(y as f32) * config.spacing,
                );
                let index = points.len();
                let mut p = Particle::new(pos);

                if x != 0 {
                    p.attach(Constraint::new(index, index - 1, config.spacing));
                }
                if y == 0 {
                    p.pin_at(pos);
                } else {
                    p.attach(Constraint::new(index, index - cols, config.spacing));
                }

                points.push(p);
            }
        }

        Cloth { points, cols, rows }
    }

    /// Arena index of the particle at grid `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Explicitly link particle `a` to particle `b` at the given rest length.
    pub fn attach(&mut self, a: usize, b: usize, rest_length: F) {
        let constraint = Constraint::new(a, b, rest_length);
        self.points[a].attach(constraint);
    }

    /// One full simulation step: `iterations` relaxation passes, then one
    /// Verlet integration of every particle at [`FIXED_TIMESTEP`].
    ///
    /// Both loops walk the arena in strictly descending index order; the
    /// relaxation is Gauss-Seidel, so traversal direction is part of the
    /// numerical behavior.
    pub fn update<O: StepObserver>(
        &mut self,
        config: &EngineConfig<F>,
        pointer: &PointerState<F>,
        observer: &mut O,
    ) {
        for pass in 0..config.iterations {
            self.relax_pass(config);
            observer.on_relaxation_pass(pass);
        }

        let dt = F::from_f32(FIXED_TIMESTEP);
        let mut i = self.points.len();
        while i > 0 {
            i -= 1;
            self.points[i].update(dt, pointer, config);
        }
        observer.on_integrate();
    }

    /// One relaxation pass: resolve every particle in strictly descending
    /// index order. After this returns, every pinned particle sits exactly
    /// at its pin.
    pub fn relax_pass(&mut self, config: &EngineConfig<F>) {
        let mut i = self.points.len();
        while i > 0 {
            i -= 1;
            self.resolve_constraints(i, config);
        }
    }

    /// Relax every constraint owned by particle `index`, then reflect it
    /// back inside the viewport walls.
    fn resolve_constraints(&mut self, index: usize, config: &EngineConfig<F>) {
        if let Some(pin) = self.points[index].pin {
            // Pin overrides all constraint effects.
            self.points[index].pos = pin;
            return;
        }

        // Reverse order, removing torn constraints in place. Removal at or
        // above the cursor never skips an entry.
        let mut k = self.points[index].constraints.len();
        while k > 0 {
            k -= 1;
            let constraint = self.points[index].constraints[k];
            if constraint.resolve(&mut self.points, config.tear_distance) {
                self.points[index].constraints.remove(k);
            }
        }

        // Soft walls: mirror-reflect positions past [1, bounds], not a hard clamp.
        let bounds_x = config.bounds_x();
        let bounds_y = config.bounds_y();
        let one = F::one();
        let two = F::two();
        let p = &mut self.points[index];
        if p.pos.x > bounds_x {
            p.pos.x = two * bounds_x - p.pos.x;
        } else if p.pos.x < one {
            p.pos.x = two - p.pos.x;
        }
        if p.pos.y < one {
            p.pos.y = two - p.pos.y;
        } else if p.pos.y > bounds_y {
            p.pos.y = two * bounds_y - p.pos.y;
        }
    }

    /// Endpoint position pairs of every live constraint, lazily. This is
    /// the full render-facing output; a shell redraws from scratch each frame.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.points.iter().flat_map(move |p| {
            p.constraints
                .iter()
                .map(move |c| (self.points[c.a].pos, self.points[c.b].pos))
        })
    }

    /// Current positions of all particles, in arena order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.points[self.index(col, row)].pos
    }

    pub fn point(&self, index: usize) -> &Particle<F> {
        &self.points[index]
    }

    pub fn point_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.points[index]
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn point_count(&self) -> usize { self.points.len() }

    /// Total live constraints across the cloth.
    pub fn constraint_count(&self) -> usize {
        self.points.iter().map(|p| p.constraints.len()).sum()
    }
}

use tatter::{
    Engine, EngineConfig, PointerButton, PointerState, StepObserver, Vec2,
};

fn small_engine() -> Engine<f32> {
    Engine::new(
        EngineConfig::new()
            .with_cloth_size(4, 4)
            .with_spacing(10.0)
            .with_viewport(640.0, 480.0),
    )
    .unwrap()
}

#[test]
fn pins_hold_after_relaxation() {
    let mut engine = small_engine();
    let config = engine.config().clone();

    let pins: Vec<_> = (0..engine.cloth().cols())
        .map(|col| engine.cloth().point(col).pos)
        .collect();

    let pointer = PointerState::released();
    for _ in 0..60 {
        engine.step_unobserved(&pointer);
    }

    // Integration nudges pinned particles between frames; the invariant is
    // stated after constraint resolution, where the pin overrides everything.
    engine.cloth_mut().relax_pass(&config);
    for (col, pin) in pins.iter().enumerate() {
        assert_eq!(engine.cloth().point(col).pos, *pin);
    }
}

#[test]
fn cloth_drapes_under_gravity() {
    let mut engine = small_engine();
    let bottom_row = engine.cloth().rows() - 1;
    let initial = engine.cloth().position_at(2, bottom_row);

    let pointer = PointerState::released();
    for _ in 0..120 {
        engine.step_unobserved(&pointer);
    }

    let settled = engine.cloth().position_at(2, bottom_row);
    assert!(
        settled.y > initial.y,
        "bottom row should sag below its initial y {}, got {}",
        initial.y,
        settled.y
    );
}

#[test]
fn boundary_reflection_is_a_mirror() {
    let mut engine = small_engine();
    let config = engine.config().clone();
    let bounds_x = config.bounds_x();

    // Bottom-right corner: nothing else owns a link to it, and severing its
    // own links isolates the reflection from constraint corrections.
    let corner = engine.cloth().index(4, 4);
    engine.cloth_mut().point_mut(corner).sever();
    engine.cloth_mut().point_mut(corner).pos = Vec2::new(bounds_x + 5.0, 50.0);

    engine.cloth_mut().relax_pass(&config);

    let reflected = engine.cloth().point(corner).pos.x;
    assert_eq!(reflected, 2.0 * bounds_x - (bounds_x + 5.0));
}

#[test]
fn lower_wall_reflects_around_one() {
    let mut engine = small_engine();
    let config = engine.config().clone();

    let corner = engine.cloth().index(4, 4);
    engine.cloth_mut().point_mut(corner).sever();
    engine.cloth_mut().point_mut(corner).pos = Vec2::new(-3.0, 0.25);

    engine.cloth_mut().relax_pass(&config);

    let pos = engine.cloth().point(corner).pos;
    assert_eq!(pos.x, 2.0 - (-3.0));
    assert_eq!(pos.y, 2.0 - 0.25);
}

#[test]
fn drag_pulls_nearby_particles_along() {
    let mut engine = small_engine();
    let bottom_row = engine.cloth().rows() - 1;
    let target = engine.cloth().index(2, bottom_row);
    let start = engine.cloth().point(target).pos;

    let mut pointer = PointerState::released();
    pointer.press(PointerButton::Primary, start);
    pointer.move_to(start + Vec2::new(6.0, 0.0));
    engine.step_unobserved(&pointer);

    let moved = engine.cloth().point(target).pos;
    assert!(
        moved.x > start.x,
        "dragged particle should follow the pointer, x {} -> {}",
        start.x,
        moved.x
    );
    assert!(engine.cloth().point(target).velocity_raw().x > 0.0);
}

#[test]
fn tuning_reconfigure_keeps_damage() {
    let mut engine = small_engine();
    let full = engine.cloth().constraint_count();

    // Cut a hole, then change a live-tunable parameter.
    let target = engine.cloth().index(2, 2);
    let mut pointer = PointerState::released();
    pointer.press(PointerButton::Secondary, engine.cloth().point(target).pos);
    engine.step_unobserved(&pointer);
    let damaged = engine.cloth().constraint_count();
    assert!(damaged < full);

    let tuned = engine.config().clone().with_gravity(500.0).with_iterations(4);
    engine.reconfigure(tuned).unwrap();
    assert_eq!(engine.cloth().constraint_count(), damaged);
    assert_eq!(engine.config().gravity, 500.0);
}

#[test]
fn topology_reconfigure_rebuilds() {
    let mut engine = small_engine();

    let target = engine.cloth().index(2, 2);
    let mut pointer = PointerState::released();
    pointer.press(PointerButton::Secondary, engine.cloth().point(target).pos);
    engine.step_unobserved(&pointer);

    let resized = engine.config().clone().with_cloth_size(6, 3);
    engine.reconfigure(resized).unwrap();

    assert_eq!(engine.cloth().point_count(), 7 * 4);
    // Fresh wiring: horizontal 6*4 + vertical 7*3.
    assert_eq!(engine.cloth().constraint_count(), 24 + 21);
}

#[test]
fn invalid_reconfigure_is_rejected_and_ignored() {
    let mut engine = small_engine();
    let before = engine.config().clone();

    let bad = before.clone().with_spacing(-1.0);
    assert!(engine.reconfigure(bad).is_err());
    assert_eq!(engine.config(), &before);
}

#[test]
fn reset_restores_the_full_mesh() {
    let mut engine = small_engine();
    let full = engine.cloth().constraint_count();

    let target = engine.cloth().index(2, 2);
    let mut pointer = PointerState::released();
    pointer.press(PointerButton::Secondary, engine.cloth().point(target).pos);
    engine.step_unobserved(&pointer);
    assert!(engine.cloth().constraint_count() < full);

    engine.reset();
    assert_eq!(engine.cloth().constraint_count(), full);
}

#[derive(Default)]
struct CountingObserver {
    passes: usize,
    integrations: usize,
    steps: usize,
}

impl StepObserver for CountingObserver {
    fn on_relaxation_pass(&mut self, _pass: usize) {
        self.passes += 1;
    }
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }
    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn observer_sees_every_phase() {
    let mut engine = Engine::new(
        EngineConfig::<f32>::new()
            .with_cloth_size(3, 3)
            .with_iterations(7)
            .with_viewport(640.0, 480.0),
    )
    .unwrap();

    let mut observer = CountingObserver::default();
    let pointer = PointerState::released();
    for _ in 0..3 {
        engine.step(&pointer, &mut observer);
    }

    assert_eq!(observer.passes, 7 * 3);
    assert_eq!(observer.integrations, 3);
    assert_eq!(observer.steps, 3);
}

use tatter::{Cloth, Engine, EngineConfig, PointerButton, PointerState, Vec2};

/// A single column: particle 0 pinned at the top, particle 1 hanging below
/// on one vertical constraint of rest length 10.
fn hanging_pair(tear_distance: f32) -> (Cloth<f32>, EngineConfig<f32>) {
    let config = EngineConfig::new()
        .with_cloth_size(0, 1)
        .with_spacing(10.0)
        .with_start_y(20.0)
        .with_tear_distance(tear_distance)
        .with_viewport(640.0, 480.0);
    let cloth = Cloth::new(&config);
    (cloth, config)
}

#[test]
fn constraint_tears_past_threshold() {
    let (mut cloth, config) = hanging_pair(60.0);
    assert_eq!(cloth.point(1).constraints.len(), 1);

    let anchor = cloth.point(0).pos;
    cloth.point_mut(1).pos = Vec2::new(anchor.x, anchor.y + 61.0);
    let stretched = cloth.point(1).pos;

    cloth.relax_pass(&config);

    // Torn, and the final correction was still applied on the way out.
    assert!(cloth.point(1).constraints.is_empty());
    assert!(cloth.point(1).pos.y < stretched.y);
}

#[test]
fn constraint_survives_at_threshold() {
    let (mut cloth, config) = hanging_pair(60.0);

    let anchor = cloth.point(0).pos;
    cloth.point_mut(1).pos = Vec2::new(anchor.x, anchor.y + 59.0);

    cloth.relax_pass(&config);
    assert_eq!(cloth.point(1).constraints.len(), 1);
}

#[test]
fn tearing_never_removes_particles() {
    let (mut cloth, config) = hanging_pair(60.0);
    let anchor = cloth.point(0).pos;
    cloth.point_mut(1).pos = Vec2::new(anchor.x, anchor.y + 200.0);

    cloth.relax_pass(&config);
    assert_eq!(cloth.point_count(), 2);
    assert!(cloth.point(1).constraints.is_empty());
}

#[test]
fn cut_severs_everything_in_radius() {
    let config: EngineConfig<f32> = EngineConfig::new()
        .with_cloth_size(4, 4)
        .with_spacing(10.0)
        .with_cut_size(5.0)
        .with_viewport(640.0, 480.0);
    let mut engine = Engine::new(config).unwrap();

    let target = engine.cloth().index(2, 2);
    let target_pos = engine.cloth().point(target).pos;
    assert_eq!(engine.cloth().point(target).constraints.len(), 2);

    let mut pointer = PointerState::released();
    pointer.press(PointerButton::Secondary, target_pos);
    engine.step_unobserved(&pointer);

    // The cut particle keeps integrating as debris; only its links are gone.
    assert!(engine.cloth().point(target).constraints.is_empty());
    assert_eq!(engine.cloth().point_count(), 25);
}

#[test]
fn cut_misses_outside_radius() {
    let config: EngineConfig<f32> = EngineConfig::new()
        .with_cloth_size(4, 4)
        .with_spacing(10.0)
        .with_cut_size(2.0)
        .with_viewport(640.0, 480.0);
    let mut engine = Engine::new(config).unwrap();

    let target = engine.cloth().index(2, 2);
    let far = engine.cloth().point(target).pos + Vec2::new(3.0, 0.0);

    let mut pointer = PointerState::released();
    pointer.press(PointerButton::Secondary, far);
    engine.step_unobserved(&pointer);

    assert_eq!(engine.cloth().point(target).constraints.len(), 2);
}

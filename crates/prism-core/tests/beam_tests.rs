// Beam tracing and its interplay with the controller, frame by frame.

use glam::{Vec2, Vec3};
use prism_core::*;

fn side_prism() -> Collider {
    Collider::prism(
        Aabb::from_center(Vec2::new(3.0, 0.0), Vec2::splat(0.5)),
        Vec3::ZERO,
    )
}

#[test]
fn enter_move_exit_sequence() {
    let colliders = [side_prism()];
    let mut tracer = BeamTracer::default();

    tracer.set_ray(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
    assert!(tracer.cast(&colliders).is_empty());
    assert!(!tracer.is_hitting());

    tracer.set_ray(Vec3::new(6.0, 0.0, 0.0), Vec3::ZERO);
    assert_eq!(tracer.origin(), Vec3::new(6.0, 0.0, 0.0));
    assert_eq!(tracer.target(), Vec3::ZERO);
    let events = tracer.cast(&colliders);
    assert_eq!(events.len(), 2);
    let RayEvent::Enter(hit) = events[0] else {
        panic!("expected enter, got {:?}", events[0]);
    };
    assert_eq!(events[1], RayEvent::Move(hit));
    assert!((hit.position - Vec3::new(3.5, 0.0, 0.0)).length() < 1e-5);
    assert_eq!(hit.normal, Some(Vec3::X));
    assert!((hit.direction - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);

    let events = tracer.cast(&colliders);
    assert_eq!(events, vec![RayEvent::Move(hit)]);

    tracer.set_ray(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
    assert_eq!(tracer.cast(&colliders), vec![RayEvent::Exit]);
    assert!(tracer.cast(&colliders).is_empty());
}

#[test]
fn absorbed_beam_is_drawn_to_focus() {
    let mut tracer = BeamTracer::default();
    tracer.set_ray(Vec3::new(6.0, 0.0, 0.0), Vec3::ZERO);
    tracer.cast(&[side_prism()]);
    let path = tracer.path();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], Vec3::new(6.0, 0.0, 0.0));
    assert_eq!(path[2], Vec3::ZERO);
}

#[test]
fn missed_beam_runs_to_far_limit() {
    let mut tracer = BeamTracer::new(10, 2.0);
    tracer.set_ray(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
    assert!(tracer.cast(&[side_prism()]).is_empty());
    let path = tracer.path();
    assert_eq!(path.len(), 2);
    assert!((path[1] - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn mirror_reflects_beam() {
    let mirror = Collider::mirror(Vec2::new(-2.0, 2.0), Vec2::new(1.0, 0.05));
    let mut tracer = BeamTracer::default();
    tracer.set_ray(Vec3::new(-4.0, 4.0, 0.0), Vec3::ZERO);
    assert!(tracer.cast(&[mirror]).is_empty());

    let path = tracer.path();
    assert_eq!(path.len(), 3);
    assert!((path[1].y - 2.05).abs() < 1e-4);
    // Bounced back up and to the right.
    assert!(path[2].y > path[1].y);
    assert!(path[2].x > path[1].x);
}

#[test]
fn reflected_beam_can_reach_the_prism() {
    let mirror = Collider::mirror(Vec2::new(-2.0, 2.0), Vec2::new(1.0, 0.05));
    let prism = Collider::prism(
        Aabb::from_center(Vec2::new(0.0, 4.0), Vec2::splat(0.5)),
        Vec3::ZERO,
    );
    let mut tracer = BeamTracer::default();
    tracer.set_ray(Vec3::new(-4.0, 4.0, 0.0), Vec3::ZERO);
    let events = tracer.cast(&[mirror, prism]);

    assert!(matches!(events.as_slice(), [RayEvent::Enter(_), RayEvent::Move(_)]));
    let RayEvent::Move(hit) = events[1] else {
        unreachable!()
    };
    assert_eq!(hit.normal, Some(Vec3::new(-1.0, 0.0, 0.0)));
    let up_right = Vec3::new(1.0, 1.0, 0.0).normalize();
    assert!((hit.direction - up_right).length() < 1e-5);
    assert_eq!(tracer.path().len(), 4);
}

#[test]
fn bounce_limit_stops_the_beam() {
    let top = Collider::mirror(Vec2::new(0.0, 1.0), Vec2::new(1000.0, 0.05));
    let bottom = Collider::mirror(Vec2::new(0.0, -1.0), Vec2::new(1000.0, 0.05));
    let mut tracer = BeamTracer::new(3, 100.0);
    tracer.set_ray(Vec3::new(-10.0, 0.5, 0.0), Vec3::ZERO);
    assert!(tracer.cast(&[top, bottom]).is_empty());
    // Origin, three reflections and the final contact.
    assert_eq!(tracer.path().len(), 5);
}

#[test]
fn frame_loop_over_the_portfolio_scene() {
    let colliders = scene_colliders(800.0);
    let viewport = Vec2::new(1920.0, 1080.0) / 70.0;
    let mut tracer = BeamTracer::default();
    let mut controller = BeamController::default();

    let mut frame = |controller: &mut BeamController, pointer: Vec2| {
        controller.on_tick(pointer, viewport, &mut tracer);
        for ev in tracer.cast(&colliders) {
            controller.dispatch(ev);
        }
    };

    // Upper right: the beam lands on top of the name.
    frame(&mut controller, Vec2::new(0.3, 0.5));
    assert!(controller.state().is_hit());
    assert_eq!(controller.state().rainbow.emissive_intensity, 20.0);
    let flare = controller.state().flare.clone();
    assert!((flare.position.y - CAP_HEIGHT_EM * TEXT_SIZE_SMALL).abs() < 1e-4);
    assert_eq!(flare.position.z, -0.5);

    frame(&mut controller, Vec2::new(0.3, 0.5));
    assert!(controller.state().flare.visible);
    assert!(controller.state().rainbow.emissive_intensity < 20.0);

    // Pointer over the name itself: the beam starts inside the slab.
    let inside = Vec2::new(0.0, 0.2 / (viewport.y / 2.0));
    frame(&mut controller, inside);
    assert!(!controller.state().is_hit());

    let before = controller.state().rainbow.emissive_intensity;
    frame(&mut controller, inside);
    assert!(!controller.state().flare.visible);
    assert!(controller.state().rainbow.emissive_intensity < before);
}

#[test]
fn beam_from_below_tracks_the_pointer() {
    let colliders = scene_colliders(800.0);
    let viewport = Vec2::new(1280.0, 720.0) / 70.0;
    let mut tracer = BeamTracer::default();
    let mut controller = BeamController::default();
    let bottom = -DESCENDER_EM * TEXT_SIZE_SMALL;

    let mut previous: Option<(Vec3, f32)> = None;
    for step in -18..=18 {
        let pointer = Vec2::new(step as f32 * 0.05, -0.5);
        controller.on_tick(pointer, viewport, &mut tracer);
        for ev in tracer.cast(&colliders) {
            controller.dispatch(ev);
        }
        let state = controller.state();
        assert!(state.is_hit(), "pointer {pointer} missed the name");

        let flare = state.flare.position;
        let rotation = state.rainbow.rotation_z;
        assert!((flare.y - bottom).abs() < 1e-5, "flare {flare} not on the underside");
        assert!(flare.truncate().length() > 0.1);
        assert!(rotation.is_finite());

        if let Some((last_flare, last_rotation)) = previous {
            assert!(flare.x > last_flare.x, "flare stopped following the pointer");
            assert!(
                (rotation - last_rotation).abs() < 0.5,
                "rainbow jumped from {last_rotation} to {rotation}"
            );
        }
        previous = Some((flare, rotation));
    }
}

#[test]
fn config_overrides_from_json() {
    let cfg: BeamConfig =
        serde_json::from_str(r#"{ "refraction_gain": 3.0, "glass_ior": 1.5 }"#).unwrap();
    assert_eq!(cfg.refraction_gain, 3.0);
    assert_eq!(cfg.glass_ior, 1.5);
    assert_eq!(cfg.air_ior, BeamConfig::default().air_ior);
    assert!(cfg.validate().is_ok());

    let bad: BeamConfig = serde_json::from_str(r#"{ "ambient_decay_speed": 2.0 }"#).unwrap();
    assert!(matches!(
        bad.validate(),
        Err(ConfigError::InvalidFactor {
            field: "ambient_decay_speed",
            ..
        })
    ));
}

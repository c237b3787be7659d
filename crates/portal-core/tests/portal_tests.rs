// Host-side tests for the per-frame orchestrator: time-driven uniforms,
// pixel-ratio resizes, and the tick-then-project frame update.

use glam::{Vec2, Vec3};
use portal_core::{
    anchor_specs, fireflies_uniforms, resolve_anchors, Anchor, AxisBounds, Camera, ManualClock,
    OverlaySurface, ParticleField, Portal, Viewport, U_PIXEL_RATIO, U_SIZE, U_TIME,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, Default)]
struct RecordingSurface {
    size: Vec2,
    last: Option<Vec2>,
    writes: usize,
}

impl OverlaySurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_translation(&mut self, offset: Vec2) {
        self.last = Some(offset);
        self.writes += 1;
    }
}

fn test_anchors() -> Vec<Anchor<RecordingSurface>> {
    let (anchors, errors) = resolve_anchors(&anchor_specs(), |_| {
        Some(RecordingSurface {
            size: Vec2::new(40.0, 20.0),
            ..Default::default()
        })
    });
    assert!(errors.is_empty());
    anchors
}

fn make_portal() -> Portal<ManualClock, RecordingSurface> {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(
        4,
        AxisBounds::new(-2.0, 2.0).unwrap(),
        AxisBounds::new(0.0, 1.5).unwrap(),
        AxisBounds::new(-2.0, 2.0).unwrap(),
        &mut rng,
    )
    .unwrap();
    Portal::new(ManualClock::default(), 1.0, field, test_anchors()).unwrap()
}

fn straight_on_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 6.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 800.0 / 600.0,
        fovy_radians: std::f32::consts::FRAC_PI_4,
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn tick_writes_elapsed_seconds_to_both_materials() {
    let mut portal = make_portal();
    portal.clock_mut().set_millis(4000.0);
    portal.tick().unwrap();
    assert_eq!(portal.fireflies().scalar(U_TIME), Some(4.0));
    assert_eq!(portal.portal_light().scalar(U_TIME), Some(4.0));

    portal.clock_mut().advance_millis(500.0);
    portal.tick().unwrap();
    assert_eq!(portal.fireflies().scalar(U_TIME), Some(4.5));
    assert_eq!(portal.portal_light().scalar(U_TIME), Some(4.5));
}

#[test]
fn time_starts_at_zero() {
    let mut portal = make_portal();
    portal.tick().unwrap();
    assert_eq!(portal.fireflies().scalar(U_TIME), Some(0.0));
}

#[test]
fn negative_clock_is_rejected_not_written() {
    let mut portal = make_portal();
    portal.clock_mut().set_millis(-5.0);
    assert!(portal.tick().is_err());
    // the uniform keeps its previous value
    assert_eq!(portal.fireflies().scalar(U_TIME), Some(0.0));
}

#[test]
fn resize_overwrites_pixel_ratio_and_ticks_leave_it_alone() {
    let mut portal = make_portal();
    portal.on_resize(1.5).unwrap();
    assert_eq!(portal.fireflies().scalar(U_PIXEL_RATIO), Some(1.5));

    portal.clock_mut().set_millis(2000.0);
    portal.tick().unwrap();
    assert_eq!(portal.fireflies().scalar(U_PIXEL_RATIO), Some(1.5));

    // same value again is a no-op in effect
    portal.on_resize(1.5).unwrap();
    assert_eq!(portal.fireflies().scalar(U_PIXEL_RATIO), Some(1.5));
}

#[test]
fn non_positive_pixel_ratio_is_rejected() {
    let mut portal = make_portal();
    assert!(portal.on_resize(0.0).is_err());
    assert!(portal.on_resize(-2.0).is_err());

    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(
        1,
        AxisBounds::new(0.0, 1.0).unwrap(),
        AxisBounds::new(0.0, 1.0).unwrap(),
        AxisBounds::new(0.0, 1.0).unwrap(),
        &mut rng,
    )
    .unwrap();
    let anchors: Vec<Anchor<RecordingSurface>> = Vec::new();
    assert!(Portal::new(ManualClock::default(), 0.0, field, anchors).is_err());
}

#[test]
fn fireflies_material_declares_its_full_uniform_set() {
    let portal = make_portal();
    assert_eq!(portal.fireflies().scalar(U_SIZE), Some(100.0));
    assert_eq!(portal.fireflies().scalar(U_PIXEL_RATIO), Some(1.0));
    assert_eq!(portal.portal_light().scalar(U_PIXEL_RATIO), None);
}

#[test]
fn uniform_writes_reject_bad_values() {
    let mut set = fireflies_uniforms(1.0);
    assert!(set.set_scalar(U_TIME, f32::NAN).is_err());
    assert!(set.set_scalar(U_TIME, -1.0).is_err());
    assert!(set.set_scalar("uNotDeclared", 1.0).is_err());
    assert!(set.set_scalar(U_TIME, 3.5).is_ok());
    assert_eq!(set.scalar(U_TIME), Some(3.5));
}

#[test]
fn update_runs_uniforms_then_projection() {
    let mut portal = make_portal();
    let camera = straight_on_camera();
    let viewport = Viewport::new(800.0, 600.0, 1.0).unwrap();
    portal.clock_mut().set_millis(1000.0);
    portal.update(&camera, &viewport).unwrap();

    assert_eq!(portal.fireflies().scalar(U_TIME), Some(1.0));
    for anchor in portal.anchors() {
        assert_eq!(
            anchor.surface().writes,
            1,
            "anchor `{}` repositioned exactly once",
            anchor.label()
        );
        assert!(anchor.surface().last.is_some());
    }
}

// Host-side tests for the firefly field generator.

use portal_core::{AxisBounds, ParticleField, FIREFLY_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_bounds() -> (AxisBounds, AxisBounds, AxisBounds) {
    (
        AxisBounds::new(-2.0, 2.0).unwrap(),
        AxisBounds::new(0.0, 1.5).unwrap(),
        AxisBounds::new(-2.0, 2.0).unwrap(),
    )
}

#[test]
fn reference_field_has_thirty_in_bounds_fireflies() {
    let (x, y, z) = reference_bounds();
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::generate(FIREFLY_COUNT, x, y, z, &mut rng).unwrap();

    assert_eq!(field.len(), 30);
    assert_eq!(field.scales().len(), 30);
    for p in field.positions() {
        assert!(p.x >= -2.0 && p.x < 2.0, "x out of bounds: {}", p.x);
        assert!(p.y >= 0.0 && p.y < 1.5, "y out of bounds: {}", p.y);
        assert!(p.z >= -2.0 && p.z < 2.0, "z out of bounds: {}", p.z);
    }
    for s in field.scales() {
        assert!((0.0..1.0).contains(s), "scale out of [0, 1): {s}");
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let (x, y, z) = reference_bounds();
    let a = ParticleField::generate(FIREFLY_COUNT, x, y, z, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = ParticleField::generate(FIREFLY_COUNT, x, y, z, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);

    let c = ParticleField::generate(FIREFLY_COUNT, x, y, z, &mut StdRng::seed_from_u64(10)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn degenerate_bounds_pin_the_axis() {
    let x = AxisBounds::new(1.0, 1.0).unwrap();
    let y = AxisBounds::new(0.0, 1.0).unwrap();
    let z = AxisBounds::new(-1.0, 1.0).unwrap();
    let field = ParticleField::generate(8, x, y, z, &mut StdRng::seed_from_u64(3)).unwrap();
    for p in field.positions() {
        assert_eq!(p.x, 1.0);
    }
}

#[test]
fn zero_count_is_rejected() {
    let (x, y, z) = reference_bounds();
    assert!(ParticleField::generate(0, x, y, z, &mut StdRng::seed_from_u64(1)).is_err());
}

#[test]
fn inverted_or_non_finite_bounds_are_rejected() {
    assert!(AxisBounds::new(2.0, -2.0).is_err());
    assert!(AxisBounds::new(f32::NAN, 1.0).is_err());
    assert!(AxisBounds::new(0.0, f32::INFINITY).is_err());
    assert!(AxisBounds::new(-2.0, 2.0).is_ok());
}

#[test]
fn position_attribute_flattens_xyz_triples() {
    let (x, y, z) = reference_bounds();
    let field = ParticleField::generate(5, x, y, z, &mut StdRng::seed_from_u64(4)).unwrap();
    let attr = field.position_attribute();
    assert_eq!(attr.len(), 15);
    for (i, p) in field.positions().iter().enumerate() {
        assert_eq!(attr[i * 3], p.x);
        assert_eq!(attr[i * 3 + 1], p.y);
        assert_eq!(attr[i * 3 + 2], p.z);
    }
}

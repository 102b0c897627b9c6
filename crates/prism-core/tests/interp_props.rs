use prism_core::lerp;
use proptest::prelude::*;

proptest! {
    #[test]
    fn lerp_keeps_a_fixed_point(v in -100.0f32..100.0, factor in 0.001f32..=1.0) {
        prop_assert_eq!(lerp(v, v, factor), v);
    }

    #[test]
    fn lerp_never_moves_away_from_target(
        current in -100.0f32..100.0,
        target in -100.0f32..100.0,
        factor in 0.001f32..=1.0,
    ) {
        let next = lerp(current, target, factor);
        let slack = 1e-5 * (current.abs() + target.abs() + 1.0);
        prop_assert!((next - target).abs() <= (current - target).abs() + slack);
        prop_assert!(next >= current.min(target) - slack);
        prop_assert!(next <= current.max(target) + slack);
    }

    #[test]
    fn repeated_lerp_converges(
        current in -20.0f32..20.0,
        target in -20.0f32..20.0,
        factor in 0.05f32..=1.0,
    ) {
        let mut v = current;
        for _ in 0..400 {
            let before = (v - target).abs();
            v = lerp(v, target, factor);
            prop_assert!((v - target).abs() <= before + 1e-4);
        }
        prop_assert!((v - target).abs() < 1e-3);
    }
}

#![cfg(not(target_arch = "wasm32"))]

use cosine_lab::plot::sample_curve;
use cosine_lab::{AnimationMode, Mapper, Params, PlotAnimator, XRange};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = AnimationMode> {
    prop_oneof![
        Just(AnimationMode::None),
        Just(AnimationMode::A),
        Just(AnimationMode::B),
        Just(AnimationMode::C),
        Just(AnimationMode::D),
    ]
}

proptest! {
    #[test]
    fn mapped_samples_invert_to_formula(
        a in -10.0f64..10.0,
        b in 0.0f64..25.0,
        c in -7.0f64..7.0,
        d in -10.0f64..10.0,
        xmin in -50.0f64..0.0,
        span in 0.5f64..60.0,
    ) {
        let params = Params::new(a, b, c, d);
        let range = XRange { min: xmin, max: xmin + span };
        let m = Mapper::new(range, 1200.0, 650.0, 60.0, &params);
        let samples = 64;
        let path = sample_curve(&m, samples, |x| params.eval(x));
        let dx = span / samples as f64;
        for (i, &(_, py)) in path.subpaths()[0].iter().enumerate() {
            let x = xmin + i as f64 * dx;
            let world_y = m.ymax - (py - m.padding) / m.px_per_y;
            let expected = a * (b * x + c).cos() + d;
            prop_assert!((world_y - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn animated_frequency_stays_clamped(
        target_b in -1000.0f64..1000.0,
        mode in mode(),
        speed in prop::sample::select(vec![0.5, 1.0, 2.0]),
        dts in prop::collection::vec(0.0f64..0.5, 1..40),
    ) {
        let mut anim = PlotAnimator::default();
        anim.set_targets(Params::new(1.0, target_b, 0.0, 0.0)).unwrap();
        anim.set_animation_mode(mode);
        anim.set_speed(speed).unwrap();
        anim.start(0.0);
        let mut now = 0.0;
        for dt in dts {
            now += dt;
            anim.step(now);
            let b = anim.animated().b;
            prop_assert!((0.0..=25.0).contains(&b), "b = {}", b);
        }
    }

    #[test]
    fn inverted_range_always_resets(xmin in -1e6f64..1e6, shrink in 0.0f64..1e6) {
        let (range, reset) = XRange::resolve(xmin, xmin - shrink, XRange::DEFAULT);
        prop_assert!(reset);
        prop_assert_eq!(range, XRange::DEFAULT);
    }

    #[test]
    fn smoothing_gap_shrinks_by_fixed_ratio(
        start in -100.0f64..100.0,
        target in -100.0f64..100.0,
        frames in 1usize..60,
    ) {
        let mut anim = PlotAnimator::default();
        anim.set_targets(Params::new(start, 1.0, 0.0, 0.0)).unwrap();
        for i in 0..600 {
            anim.step(i as f64);
        }
        anim.set_targets(Params::new(target, 1.0, 0.0, 0.0)).unwrap();
        let initial_gap = (target - anim.animated().a).abs();
        for i in 0..frames {
            anim.step(600.0 + i as f64);
        }
        let gap = (target - anim.animated().a).abs();
        let bound = initial_gap * 0.84f64.powi(frames as i32) + 1e-9;
        prop_assert!(gap <= bound, "gap {} > {}", gap, bound);
    }
}

use cosine_lab::{Mapper, Params, XRange};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn inverted_or_empty_range_resets_to_default() {
    for (min, max) in [(5.0, -5.0), (3.0, 3.0), (10.0, -10.0)] {
        let (range, reset) = XRange::resolve(min, max, XRange::DEFAULT);
        assert_eq!(range, XRange::DEFAULT, "min={min} max={max}");
        assert!(reset);
    }
}

#[test]
fn valid_range_is_kept() {
    let (range, reset) = XRange::resolve(-2.0, 7.5, XRange::DEFAULT);
    assert_eq!(range, XRange { min: -2.0, max: 7.5 });
    assert!(!reset);

    // Zero is a legitimate bound.
    let (range, reset) = XRange::resolve(0.0, 4.0, XRange::DEFAULT);
    assert_eq!(range, XRange { min: 0.0, max: 4.0 });
    assert!(!reset);
}

#[test]
fn unparsed_bound_falls_back_without_rewrite() {
    let (range, reset) = XRange::resolve(f64::NAN, 3.0, XRange::DEFAULT);
    assert_eq!(range, XRange { min: -10.0, max: 3.0 });
    assert!(!reset);

    // The fallback itself can produce an inverted range.
    let (range, reset) = XRange::resolve(f64::NAN, -20.0, XRange::DEFAULT);
    assert_eq!(range, XRange::DEFAULT);
    assert!(reset);
}

#[test]
fn plot_area_corners() {
    let m = Mapper::new(XRange::DEFAULT, 1200.0, 650.0, 60.0, &Params::DEFAULT);
    assert!(approx_eq(m.x_to_px(-10.0), 60.0, 1e-9));
    assert!(approx_eq(m.x_to_px(10.0), 1140.0, 1e-9));
    assert!(approx_eq(m.y_to_px(m.ymax), 60.0, 1e-9));
    assert!(approx_eq(m.y_to_px(m.ymin), 590.0, 1e-9));
    assert!(approx_eq(m.x_to_px(0.0), 600.0, 1e-9));
}

#[test]
fn y_range_follows_target_magnitude() {
    let small = Mapper::new(XRange::DEFAULT, 800.0, 600.0, 60.0, &Params::new(1.0, 1.0, 0.0, 0.0));
    assert_eq!((small.ymin, small.ymax), (-2.5, 2.5));

    let large = Mapper::new(XRange::DEFAULT, 800.0, 600.0, 60.0, &Params::new(4.0, 1.0, 0.0, -2.0));
    assert_eq!((large.ymin, large.ymax), (-9.0, 9.0));
}

#[test]
fn axes_pin_to_edge_when_zero_is_out_of_view() {
    let params = Params::DEFAULT;
    let right_of_zero = Mapper::new(XRange { min: 2.0, max: 8.0 }, 1200.0, 650.0, 60.0, &params);
    assert_eq!(right_of_zero.axes_origin().0, right_of_zero.left());

    let left_of_zero = Mapper::new(XRange { min: -8.0, max: -2.0 }, 1200.0, 650.0, 60.0, &params);
    assert_eq!(left_of_zero.axes_origin().0, left_of_zero.right());

    let centred = Mapper::new(XRange::DEFAULT, 1200.0, 650.0, 60.0, &params);
    assert!(approx_eq(centred.axes_origin().1, centred.y_to_px(0.0), 1e-9));
}

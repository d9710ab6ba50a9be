use cosine_lab::plot::{draw_frame, sample_count, sample_curve, Overlay};
use cosine_lab::surface::DrawOp;
use cosine_lab::{Mapper, Params, PlotConfig, RecordingSurface, XRange, PALETTE};

fn mapper(range: XRange) -> Mapper {
    Mapper::new(range, 1200.0, 650.0, 60.0, &Params::DEFAULT)
}

#[test]
fn sample_density_tracks_visible_range() {
    let config = PlotConfig::default();
    assert_eq!(sample_count(XRange::DEFAULT, &config), 2400);
    assert_eq!(sample_count(XRange { min: -1.0, max: 1.0 }, &config), 1000);
    assert_eq!(sample_count(XRange { min: -1e9, max: 1e9 }, &config), config.max_samples);
}

#[test]
fn non_finite_values_break_the_line() {
    let m = mapper(XRange { min: -2.0, max: 2.0 });
    let path = sample_curve(&m, 400, |x| if x.abs() < 0.5 { f64::NAN } else { x });
    assert_eq!(path.subpaths().len(), 2);
    assert!(path.point_count() < 401);

    let empty = sample_curve(&m, 100, |_| f64::INFINITY);
    assert!(empty.is_empty());
}

#[test]
fn curve_points_match_the_formula() {
    let params = Params::new(1.5, 2.0, 0.3, -0.5);
    let m = mapper(XRange { min: -3.0, max: 5.0 });
    let samples = 80;
    let path = sample_curve(&m, samples, |x| params.eval(x));
    let points = &path.subpaths()[0];
    assert_eq!(points.len(), samples + 1);

    let dx = 8.0 / samples as f64;
    for (i, &(px, py)) in points.iter().enumerate() {
        let x = -3.0 + i as f64 * dx;
        let y = 1.5 * (2.0 * x + 0.3).cos() - 0.5;
        assert!((px - m.x_to_px(x)).abs() < 1e-9);
        assert!((py - m.y_to_px(y)).abs() < 1e-9, "sample {i}");
    }
}

#[test]
fn frame_draws_curve_glow_and_caption() {
    let m = mapper(XRange::DEFAULT);
    let mut surface = RecordingSurface::new(1200.0, 650.0);
    let params = Params::new(2.0, 3.0, -1.0, 0.25);
    let caption = draw_frame(&mut surface, &m, &params, Overlay::default(), &PlotConfig::default());

    assert_eq!(caption, "y = 2·cos(3x - 1) + 0.25");
    assert_eq!(surface.ops()[0], DrawOp::Background(PALETTE.background.to_owned()));
    assert_eq!(surface.paths_with_color(PALETTE.graph).count(), 1);
    assert_eq!(surface.paths_with_color("rgba(0,240,209,0.06)").count(), 1);
    assert_eq!(surface.texts().last().copied(), Some(caption.as_str()));
}

#[test]
fn ticks_and_origin_follow_overlay() {
    let m = mapper(XRange { min: -3.0, max: 3.0 });
    let params = Params::DEFAULT;
    let config = PlotConfig::default();

    let mut bare = RecordingSurface::new(1200.0, 650.0);
    let overlay = Overlay {
        show_ticks: false,
        show_origin: false,
    };
    draw_frame(&mut bare, &m, &params, overlay, &config);
    assert_eq!(bare.texts().len(), 1, "caption only");
    assert!(bare.circles().is_empty());

    let mut full = RecordingSurface::new(1200.0, 650.0);
    draw_frame(&mut full, &m, &params, Overlay::default(), &config);
    let texts = full.texts();
    // x: -3..=3 without 0, y: -3..=2 without 0 (y spans ±2.5).
    for label in ["-3", "-1", "1", "3", "2", "(0,0)"] {
        assert!(texts.contains(&label), "missing {label}");
    }
    assert!(!texts.contains(&"0"));
    assert_eq!(full.circles(), vec![(m.axes_origin(), 4.0)]);
}

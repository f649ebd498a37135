use gpui_trend_chart::data_types::{AxisRange, Margins};
use gpui_trend_chart::scales::ChartScale;
use gpui_trend_chart::transform::{PlotRect, PlotTransform};
use rand::Rng;

fn default_rect() -> PlotRect {
    PlotRect::from_margins(800.0, 500.0, &Margins::default())
}

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(0.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(500.0), 100.0);
}

#[test]
fn test_degenerate_domain_is_widened() {
    let scale = ChartScale::new_linear((5.0, 5.0), (0.0, 100.0));
    let (min, max) = scale.domain();
    assert!(min < max);
    assert_eq!(scale.map(5.0), 50.0);
}

#[test]
fn test_non_finite_domain_is_ignored() {
    let mut scale = ChartScale::new_linear((0.0, 10.0), (0.0, 100.0));
    scale.update_domain(f64::NAN, 20.0);
    assert_eq!(scale.domain(), (0.0, 10.0));
}

#[test]
fn test_rescale() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 100.0));
    assert_eq!(scale.rescale(1.0, 0.0).domain(), (0.0, 100.0));

    // Zoom x2 around the centre.
    let zoomed = scale.rescale(2.0, -50.0);
    assert_eq!(zoomed.domain(), (25.0, 75.0));
    assert_eq!(zoomed.range(), (0.0, 100.0));
}

#[test]
fn test_ticks() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));
    assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert!(scale.ticks(0).is_empty());
}

#[test]
fn test_ticks_follow_rescaled_domain() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 100.0));
    let zoomed = scale.rescale(2.0, -50.0);
    assert_eq!(zoomed.ticks(5), vec![30.0, 40.0, 50.0, 60.0, 70.0]);
    assert_eq!(zoomed.map(50.0), 50.0);
    assert_eq!(zoomed.invert(0.0), 25.0);
}

#[test]
fn test_plot_rect_from_margins() {
    let rect = default_rect();
    assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (20.0, 20.0, 740.0, 470.0));
    assert_eq!(rect.width(), 720.0);
    assert_eq!(rect.height(), 450.0);
    assert_eq!(rect.clamp(-5.0, 900.0), (20.0, 470.0));
}

#[test]
fn test_plot_transform() {
    let transform = PlotTransform::from_domains(
        AxisRange::new(0.0, 720.0),
        AxisRange::new(0.0, 450.0),
        default_rect(),
    );

    // Price grows upwards.
    assert_eq!(transform.project(0.0, 0.0), (20.0, 470.0));
    assert_eq!(transform.project(720.0, 450.0), (740.0, 20.0));

    let (date, price) = transform.unproject(380.0, 245.0);
    assert!((date - 360.0).abs() < 1e-9);
    assert!((price - 225.0).abs() < 1e-9);
}

#[test]
fn test_clamped_unproject() {
    let transform = PlotTransform::from_domains(
        AxisRange::new(1_000.0, 2_000.0),
        AxisRange::new(10.0, 20.0),
        default_rect(),
    );
    let (date, price) = transform.clamped_unproject(-100.0, -100.0);
    assert_eq!(date, 1_000);
    assert!((price - 20.0).abs() < 1e-9);

    let (date, price) = transform.clamped_unproject(5_000.0, 5_000.0);
    assert_eq!(date, 2_000);
    assert!((price - 10.0).abs() < 1e-9);
}

#[test]
fn test_round_trip_random_pixels() {
    let mut rng = rand::rng();
    let rect = default_rect();
    let transform = PlotTransform::from_domains(
        AxisRange::new(1_700_000_000_000.0, 1_700_000_000_000.0 + 86_400_000.0 * 90.0),
        AxisRange::new(93.7, 142.1),
        rect,
    );

    for _ in 0..1_000 {
        let x = rng.random_range(rect.left..=rect.right);
        let y = rng.random_range(rect.top..=rect.bottom);
        let (date, price) = transform.unproject(x, y);
        let (px, py) = transform.project(date, price);
        assert!((px - x).abs() < 1e-6, "x {x} came back as {px}");
        assert!((py - y).abs() < 1e-6, "y {y} came back as {py}");
    }
}

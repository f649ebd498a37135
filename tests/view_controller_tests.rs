use gpui_trend_chart::data_types::{AxisRange, ChartConfig, Ohlcv, OhlcvSeries, ZoomConfig, DAY_MS};
use gpui_trend_chart::scales::ChartScale;
use gpui_trend_chart::transform::{PlotRect, PlotTransform};
use gpui_trend_chart::view_controller::{TransformPhase, ViewController, ViewTransformController, ZoomTransform};
use gpui_trend_chart::ChartSession;

const T0: i64 = 1_700_000_000_000;
const LEFT: f64 = 20.0;
const RIGHT: f64 = 740.0;

fn bar(day: i64, low: f64, high: f64) -> Ohlcv {
    Ohlcv::new(T0 + day * DAY_MS, low, high, low, high, 1_000.0)
}

#[test]
fn test_compute_auto_fit() {
    let (min, max) = ViewController::compute_auto_fit(10.0, 20.0, 0.1);
    assert_eq!(min, 9.0);
    assert_eq!(max, 21.0);
}

#[test]
fn test_compute_zoom_factor() {
    assert_eq!(ViewController::compute_zoom_factor(-500.0, 0.002), 2.0);
    assert_eq!(ViewController::compute_zoom_factor(500.0, 0.002), 0.5);
    assert_eq!(ViewController::compute_zoom_factor(0.0, 0.002), 1.0);
}

#[test]
fn test_scale_is_clamped() {
    let cfg = ZoomConfig::default();
    let t = ViewController::constrain(ZoomTransform { k: 20.0, x: 0.0 }, LEFT, RIGHT, &cfg);
    assert_eq!(t.k, 10.0);
    let t = ViewController::constrain(ZoomTransform { k: 0.5, x: 0.0 }, LEFT, RIGHT, &cfg);
    assert_eq!(t.k, 1.0);
}

#[test]
fn test_no_pan_at_identity() {
    let cfg = ZoomConfig::default();
    let t = ViewController::pan_by(ZoomTransform::IDENTITY, 50.0, LEFT, RIGHT, &cfg);
    assert_eq!(t, ZoomTransform::IDENTITY);
}

#[test]
fn test_zoom_at_keeps_pivot() {
    let cfg = ZoomConfig::default();
    let t = ViewController::zoom_at(ZoomTransform::IDENTITY, 380.0, 2.0, LEFT, RIGHT, &cfg);
    assert_eq!(t.k, 2.0);
    assert_eq!(t.x, -380.0);
    // The pre-zoom pixel under the pointer is unchanged.
    assert_eq!((380.0 - t.x) / t.k, 380.0);
}

#[test]
fn test_pan_is_clamped_to_plot() {
    let cfg = ZoomConfig::default();
    let zoomed = ZoomTransform { k: 2.0, x: -380.0 };
    let t = ViewController::pan_by(zoomed, 1_000.0, LEFT, RIGHT, &cfg);
    assert_eq!(t.x, -20.0);
    let t = ViewController::pan_by(zoomed, -1_000.0, LEFT, RIGHT, &cfg);
    assert_eq!(t.x, -740.0);
}

#[test]
fn test_visible_price_domain() {
    let series = OhlcvSeries::new(vec![bar(0, 10.0, 20.0), bar(1, 15.0, 30.0), bar(2, 50.0, 60.0)]).unwrap();
    let previous = AxisRange::new(0.0, 1.0);

    let time = AxisRange::new(T0 as f64, (T0 + DAY_MS) as f64);
    let domain = ViewController::visible_price_domain(&series, time, previous, 0.1);
    assert_eq!(domain, AxisRange::new(8.0, 32.0));
}

#[test]
fn test_visible_price_domain_keeps_previous_when_sparse() {
    let series = OhlcvSeries::new(vec![bar(0, 10.0, 20.0), bar(5, 15.0, 30.0)]).unwrap();
    let previous = AxisRange::new(1.0, 2.0);

    // One point visible.
    let time = AxisRange::new(T0 as f64, (T0 + DAY_MS) as f64);
    assert_eq!(ViewController::visible_price_domain(&series, time, previous, 0.1), previous);

    // Nothing visible.
    let time = AxisRange::new((T0 + DAY_MS) as f64, (T0 + 2 * DAY_MS) as f64);
    assert_eq!(ViewController::visible_price_domain(&series, time, previous, 0.1), previous);
}

#[test]
fn test_zoom_to_single_point_keeps_price_domain() {
    let mut session = ChartSession::new(ChartConfig::default()).unwrap();
    session
        .initialize(
            vec![bar(0, 10.0, 12.0), bar(1, 11.0, 14.0), bar(100, 40.0, 50.0)],
            ChartConfig::default(),
        )
        .unwrap();
    let before = session.transform().price_domain();

    // Max zoom at the right edge leaves only the last bar visible.
    session.zoom_at(RIGHT, 10.0);
    assert_eq!(session.zoom().k, 10.0);
    let time = session.transform().time_domain();
    assert!(time.min > (T0 + DAY_MS) as f64);
    assert_eq!(session.transform().price_domain(), before);
}

#[test]
fn test_zoom_rescales_price_to_visible_points() {
    let bars: Vec<Ohlcv> = (0..20).map(|d| bar(d, d as f64, d as f64 + 1.0)).collect();
    let mut session = ChartSession::new(ChartConfig::default()).unwrap();
    session.initialize(bars, ChartConfig::default()).unwrap();
    assert_eq!(session.transform().price_domain(), AxisRange::new(-2.0, 22.0));

    session.zoom_at(LEFT, 2.0);
    let price = session.transform().price_domain();
    assert!(price.max < 22.0);
    assert!(price.min < price.max);
}

#[test]
fn test_zoom_ignored_while_drawing() {
    let bars: Vec<Ohlcv> = (0..20).map(|d| bar(d, 10.0, 11.0 + d as f64)).collect();
    let mut session = ChartSession::new(ChartConfig::default()).unwrap();
    session.initialize(bars, ChartConfig::default()).unwrap();

    session.arm_horizontal_line_drawing(|| {});
    session.scroll(380.0, -500.0);
    session.pan_by(30.0);
    assert_eq!(session.zoom(), ZoomTransform::IDENTITY);

    session.cancel_drawing();
    session.scroll(380.0, -500.0);
    assert_eq!(session.zoom().k, 2.0);

    session.reset_view();
    assert_eq!(session.zoom(), ZoomTransform::IDENTITY);
}

#[test]
fn test_controller_gesture_phase_and_rescale() {
    let series = OhlcvSeries::new((0..10).map(|d| bar(d, 10.0, 20.0 + d as f64)).collect()).unwrap();
    let bounds = PlotRect {
        left: LEFT,
        top: 20.0,
        right: RIGHT,
        bottom: 470.0,
    };
    let time = AxisRange::new(T0 as f64, (T0 + 9 * DAY_MS) as f64);
    let mut transform = PlotTransform::from_domains(time, AxisRange::new(0.0, 40.0), bounds);
    let original = ChartScale::new_linear(time.as_tuple(), (LEFT, RIGHT));
    let mut controller = ViewTransformController::new(original, ZoomConfig::default(), 0.1);

    assert_eq!(controller.phase(), TransformPhase::Idle);
    controller.begin_gesture();
    assert_eq!(controller.phase(), TransformPhase::Transforming);
    controller.zoom_at(RIGHT, 2.0, &series, &mut transform);
    controller.end_gesture();
    assert_eq!(controller.phase(), TransformPhase::Idle);

    // Zooming at the right edge keeps the last date pinned there.
    assert_eq!(controller.zoom(), ZoomTransform { k: 2.0, x: -RIGHT });
    let visible = transform.time_domain();
    assert!((visible.max - time.max).abs() < 1.0);
    assert!((visible.min - (time.min + time.span() / 2.0)).abs() < 1.0);

    controller.reset(&series, &mut transform);
    assert_eq!(transform.time_domain(), time);
}

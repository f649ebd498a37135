use gpui_trend_chart::axis_renderer::AxisRenderer;
use gpui_trend_chart::data_types::{AxisFormat, AxisRange, TimeUnit, DAY_MS};
use gpui_trend_chart::scene::{Primitive, Scene, TextAlign};
use gpui_trend_chart::theme::ChartTheme;
use gpui_trend_chart::transform::{PlotRect, PlotTransform};

const T0: i64 = 1_700_000_000_000;

fn transform() -> PlotTransform {
    let bounds = PlotRect {
        left: 20.0,
        top: 20.0,
        right: 740.0,
        bottom: 470.0,
    };
    PlotTransform::from_domains(
        AxisRange::new(T0 as f64, (T0 + 30 * DAY_MS) as f64),
        AxisRange::new(0.0, 100.0),
        bounds,
    )
}

#[test]
fn test_axis_range_padding() {
    let range = AxisRange::new(10.0, 20.0).padded(0.1);
    assert_eq!(range, AxisRange::new(9.0, 21.0));
    assert!(range.contains(20.5));
    assert!(!range.contains(21.5));
    assert!(!AxisRange::new(5.0, 5.0).is_valid());
    assert!(!AxisRange::new(0.0, f64::NAN).is_valid());
}

#[test]
fn test_tick_count_fits_axis() {
    assert_eq!(AxisRenderer::tick_count(450.0, &AxisFormat::Numeric), 11);
    assert_eq!(AxisRenderer::tick_count(720.0, &AxisFormat::Time(TimeUnit::Milliseconds)), 8);
    assert_eq!(AxisRenderer::tick_count(10.0, &AxisFormat::Numeric), 2);
    assert_eq!(AxisRenderer::tick_count(10_000.0, &AxisFormat::Numeric), 20);
}

#[test]
fn test_price_axis_labels() {
    let t = transform();
    let mut scene = Scene::new(t.bounds);
    AxisRenderer::render(&mut scene, &t, &ChartTheme::default());

    let price_labels: Vec<(&str, f64)> = scene
        .overlay
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, origin, align: TextAlign::Left, .. } => Some((text.as_str(), origin.0)),
            _ => None,
        })
        .collect();
    assert_eq!(price_labels.len(), 11);
    assert!(price_labels.iter().any(|(text, _)| *text == "50.00"));
    assert!(price_labels.iter().all(|(_, x)| *x > t.bounds.right));
}

#[test]
fn test_time_axis_and_grid_stay_in_plot() {
    let t = transform();
    let mut scene = Scene::new(t.bounds);
    AxisRenderer::render(&mut scene, &t, &ChartTheme::default());

    let time_labels = scene
        .overlay
        .iter()
        .filter(|p| matches!(p, Primitive::Text { align: TextAlign::Center, .. }))
        .count();
    assert!(time_labels >= 2);

    let b = t.bounds;
    for p in &scene.plot {
        let Primitive::Line { from, to, .. } = p else {
            panic!("axis grid should only contain lines");
        };
        for (x, y) in [from, to] {
            assert!(*x >= b.left && *x <= b.right && *y >= b.top && *y <= b.bottom);
        }
    }
    assert_eq!(scene.plot.len(), 11 + time_labels);
}

use eyre::{eyre, Result};
use gpui_trend_chart::data_types::{
    ChartConfig, ChartKind, DataProvider, DrawMode, Interval, Ohlcv, SeriesRequest, Timeframe, TrendLineKind,
    VecDataProvider, DAY_MS,
};
use gpui_trend_chart::ChartSession;

const T0: i64 = 1_700_000_000_000;

fn bars(n: i64) -> Vec<Ohlcv> {
    (0..n)
        .map(|d| {
            let base = 100.0 + d as f64;
            Ohlcv::new(T0 + d * DAY_MS, base, base + 2.0, base - 2.0, base + 1.0, 1_000.0)
        })
        .collect()
}

fn session_with(points: Vec<Ohlcv>) -> ChartSession {
    let mut session = ChartSession::new(ChartConfig::default()).unwrap();
    session.initialize(points, ChartConfig::default()).unwrap();
    session
}

fn request() -> SeriesRequest {
    SeriesRequest::new("AAPL", Timeframe::OneMonth, Interval::OneDay).unwrap()
}

struct OfflineProvider;

impl DataProvider for OfflineProvider {
    fn fetch(&self, _request: &SeriesRequest) -> Result<Vec<Ohlcv>> {
        Err(eyre!("connection refused"))
    }
}

#[test]
fn test_initialize_rejects_bad_input() {
    let mut session = session_with(bars(5));
    let before = session.series().clone();

    let mut unsorted = bars(3);
    unsorted.swap(0, 2);
    assert!(session.initialize(unsorted, ChartConfig::default()).is_err());

    let mut cramped = ChartConfig::default();
    cramped.margins.left = 500.0;
    cramped.margins.right = 400.0;
    assert!(session.initialize(bars(3), cramped).is_err());

    let mut bad_sma = ChartConfig::default();
    bad_sma.sma.enabled = true;
    bad_sma.sma.period = 0;
    assert!(session.initialize(bars(3), bad_sma).is_err());

    let mut nan = bars(3);
    nan[1].close = f64::NAN;
    assert!(session.initialize(nan, ChartConfig::default()).is_err());

    assert_eq!(session.series(), &before);
}

#[test]
fn test_initialize_keeps_committed_lines() {
    let mut session = session_with(bars(5));
    session.arm_horizontal_line_drawing(|| {});
    session.click(300.0, 200.0);
    session.arm_free_line_drawing(|| {});
    session.click(100.0, 100.0);
    assert!(session.annotations().pending().is_some());

    session.initialize(bars(10), ChartConfig::default()).unwrap();

    assert_eq!(session.annotations().committed().len(), 1);
    assert!(session.annotations().pending().is_none());
    assert_eq!(session.draw_mode(), DrawMode::None);
    assert_eq!(session.annotations().selected(), None);
    assert_eq!(session.zoom().k, 1.0);
}

#[test]
fn test_empty_series_is_drawable() {
    let session = session_with(Vec::new());
    let domain = session.transform().price_domain();
    assert_eq!((domain.min, domain.max), (0.0, 100.0));
    assert!(session.tooltip().is_none());
    let _ = session.scene();
}

#[test]
fn test_refresh_failure_leaves_session_untouched() {
    let mut session = session_with(bars(5));
    session.arm_horizontal_line_drawing(|| {});
    session.click(300.0, 200.0);
    let series = session.series().clone();
    let transform = session.transform().clone();
    let selected = session.annotations().selected().cloned();

    assert!(session.refresh(&OfflineProvider, &request()).is_err());

    let mut unsorted = bars(4);
    unsorted.reverse();
    let err = session
        .refresh(&VecDataProvider::new(unsorted), &request())
        .unwrap_err();
    assert!(format!("{err:#}").contains("AAPL"));

    assert_eq!(session.series(), &series);
    assert_eq!(session.transform(), &transform);
    assert_eq!(session.annotations().selected().cloned(), selected);
    assert_eq!(session.annotations().committed().len(), 1);
}

#[test]
fn test_refresh_rehydrates_annotations() {
    let mut session = session_with(bars(5));
    session.arm_horizontal_line_drawing(|| {});
    session.click(300.0, 200.0);
    session.arm_free_line_drawing(|| {});
    session.click(100.0, 300.0);
    session.click(400.0, 150.0);
    let free_before = session
        .annotations()
        .committed()
        .iter()
        .find(|l| l.kind == TrendLineKind::Free)
        .cloned()
        .unwrap();

    session.refresh(&VecDataProvider::new(bars(20)), &request()).unwrap();

    let model = session.annotations();
    assert_eq!(model.committed().len(), 2);
    assert_eq!(model.selected(), None);
    let horizontal = model.committed().iter().find(|l| l.kind == TrendLineKind::Horizontal).unwrap();
    assert_eq!((horizontal.start_date, horizontal.end_date), (T0, T0 + 19 * DAY_MS));
    assert_eq!(model.get(&free_before.id), Some(&free_before));
}

#[test]
fn test_rehydrate_deselects() {
    let mut session = session_with(bars(5));
    session.arm_horizontal_line_drawing(|| {});
    session.click(300.0, 200.0);
    assert!(session.annotations().selected().is_some());

    session.rehydrate_annotations();
    assert_eq!(session.annotations().selected(), None);
}

#[test]
fn test_append_point() {
    let mut session = session_with(bars(5));
    assert!(session.append_point(Ohlcv::flat(T0, 1.0)).is_err());
    assert_eq!(session.series().len(), 5);

    session.append_point(Ohlcv::flat(T0 + 5 * DAY_MS, 110.0)).unwrap();
    assert_eq!(session.series().len(), 6);
    assert_eq!(session.transform().time_domain().max, (T0 + 5 * DAY_MS) as f64);

    session.zoom_at(380.0, 2.0);
    session.append_point(Ohlcv::flat(T0 + 6 * DAY_MS, 111.0)).unwrap();
    assert_eq!(session.zoom().k, 2.0);
}

#[test]
fn test_set_sma() {
    let mut session = session_with(bars(10));
    assert!(session.sma().is_empty());
    assert!(session.set_sma(true, 0).is_err());

    session.set_sma(true, 3).unwrap();
    assert_eq!(session.sma().len(), 8);
    assert_eq!(session.sma()[0].time, T0 + 2 * DAY_MS);

    session.set_sma(false, 3).unwrap();
    assert!(session.sma().is_empty());
}

#[test]
fn test_set_size_moves_the_plot() {
    let mut session = session_with(bars(10));
    session.set_size(1000.0, 600.0).unwrap();
    let bounds = session.transform().bounds;
    assert_eq!((bounds.left, bounds.top, bounds.right, bounds.bottom), (20.0, 20.0, 940.0, 570.0));

    assert!(session.set_size(50.0, 40.0).is_err());
    assert_eq!(session.config().width, 1000.0);
}

#[test]
fn test_scroll_zooms_unless_drawing() {
    let mut session = session_with(bars(10));
    session.arm_free_line_drawing(|| {});
    session.scroll(380.0, -500.0);
    assert_eq!(session.zoom().k, 1.0);

    session.cancel_drawing();
    session.scroll(380.0, -500.0);
    assert!((session.zoom().k - 2.0).abs() < 1e-9);
}

#[test]
fn test_tooltip_visibility() {
    let mut session = session_with(bars(10));
    assert!(session.tooltip().is_none());

    session.pointer_move(300.0, 200.0);
    assert!(session.tooltip().is_some());

    session.arm_horizontal_line_drawing(|| {});
    assert!(session.tooltip().is_none());
    session.cancel_drawing();

    session.pointer_down(300.0, 200.0);
    session.pointer_move(350.0, 200.0);
    assert!(session.tooltip().is_none());
    session.pointer_up(350.0, 200.0);
    assert!(session.tooltip().is_some());

    session.pointer_leave();
    assert!(session.tooltip().is_none());
}

#[test]
fn test_chart_kind_switch_keeps_view() {
    let mut session = session_with(bars(10));
    session.zoom_at(380.0, 3.0);
    let transform = session.transform().clone();
    session.set_chart_kind(ChartKind::Candlestick);
    assert_eq!(session.config().chart_kind, ChartKind::Candlestick);
    assert_eq!(session.transform(), &transform);
}

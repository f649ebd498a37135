#![cfg(feature = "gui")]

use gpui::{AppContext, TestAppContext};
use gpui_trend_chart::data_types::{ChartConfig, Ohlcv, DAY_MS};
use gpui_trend_chart::{ChartSession, ChartView};

#[gpui::test]
fn test_basic_chart_ui(cx: &mut TestAppContext) {
    let session = cx.update(|cx| {
        cx.new(|_| {
            let mut session = ChartSession::new(ChartConfig::default()).unwrap();
            let bars = (0..30).map(|d| Ohlcv::flat(d * DAY_MS, 100.0 + d as f64)).collect();
            session.initialize(bars, ChartConfig::default()).unwrap();
            session
        })
    });

    let window = cx.add_window(|_window, cx| ChartView::new(session.clone(), cx));

    window
        .update(cx, |view, _window, _cx| {
            assert!(
                view.chart.entity_id() == session.entity_id(),
                "ChartView should hold the chart session it was built with"
            );
        })
        .unwrap();

    session.read_with(cx, |session, _| assert_eq!(session.series().len(), 30));
}

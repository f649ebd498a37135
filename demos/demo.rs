use gpui::prelude::*;
use gpui::*;
use gpui_trend_chart::{ChartConfig, ChartKind, ChartSession, ChartView, Ohlcv};
use rand::Rng;

struct DemoApp {
    chart: Entity<ChartView>,
}

fn generate_bars(count: usize) -> Vec<Ohlcv> {
    let day_ms = 24 * 3600 * 1000;
    let now = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let mut price: f64 = 100.0;
    (0..count)
        .map(|i| {
            let time = now - (count - i) as i64 * day_ms;
            let open = price;
            let close = (price + rng.random_range(-4.0..4.0)).max(1.0);
            let high = open.max(close) + rng.random_range(0.0..2.0);
            let low = (open.min(close) - rng.random_range(0.0..2.0)).max(0.5);
            price = close;
            Ohlcv::new(time, open, high, low, close, rng.random_range(1e5..5e6))
        })
        .collect()
}

impl DemoApp {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut config = ChartConfig::default();
        config.chart_kind = ChartKind::Candlestick;
        config.sma.enabled = true;

        let session = cx.new(|_| {
            let mut session = ChartSession::new(config.clone()).expect("default config is valid");
            session
                .initialize(generate_bars(180), config)
                .expect("generated bars are ordered");
            session
        });
        let chart = cx.new(|cx| ChartView::new(session, cx));
        window.focus(&chart.read(cx).focus_handle(cx));

        Self { chart }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(gpui::white())
            .child(
                div()
                    .p_2()
                    .text_size(px(12.0))
                    .child("t: free line   h: horizontal line   esc: cancel   c: line/candles   s: SMA   r: reset"),
            )
            .child(div().flex_1().child(self.chart.clone()))
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        gpui_trend_chart::init(cx);

        cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| DemoApp::new(window, cx))
        })
        .expect("failed to open window");
    });
}

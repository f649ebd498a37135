use gpui_trend_chart::data_types::{ChartConfig, ChartKind, Interval, SeriesRequest, Timeframe};

#[test]
fn test_partial_json_uses_defaults() {
    let config = ChartConfig::from_json(r#"{"chart_kind": "candlestick", "sma": {"enabled": true, "period": 5}}"#)
        .unwrap();
    assert_eq!(config.chart_kind, ChartKind::Candlestick);
    assert!(config.sma.enabled);
    assert_eq!(config.sma.period, 5);
    assert_eq!(config.width, 800.0);
    assert_eq!(config.margins.right, 60.0);
    assert_eq!(config.timezone, chrono_tz::UTC);
}

#[test]
fn test_json_timezone() {
    let config = ChartConfig::from_json(r#"{"timezone": "Europe/Paris"}"#).unwrap();
    assert_eq!(config.timezone, chrono_tz::Europe::Paris);
}

#[test]
fn test_invalid_json_config() {
    assert!(ChartConfig::from_json(r#"{"chart_kind": "area"}"#).is_err());
    assert!(ChartConfig::from_json(r#"{"width": 10.0}"#).is_err());
    assert!(ChartConfig::from_json(r#"{"zoom": {"min_scale": 4.0, "max_scale": 2.0, "wheel_sensitivity": 0.002}}"#).is_err());
    assert!(ChartConfig::from_json("not json").is_err());
}

#[test]
fn test_parse_enums() {
    assert_eq!("line".parse::<ChartKind>().unwrap(), ChartKind::Line);
    assert_eq!("candlestick".parse::<ChartKind>().unwrap(), ChartKind::Candlestick);
    assert!("bars".parse::<ChartKind>().is_err());

    assert_eq!("3months".parse::<Timeframe>().unwrap(), Timeframe::ThreeMonths);
    assert!("2days".parse::<Timeframe>().is_err());

    assert_eq!("1hr".parse::<Interval>().unwrap(), Interval::OneHour);
    assert!("1sec".parse::<Interval>().is_err());
}

#[test]
fn test_available_intervals() {
    assert_eq!(
        Timeframe::OneDay.available_intervals(),
        &[Interval::OneMinute, Interval::FiveMinutes, Interval::OneHour]
    );
    assert!(!Timeframe::FiveYears.available_intervals().contains(&Interval::OneHour));

    assert!(SeriesRequest::new("MSFT", Timeframe::OneYear, Interval::OneWeek).is_ok());
    assert!(SeriesRequest::new("MSFT", Timeframe::OneYear, Interval::OneMinute).is_err());
}

#[test]
fn test_ticks_per_interval() {
    assert_eq!(Interval::OneHour.ticks_per_interval(60_000), 60.0);
    assert_eq!(Interval::OneDay.ticks_per_interval(3_600_000), 24.0);
    assert_eq!(Interval::OneMinute.ticks_per_interval(0), 0.0);
}

use crate::data_types::Timestamp;
use eyre::{bail, ensure, eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Candlestick,
}

impl FromStr for ChartKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(Self::Line),
            "candlestick" => Ok(Self::Candlestick),
            other => Err(eyre!("unrecognized chart kind `{other}`")),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Line => "line",
            Self::Candlestick => "candlestick",
        })
    }
}

/// Which drawing tool is armed. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    None,
    Free,
    Horizontal,
}

impl DrawMode {
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 60.0,
            bottom: 30.0,
            left: 20.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmaConfig {
    pub enabled: bool,
    pub period: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 20,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Wheel delta (in pixels) to log2 zoom factor.
    pub wheel_sensitivity: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 10.0,
            wheel_sensitivity: 0.002,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub chart_kind: ChartKind,
    pub sma: SmaConfig,
    pub zoom: ZoomConfig,
    pub timezone: chrono_tz::Tz,
    pub price_padding_pct: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margins: Margins::default(),
            chart_kind: ChartKind::Line,
            sma: SmaConfig::default(),
            zoom: ZoomConfig::default(),
            timezone: chrono_tz::UTC,
            price_padding_pct: 0.1,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).wrap_err("invalid chart config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.margins;
        ensure!(
            self.width.is_finite() && self.height.is_finite(),
            "chart size must be finite"
        );
        ensure!(
            [m.top, m.right, m.bottom, m.left].iter().all(|v| v.is_finite() && *v >= 0.0),
            "margins must be finite and non-negative"
        );
        ensure!(
            self.width - m.left - m.right > 0.0 && self.height - m.top - m.bottom > 0.0,
            "margins leave no drawable area in a {}x{} chart",
            self.width,
            self.height
        );
        if self.sma.enabled {
            ensure!(self.sma.period > 0, "SMA period must be positive");
        }
        let z = &self.zoom;
        ensure!(
            z.min_scale > 0.0 && z.min_scale <= z.max_scale,
            "invalid zoom scale extent [{}, {}]",
            z.min_scale,
            z.max_scale
        );
        ensure!(
            self.price_padding_pct.is_finite() && self.price_padding_pct >= 0.0,
            "price padding must be finite and non-negative"
        );
        Ok(())
    }
}

/// Historical window requested from the data provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "5years")]
    FiveYears,
}

impl Timeframe {
    pub fn available_intervals(&self) -> &'static [Interval] {
        use Interval::*;
        match self {
            Self::OneDay => &[OneMinute, FiveMinutes, OneHour],
            Self::OneMonth => &[FiveMinutes, OneHour, OneDay],
            Self::ThreeMonths => &[OneHour, OneDay, OneWeek],
            Self::OneYear | Self::FiveYears => &[OneDay, OneWeek],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1 day",
            Self::OneMonth => "1 month",
            Self::ThreeMonths => "3 month",
            Self::OneYear => "1 year",
            Self::FiveYears => "5 years",
        }
    }
}

impl FromStr for Timeframe {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "1day" => Self::OneDay,
            "1month" => Self::OneMonth,
            "3months" => Self::ThreeMonths,
            "1year" => Self::OneYear,
            "5years" => Self::FiveYears,
            other => bail!("unrecognized timeframe `{other}`"),
        })
    }
}

/// Bar width requested from the data provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "1hr")]
    OneHour,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
}

impl Interval {
    pub fn duration_ms(&self) -> Timestamp {
        const MINUTE: Timestamp = 60 * 1000;
        match self {
            Self::OneMinute => MINUTE,
            Self::FiveMinutes => 5 * MINUTE,
            Self::OneHour => 60 * MINUTE,
            Self::OneDay => 24 * 60 * MINUTE,
            Self::OneWeek => 7 * 24 * 60 * MINUTE,
        }
    }

    /// How many ticks of `tick_ms` make up one interval.
    pub fn ticks_per_interval(&self, tick_ms: Timestamp) -> f64 {
        if tick_ms <= 0 {
            return 0.0;
        }
        self.duration_ms() as f64 / tick_ms as f64
    }
}

impl FromStr for Interval {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "1min" => Self::OneMinute,
            "5min" => Self::FiveMinutes,
            "1hr" => Self::OneHour,
            "1day" => Self::OneDay,
            "1week" => Self::OneWeek,
            other => bail!("unrecognized interval `{other}`"),
        })
    }
}

use super::data::{price_extent, time_extent, Ohlcv, Timestamp};
use super::state::{Interval, Timeframe};
use eyre::{ensure, Result};
use serde::{Deserialize, Serialize};

/// What the surrounding UI asks the data provider for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub interval: Interval,
}

impl SeriesRequest {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe, interval: Interval) -> Result<Self> {
        ensure!(
            timeframe.available_intervals().contains(&interval),
            "interval {:?} is not available for timeframe {}",
            interval,
            timeframe.label()
        );
        Ok(Self {
            symbol: symbol.into(),
            timeframe,
            interval,
        })
    }
}

/// Source of historical bars. Transport and parsing live behind this trait.
pub trait DataProvider {
    fn fetch(&self, request: &SeriesRequest) -> Result<Vec<Ohlcv>>;
}

/// In-memory provider returning a fixed series for every request.
pub struct VecDataProvider {
    points: Vec<Ohlcv>,
}

impl VecDataProvider {
    pub fn new(points: Vec<Ohlcv>) -> Self {
        Self { points }
    }
}

impl DataProvider for VecDataProvider {
    fn fetch(&self, _request: &SeriesRequest) -> Result<Vec<Ohlcv>> {
        Ok(self.points.clone())
    }
}

/// Ascending OHLCV series with range queries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OhlcvSeries {
    points: Vec<Ohlcv>,
}

impl OhlcvSeries {
    /// Builds a series, rejecting unordered dates and non-finite values.
    pub fn new(points: Vec<Ohlcv>) -> Result<Self> {
        for (i, p) in points.iter().enumerate() {
            ensure!(p.is_finite(), "point {} at {} has non-finite values", i, p.time);
        }
        ensure!(
            points.windows(2).all(|w| w[0].time <= w[1].time),
            "points must be ordered ascending by date"
        );
        Ok(Self { points })
    }

    pub fn push(&mut self, point: Ohlcv) -> Result<()> {
        ensure!(point.is_finite(), "point at {} has non-finite values", point.time);
        if let Some(last) = self.points.last() {
            ensure!(
                point.time >= last.time,
                "point at {} is older than the last point at {}",
                point.time,
                last.time
            );
        }
        self.points.push(point);
        Ok(())
    }

    pub fn points(&self) -> &[Ohlcv] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&Ohlcv> {
        self.points.last()
    }

    pub fn time_extent(&self) -> Option<(Timestamp, Timestamp)> {
        time_extent(&self.points)
    }

    /// Points whose date lies in `[t_min, t_max]`.
    pub fn iter_range(&self, t_min: f64, t_max: f64) -> impl Iterator<Item = &Ohlcv> + '_ {
        let start = self.points.partition_point(|p| (p.time as f64) < t_min);
        let end = self.points.partition_point(|p| (p.time as f64) <= t_max);
        self.points[start..end.max(start)].iter()
    }

    /// Visible points plus one neighbour on each side, so series lines run
    /// to the plot edges.
    pub fn visible_slice(&self, t_min: f64, t_max: f64) -> &[Ohlcv] {
        let start = self.points.partition_point(|p| (p.time as f64) < t_min);
        let end = self.points.partition_point(|p| (p.time as f64) <= t_max);
        let start = start.saturating_sub(1);
        let end = (end + 1).min(self.points.len());
        &self.points[start..end.max(start)]
    }

    /// `(min low, max high)` over the points visible in `[t_min, t_max]`.
    pub fn price_range(&self, t_min: f64, t_max: f64) -> Option<(f64, f64)> {
        price_extent(self.iter_range(t_min, t_max))
    }

    /// The point closest in time to `time`.
    pub fn nearest(&self, time: f64) -> Option<&Ohlcv> {
        let i = self.points.partition_point(|p| (p.time as f64) < time);
        let after = self.points.get(i);
        let before = i.checked_sub(1).and_then(|j| self.points.get(j));
        match (before, after) {
            (Some(b), Some(a)) => {
                if time - b.time as f64 > a.time as f64 - time {
                    Some(a)
                } else {
                    Some(b)
                }
            }
            (Some(b), None) => Some(b),
            (None, a) => a,
        }
    }
}

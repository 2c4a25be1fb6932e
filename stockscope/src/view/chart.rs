//! Line-chart input for the price history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockscope_core::{PricePoint, latest_window};

/// Series label.
pub const SERIES_LABEL: &str = "Stock Price";
/// X axis title.
pub const X_TITLE: &str = "Date";
/// Y axis title.
pub const Y_TITLE: &str = "Price (USD)";

/// One data series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// One value per label.
    pub data: Vec<Decimal>,
}

/// Everything a line chart needs, nothing about how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// `YYYY-MM-DD` dates, ascending.
    pub labels: Vec<String>,
    /// The close series.
    pub series: Series,
    /// X axis title.
    pub x_title: String,
    /// Y axis title.
    pub y_title: String,
    /// Whether a legend is drawn.
    pub legend: bool,
}

impl ChartSpec {
    /// Build from a close series: keep the latest `window` points, ascending.
    ///
    /// Returns `None` when there is nothing to plot.
    #[must_use]
    pub fn from_history(points: Vec<PricePoint>, window: usize) -> Option<Self> {
        let points = latest_window(points, window);
        if points.is_empty() {
            return None;
        }
        let (labels, data) = points
            .iter()
            .map(|p| (p.date.format("%Y-%m-%d").to_string(), p.close))
            .unzip();
        Some(Self {
            labels,
            series: Series {
                label: SERIES_LABEL.to_string(),
                data,
            },
            x_title: X_TITLE.to_string(),
            y_title: Y_TITLE.to_string(),
            legend: false,
        })
    }

    /// Number of plotted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when nothing is plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

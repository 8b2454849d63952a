//! Aggregate payloads computed server-side for one (year, month).
//!
//! The coordinator never looks inside these; only the views do.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales totals for the selected month.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSummary {
    pub total_sale_amount: Decimal,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

/// Number of items falling into one price range, e.g. `"101-200"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub range: String,
    pub count: u64,
}

/// Price-range histogram backing the bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarSeries {
    pub buckets: Vec<PriceBucket>,
}

impl BarSeries {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Number of items in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlice {
    #[serde(alias = "_id")]
    pub category: String,
    #[serde(alias = "items")]
    pub count: u64,
}

/// Category breakdown backing the pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieSeries {
    pub slices: Vec<CategorySlice>,
}

impl PieSeries {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|slice| slice.count).sum()
    }
}
